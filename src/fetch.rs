use orbit_core::{outcome_from_http, resolve, FeedError, FeedOutcome};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

async fn get_text(endpoint: &str) -> anyhow::Result<(u16, String)> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let init = web::RequestInit::new();
    init.set_method("GET");
    let request = web::Request::new_with_str_and_init(endpoint, &init).map_err(js_err)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_err)?;

    let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let status = response.status();
    let body = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .unwrap_or_default();
    Ok((status, body))
}

/// One attempt, no retries. Always yields a displayable photo list.
pub async fn fetch_photos(endpoint: &str) -> FeedOutcome {
    match get_text(endpoint).await {
        Ok((status, body)) => outcome_from_http(status, &body),
        Err(e) => resolve(Err(FeedError::Network(e.to_string()))),
    }
}
