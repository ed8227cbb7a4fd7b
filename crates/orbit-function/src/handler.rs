//! Function entry points: build the HTTP answer for one invocation.

use crate::config::{ConfigError, FunctionConfig};
use crate::search::{MediaSearch, SearchError, SearchRequest};
use crate::select::pick_random;
use crate::shape::{exif_items, plain_items};
use rand::Rng;
use serde_json::{json, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// `{image, name, meta, desc}` items; what the carousel consumes.
    Plain,
    /// `{image, photoDate, uploadDate, location, camera, width, height}` items.
    Exif,
}

impl Variant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "cloudinary-random" => Some(Variant::Plain),
            "cloudinary-random-exif" => Some(Variant::Exif),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Plain => "cloudinary-random",
            Variant::Exif => "cloudinary-random-exif",
        }
    }

    fn request(self, folder: &str) -> SearchRequest {
        let request = SearchRequest::for_folder(folder);
        match self {
            Variant::Plain => request,
            Variant::Exif => request.with_metadata(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: String,
}

impl FunctionResponse {
    pub fn json(status: u16, body: &Value) -> Self {
        Self {
            status,
            headers: vec![
                ("Content-Type", "application/json"),
                ("Access-Control-Allow-Origin", "*"),
            ],
            body: body.to_string(),
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: vec![("Content-Type", "text/plain; charset=utf-8")],
            body: body.into(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }
}

pub fn config_error_response(err: &ConfigError) -> FunctionResponse {
    log::error!("[config] {err}");
    let error = match err {
        ConfigError::MissingCredentials(_) => "Missing environment variables",
        ConfigError::Invalid { .. } => "invalid_configuration",
    };
    FunctionResponse::json(500, &json!({ "error": error, "detail": err.to_string() }))
}

pub fn upstream_error_response(err: &SearchError) -> FunctionResponse {
    log::error!("[search] function error: {err}");
    FunctionResponse::json(
        500,
        &json!({ "error": "cloudinary_request_failed", "detail": err.to_string() }),
    )
}

/// Search the configured folder, pick a random subset and shape it.
pub fn random_items<S, R>(
    variant: Variant,
    config: &FunctionConfig,
    search: &S,
    rng: &mut R,
) -> Result<Value, SearchError>
where
    S: MediaSearch + ?Sized,
    R: Rng + ?Sized,
{
    log::info!("[search] searching folder: {}", config.folder);
    let resources = search.search(&variant.request(&config.folder))?.resources;
    log::info!("[search] found {} images", resources.len());

    let selected = pick_random(resources, config.pick_count, rng);
    let items = match variant {
        Variant::Plain => serde_json::to_value(plain_items(&selected, &config.folder))?,
        Variant::Exif => serde_json::to_value(exif_items(&selected))?,
    };
    Ok(json!({ "items": items }))
}

pub fn handle<S, R>(variant: Variant, config: &FunctionConfig, search: &S, rng: &mut R) -> FunctionResponse
where
    S: MediaSearch + ?Sized,
    R: Rng + ?Sized,
{
    match random_items(variant, config, search, rng) {
        Ok(body) => FunctionResponse::json(200, &body),
        Err(e) => upstream_error_response(&e),
    }
}

/// Health check.
pub fn hello() -> FunctionResponse {
    FunctionResponse::text(200, "Hello, the Netlify function is up! 👋")
}
