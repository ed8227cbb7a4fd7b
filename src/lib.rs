#![cfg(target_arch = "wasm32")]
use crate::cards::{DomCard, DomCardFactory};
use crate::frame::FrameTask;
use orbit_core::{FeedStatus, OrbitSession};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod cards;
mod constants;
mod css;
mod dom;
mod events;
mod fetch;
mod frame;
mod overlay;

type Session = Rc<RefCell<OrbitSession<DomCard>>>;

fn set_status(document: &web::Document, status: &FeedStatus) {
    dom::set_text(document, constants::STATUS_ID, &status.to_string());
}

fn build_factory(document: &web::Document, stage: web::Element, session: &Session) -> DomCardFactory {
    let doc_open = document.clone();
    let session_open = session.clone();
    DomCardFactory {
        document: document.clone(),
        stage,
        on_open: Rc::new(move |index| overlay::open(&doc_open, &session_open, index)),
    }
}

async fn load_feed(
    document: web::Document,
    session: Session,
    factory: Rc<RefCell<DomCardFactory>>,
) {
    let outcome = fetch::fetch_photos(constants::FEED_ENDPOINT).await;
    if outcome.status.is_degraded() {
        log::warn!("[feed] {}", outcome.status);
    } else {
        log::info!("[feed] {}", outcome.status);
    }
    session
        .borrow_mut()
        .replace_photos(outcome.photos, &mut *factory.borrow_mut());
    overlay::hide(&document);
    set_status(&document, &outcome.status);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let stage_el = document
        .get_element_by_id(constants::STAGE_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::STAGE_ID))?;
    let stage: web::HtmlElement = stage_el
        .clone()
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let session: Session = Rc::new(RefCell::new(OrbitSession::new()));
    let factory = Rc::new(RefCell::new(build_factory(&document, stage_el, &session)));

    // Something is on screen before the network answers.
    session
        .borrow_mut()
        .show_fallback(&mut *factory.borrow_mut());
    set_status(&document, &FeedStatus::Loading);

    let session_tick = session.clone();
    let inertia = FrameTask::new(move || session_tick.borrow_mut().inertia_step());

    events::wire_drag_handlers(events::DragWiring {
        stage,
        session: session.clone(),
        inertia,
    });
    events::wire_global_keydown(document.clone(), session.clone());
    overlay::wire_viewer(&document, &session);

    spawn_local(load_feed(document, session, factory));
    Ok(())
}
