use crate::cards::DomCard;
use crate::constants::*;
use crate::css;
use crate::dom;
use orbit_core::{closes_on_click, ClickTarget, OrbitSession, ViewerContent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Session = Rc<RefCell<OrbitSession<DomCard>>>;

pub fn show(document: &web::Document, content: &ViewerContent) {
    let image = css::background_image_css(&content.image_url);
    for id in [VIEWER_BG_ID, VIEWER_CARD_ID] {
        if let Some(el) = dom::html_element(document, id) {
            dom::set_style(&el, "background-image", &image);
        }
    }
    dom::set_text(document, VIEWER_TITLE_ID, &content.title);
    dom::set_text(document, VIEWER_META_ID, &content.date);
    dom::set_text(document, VIEWER_DESC_ID, &content.description);

    if let Some(el) = document.get_element_by_id(VIEWER_ID) {
        _ = el.class_list().add_1(ACTIVE_CLASS);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(VIEWER_ID) {
        _ = el.class_list().remove_1(ACTIVE_CLASS);
    }
}

pub fn open(document: &web::Document, session: &Session, index: usize) {
    let content = session.borrow_mut().open_viewer(index);
    if let Some(content) = content {
        show(document, &content);
    }
}

pub fn close(document: &web::Document, session: &Session) {
    if session.borrow_mut().close_viewer() {
        log::info!("[viewer] closed");
    }
    hide(document);
}

fn click_target(ev: &web::MouseEvent) -> ClickTarget {
    let id = ev
        .target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| el.id())
        .unwrap_or_default();
    match id.as_str() {
        VIEWER_ID => ClickTarget::Root,
        VIEWER_BG_ID => ClickTarget::Backdrop,
        _ => ClickTarget::Content,
    }
}

/// Close button and background clicks. The Escape key lives in `events`.
pub fn wire_viewer(document: &web::Document, session: &Session) {
    let doc_close = document.clone();
    let session_close = session.clone();
    dom::add_click_listener(document, VIEWER_CLOSE_ID, move || {
        close(&doc_close, &session_close);
    });

    if let Some(viewer) = document.get_element_by_id(VIEWER_ID) {
        let doc_bg = document.clone();
        let session_bg = session.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            if closes_on_click(click_target(&ev)) {
                close(&doc_bg, &session_bg);
            }
        }) as Box<dyn FnMut(_)>);
        _ = viewer.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
