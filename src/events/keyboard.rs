use crate::cards::DomCard;
use crate::overlay;
use orbit_core::{is_dismiss_key, OrbitSession};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    document: &web::Document,
    session: &Rc<RefCell<OrbitSession<DomCard>>>,
) {
    if is_dismiss_key(&ev.key()) {
        overlay::close(document, session);
    }
}

pub fn wire_global_keydown(document: web::Document, session: Rc<RefCell<OrbitSession<DomCard>>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &document, &session);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
