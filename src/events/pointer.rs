use crate::cards::DomCard;
use crate::dom;
use crate::frame::FrameTask;
use orbit_core::{InputSource, OrbitSession};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct DragWiring {
    pub stage: web::HtmlElement,
    pub session: Rc<RefCell<OrbitSession<DomCard>>>,
    pub inertia: FrameTask,
}

impl DragWiring {
    fn begin(&self, source: InputSource, x: f64) -> bool {
        let started = self.session.borrow_mut().drag_start(source, x);
        if started {
            // never let a coasting orbit fight the new gesture
            self.inertia.cancel();
            log::debug!("[drag] start {:?} at {}", source, x);
        }
        started
    }

    fn track(&self, source: InputSource, x: f64) {
        self.session.borrow_mut().drag_move(source, x);
    }

    fn finish(&self, source: InputSource) {
        let coasting = self.session.borrow_mut().drag_end(source);
        if coasting {
            self.inertia.schedule();
        }
    }
}

pub fn wire_drag_handlers(w: DragWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointer_cancel(&w);
    wire_touch(&w);
}

fn add_pointer_listener(
    w: &DragWiring,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    _ = w
        .stage
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &DragWiring) {
    let wc = w.clone();
    add_pointer_listener(w, "pointerdown", move |ev: web::PointerEvent| {
        if wc.begin(InputSource::Pointer(ev.pointer_id()), ev.client_x() as f64) {
            _ = wc.stage.set_pointer_capture(ev.pointer_id());
        }
    });
}

fn wire_pointermove(w: &DragWiring) {
    let wc = w.clone();
    add_pointer_listener(w, "pointermove", move |ev: web::PointerEvent| {
        wc.track(InputSource::Pointer(ev.pointer_id()), ev.client_x() as f64);
    });
}

fn wire_pointerup(w: &DragWiring) {
    let wc = w.clone();
    add_pointer_listener(w, "pointerup", move |ev: web::PointerEvent| {
        _ = wc.stage.release_pointer_capture(ev.pointer_id());
        wc.finish(InputSource::Pointer(ev.pointer_id()));
    });
}

// A cancelled gesture or a lost capture ends the drag like a release.
fn wire_pointer_cancel(w: &DragWiring) {
    for event in ["pointercancel", "lostpointercapture"] {
        let wc = w.clone();
        add_pointer_listener(w, event, move |ev: web::PointerEvent| {
            wc.finish(InputSource::Pointer(ev.pointer_id()));
        });
    }
}

#[inline]
fn first_touch_x(ev: &web::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| t.client_x() as f64)
}

fn wire_touch(w: &DragWiring) {
    let target: &web::EventTarget = w.stage.as_ref();

    let wc = w.clone();
    dom::add_passive_touch_listener(target, "touchstart", move |ev| {
        if let Some(x) = first_touch_x(&ev) {
            wc.begin(InputSource::Touch, x);
        }
    });

    let wc = w.clone();
    dom::add_passive_touch_listener(target, "touchmove", move |ev| {
        if let Some(x) = first_touch_x(&ev) {
            wc.track(InputSource::Touch, x);
        }
    });

    for event in ["touchend", "touchcancel"] {
        let wc = w.clone();
        dom::add_passive_touch_listener(target, event, move |_ev| {
            wc.finish(InputSource::Touch);
        });
    }
}
