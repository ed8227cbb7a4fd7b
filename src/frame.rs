use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Self-rescheduling `requestAnimationFrame` task.
///
/// Each frame runs `step`; the task keeps going while `step` returns true.
/// `cancel` drops the pending frame synchronously and is safe to call at
/// any time, any number of times.
#[derive(Clone)]
pub struct FrameTask {
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
}

fn request_frame(tick: &Tick, handle: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => handle.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

impl FrameTask {
    pub fn new(mut step: impl FnMut() -> bool + 'static) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None::<i32>));

        let tick_clone = tick.clone();
        let handle_clone = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_clone.set(None);
            if step() {
                request_frame(&tick_clone, &handle_clone);
            }
        }) as Box<dyn FnMut()>));

        Self { tick, handle }
    }

    /// Queue the next frame unless one is already pending.
    pub fn schedule(&self) {
        if self.handle.get().is_none() {
            request_frame(&self.tick, &self.handle);
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}
