use crate::constants::{CARD_CLASS, CARD_LABEL_CLASS, FRONT_CLASS};
use crate::css;
use crate::dom;
use orbit_core::{CardFactory, CardTransform, Photo, VisualCard};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `.card` div on the stage. Owns its click closure so a rebuild releases it.
pub struct DomCard {
    element: Option<web::HtmlElement>,
    label: Option<web::Element>,
    _on_click: Option<Closure<dyn FnMut()>>,
}

impl VisualCard for DomCard {
    fn set_transform(&mut self, t: &CardTransform) {
        if let Some(el) = &self.element {
            dom::set_style(el, "transform", &css::card_transform_css(t));
            dom::set_style(el, "z-index", &t.z_index.to_string());
            dom::set_style(el, "opacity", &css::opacity_css(t.opacity));
        }
    }

    fn set_label(&mut self, text: &str) {
        if let Some(label) = &self.label {
            label.set_text_content(Some(text));
        }
    }

    fn set_front(&mut self, front: bool) {
        if let Some(el) = &self.element {
            _ = el.class_list().toggle_with_force(FRONT_CLASS, front);
        }
    }
}

pub struct DomCardFactory {
    pub document: web::Document,
    pub stage: web::Element,
    pub on_open: Rc<dyn Fn(usize)>,
}

impl DomCardFactory {
    fn create_div(&self, class: &str) -> Option<web::HtmlElement> {
        let el = self
            .document
            .create_element("div")
            .map_err(|e| log::error!("[cards] create_element failed: {:?}", e))
            .ok()?;
        el.set_class_name(class);
        el.dyn_into::<web::HtmlElement>().ok()
    }
}

impl CardFactory for DomCardFactory {
    type Card = DomCard;

    fn clear(&mut self) {
        self.stage.set_inner_html("");
    }

    fn create(&mut self, index: usize, photo: &Photo) -> DomCard {
        let Some(card) = self.create_div(CARD_CLASS) else {
            return DomCard {
                element: None,
                label: None,
                _on_click: None,
            };
        };
        dom::set_style(&card, "background-image", &css::background_image_css(&photo.url));
        _ = card.set_attribute("data-index", &index.to_string());

        let label = self.create_div(CARD_LABEL_CLASS);
        if let Some(label) = &label {
            _ = card.append_child(label);
        }

        let on_open = self.on_open.clone();
        let on_click = Closure::wrap(Box::new(move || on_open(index)) as Box<dyn FnMut()>);
        _ = card.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        _ = self.stage.append_child(&card);

        DomCard {
            element: Some(card),
            label: label.map(web::Element::from),
            _on_click: Some(on_click),
        }
    }
}
