// CSS string builders used by the DOM cards, tested on the host.

#![allow(dead_code)]
mod css {
    include!("../src/css.rs");
}

use css::*;
use glam::DVec3;
use orbit_core::{card_transform, CardTransform};

#[test]
fn transform_carries_position_rotation_and_scale() {
    let t = CardTransform {
        position: DVec3::new(10.0, -5.0, 520.0),
        rotation_y_deg: 45.0,
        scale: 1.05,
        opacity: 1.0,
        z_index: 200,
        depth: 1.0,
    };
    assert_eq!(
        card_transform_css(&t),
        "translate(-50%, -50%) translate3d(10px, -5px, 520px) rotateY(45deg) scale(1.05)"
    );
}

#[test]
fn front_card_transform_is_centred() {
    let css = card_transform_css(&card_transform(0.0, 0, 4));
    assert!(css.starts_with("translate(-50%, -50%) translate3d(0px, 0px, 520px)"));
    assert!(css.contains("rotateY(0deg)"));
}

#[test]
fn opacity_is_two_decimals() {
    assert_eq!(opacity_css(0.25), "0.25");
    assert_eq!(opacity_css(1.0), "1.00");
    assert_eq!(opacity_css(0.123456), "0.12");
}

#[test]
fn background_image_quotes_url() {
    assert_eq!(
        background_image_css("https://res.cloudinary.com/a/b.jpg"),
        "url(\"https://res.cloudinary.com/a/b.jpg\")"
    );
}

#[test]
fn background_image_escapes_quotes_and_backslashes() {
    assert_eq!(background_image_css(r#"a"b\c"#), r#"url("a\"b\\c")"#);
}
