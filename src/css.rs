use orbit_core::CardTransform;

/// CSS `transform` for a card centred on the stage origin.
#[inline]
pub fn card_transform_css(t: &CardTransform) -> String {
    format!(
        "translate(-50%, -50%) translate3d({}px, {}px, {}px) rotateY({}deg) scale({})",
        t.position.x, t.position.y, t.position.z, t.rotation_y_deg, t.scale
    )
}

#[inline]
pub fn opacity_css(opacity: f64) -> String {
    format!("{:.2}", opacity)
}

/// `url("...")` with quotes and backslashes escaped.
#[inline]
pub fn background_image_css(url: &str) -> String {
    let escaped = url.replace('\\', "\\\\").replace('"', "\\\"");
    format!("url(\"{}\")", escaped)
}
