//! Summaries of the EXIF fields Cloudinary returns in `image_metadata`.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

type Metadata = Map<String, Value>;

/// Text form of a metadata value. Cloudinary sends most EXIF values as
/// strings, but numbers show up too.
fn text(meta: &Metadata, key: &str) -> Option<String> {
    match meta.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number(meta: &Metadata, key: &str) -> Option<f64> {
    match meta.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

const DATE_TIME_FORMATS: [&str; 3] = ["%Y:%m:%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const DATE_FORMATS: [&str; 2] = ["%Y:%m:%d", "%Y-%m-%d"];

/// `2024:01:15 14:30:22` (EXIF) or `2024-01-15T14:30:22` → `2024.01.15 14:30`.
/// A date without a time renders as `2024.01.15`. Dates that do not exist
/// on the calendar are rejected.
pub fn parse_exif_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if let Some(dt) = DATE_TIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
    {
        return Some(dt.format("%Y.%m.%d %H:%M").to_string());
    }
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
        .map(|d| d.format("%Y.%m.%d").to_string())
}

/// Capture date from `DateTimeOriginal`, falling back to `DateTime`.
pub fn photo_date(meta: &Metadata) -> Option<String> {
    text(meta, "DateTimeOriginal")
        .or_else(|| text(meta, "DateTime"))
        .and_then(|raw| parse_exif_date(&raw))
}

/// `lat, lon` with four decimals. A zero coordinate counts as missing.
pub fn format_gps(lat: f64, lon: f64) -> Option<String> {
    if lat == 0.0 || lon == 0.0 || !lat.is_finite() || !lon.is_finite() {
        return None;
    }
    Some(format!("{lat:.4}°, {lon:.4}°"))
}

pub fn location(meta: &Metadata) -> Option<String> {
    format_gps(number(meta, "GPSLatitude")?, number(meta, "GPSLongitude")?)
}

/// `Make Model · f/1.8, 1/200s, ISO 100`, details only when present.
pub fn camera_summary(meta: &Metadata) -> Option<String> {
    let body: Vec<String> = ["Make", "Model"]
        .into_iter()
        .filter_map(|k| text(meta, k))
        .collect();
    if body.is_empty() {
        return None;
    }
    let mut camera = body.join(" ");

    let mut details = Vec::new();
    if let Some(f) = text(meta, "FNumber") {
        details.push(format!("f/{f}"));
    }
    if let Some(t) = text(meta, "ExposureTime") {
        details.push(format!("{t}s"));
    }
    if let Some(iso) = text(meta, "ISOSpeedRatings") {
        details.push(format!("ISO {iso}"));
    }
    if !details.is_empty() {
        camera.push_str(" · ");
        camera.push_str(&details.join(", "));
    }
    Some(camera)
}
