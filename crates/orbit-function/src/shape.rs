//! Response item shapes handed to the carousel.

use crate::exif;
use crate::search::Resource;
use serde::Serialize;

/// Items of the `cloudinary-random` response, the shape the carousel reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlainItem {
    pub image: String,
    pub name: String,
    pub meta: String,
    pub desc: String,
}

/// Items of the `cloudinary-random-exif` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExifItem {
    pub image: String,
    pub photo_date: Option<String>,
    pub upload_date: String,
    pub location: Option<String>,
    pub camera: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// `YYYY-MM-DD` prefix of an upload timestamp.
fn upload_day(resource: &Resource) -> &str {
    resource
        .created_at
        .as_deref()
        .and_then(|c| c.get(..10))
        .unwrap_or_default()
}

pub fn plain_items(resources: &[Resource], folder: &str) -> Vec<PlainItem> {
    resources
        .iter()
        .enumerate()
        .map(|(i, r)| PlainItem {
            image: r.secure_url.clone(),
            name: format!("{folder} #{}", i + 1),
            meta: upload_day(r).to_string(),
            desc: r.caption().unwrap_or_default().to_string(),
        })
        .collect()
}

pub fn exif_items(resources: &[Resource]) -> Vec<ExifItem> {
    resources
        .iter()
        .map(|r| {
            let (photo_date, location, camera) = match &r.image_metadata {
                Some(meta) => (
                    exif::photo_date(meta),
                    exif::location(meta),
                    exif::camera_summary(meta),
                ),
                None => (None, None, None),
            };
            ExifItem {
                image: r.secure_url.clone(),
                photo_date,
                upload_date: upload_day(r).replace('-', "."),
                location,
                camera,
                width: r.width,
                height: r.height,
            }
        })
        .collect()
}
