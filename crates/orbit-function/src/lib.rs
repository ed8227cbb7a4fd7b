pub mod config;
pub mod exif;
pub mod handler;
pub mod search;
pub mod select;
pub mod shape;

pub use config::{ConfigError, FunctionConfig};
pub use handler::{handle, hello, FunctionResponse, Variant};
pub use search::{CloudinaryClient, MediaSearch, Resource, SearchError, SearchRequest, SearchResponse};
