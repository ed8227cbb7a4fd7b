//! Function configuration read from the environment.

use thiserror::Error;

pub const ENV_CLOUD_NAME: &str = "CLOUDINARY_CLOUD_NAME";
pub const ENV_API_KEY: &str = "CLOUDINARY_API_KEY";
pub const ENV_API_SECRET: &str = "CLOUDINARY_API_SECRET";
pub const ENV_FOLDER: &str = "CLOUDINARY_FOLDER";
pub const ENV_PICK_COUNT: &str = "ORBIT_PICK_COUNT";

pub const DEFAULT_FOLDER: &str = "my_love";
pub const DEFAULT_PICK_COUNT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, PartialEq, Eq)]
pub struct FunctionConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub folder: String,
    pub pick_count: usize,
}

impl std::fmt::Debug for FunctionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .field("folder", &self.folder)
            .field("pick_count", &self.pick_count)
            .finish()
    }
}

impl FunctionConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Empty values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let cloud_name = get(ENV_CLOUD_NAME);
        let api_key = get(ENV_API_KEY);
        let api_secret = get(ENV_API_SECRET);

        let (cloud_name, api_key, api_secret) = match (cloud_name, api_key, api_secret) {
            (Some(c), Some(k), Some(s)) => (c, k, s),
            (c, k, s) => {
                let missing = [
                    (ENV_CLOUD_NAME, c.is_none()),
                    (ENV_API_KEY, k.is_none()),
                    (ENV_API_SECRET, s.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, missing)| missing.then_some(name))
                .collect();
                return Err(ConfigError::MissingCredentials(missing));
            }
        };

        let pick_count = match get(ENV_PICK_COUNT) {
            None => DEFAULT_PICK_COUNT,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: ENV_PICK_COUNT,
                        value: raw,
                    })
                }
            },
        };

        Ok(Self {
            cloud_name,
            api_key,
            api_secret,
            folder: get(ENV_FOLDER).unwrap_or_else(|| DEFAULT_FOLDER.to_string()),
            pick_count,
        })
    }
}
