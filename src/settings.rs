//! Runtime settings, read with the `config` crate.
//!
//! Sources are layered in this order, later ones winning:
//! * built-in defaults,
//! * a `didyouknow.{json,toml,yaml,...}` file in the working directory
//!   (or an explicit path given to [`Settings::load_from`]),
//! * `DIDYOUKNOW_*` environment variables, e.g. `DIDYOUKNOW_DAY_COUNTING=elapsed_millis`.

use std::path::Path;

// config lets you read a separate config file
use config::{Config, Environment, File, Map, Source};
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::rotation::DayCounting;

pub const CONFIG_NAME: &str = "didyouknow";
pub const ENV_PREFIX: &str = "DIDYOUKNOW";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub day_counting: DayCounting,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            day_counting: DayCounting::default(),
            log_filter: String::from("info"),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let file = File::with_name(CONFIG_NAME).required(false);
        Self::build(file, Environment::with_prefix(ENV_PREFIX))
    }
    /// Like [`Settings::load`], but the file at `path` must exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::build(File::from(path.as_ref()), Environment::with_prefix(ENV_PREFIX))
    }
    /// Like [`Settings::load_from`], but `DIDYOUKNOW_*` variables are read from
    /// `vars` instead of the process environment.
    pub fn load_from_with_vars(path: impl AsRef<Path>, vars: Map<String, String>) -> Result<Self> {
        let env = Environment::with_prefix(ENV_PREFIX).source(Some(vars));
        Self::build(File::from(path.as_ref()), env)
    }
    fn build(file: impl Source + Send + Sync + 'static, env: Environment) -> Result<Self> {
        let settings: Settings = Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }
}
