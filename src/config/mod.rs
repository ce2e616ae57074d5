//! Configuration management
//!
//! The portal needs two values: the REST backend base URL and an optional
//! maps/places key for the address form. Browser builds bake them in at
//! compile time (`PORTAL_API_URL` / `PORTAL_MAPS_API_KEY` at build); native
//! builds additionally read a `portal` config file and runtime environment
//! variables with the same names.

use serde::Deserialize;

/// Base URL used when nothing is configured. Relative, so browser builds
/// served behind the backend's reverse proxy work out of the box.
const DEFAULT_API_URL: &str = "/api";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PortalConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub maps_api_key: Option<String>,
}

fn default_api_url() -> String {
    compiled_api_url()
}

/// Compile-time API URL (Vite-style build variable), falling back to the
/// relative default.
fn compiled_api_url() -> String {
    option_env!("PORTAL_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

fn compiled_maps_key() -> Option<String> {
    option_env!("PORTAL_MAPS_API_KEY")
        .filter(|key| !key.is_empty())
        .map(str::to_string)
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_url: compiled_api_url(),
            maps_api_key: compiled_maps_key(),
        }
    }
}

/// Load configuration for native targets: defaults, then an optional
/// `portal.{toml,json,yaml}` file in the working directory, then
/// `PORTAL_*` environment variables.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> anyhow::Result<PortalConfig> {
    let config = ::config::Config::builder()
        .set_default("api_url", compiled_api_url())?
        .add_source(::config::File::with_name("portal").required(false))
        .add_source(::config::Environment::with_prefix("PORTAL"))
        .build()?;

    Ok(config.try_deserialize()?)
}

/// Browser builds have no runtime environment; the compile-time values are
/// the configuration.
#[cfg(target_arch = "wasm32")]
pub fn load_config() -> anyhow::Result<PortalConfig> {
    Ok(PortalConfig::default())
}

/// Load configuration, falling back to defaults when the sources are
/// malformed. UI startup must not fail over a bad config file.
pub fn load_config_or_default() -> PortalConfig {
    load_config().unwrap_or_else(|err| {
        tracing::warn!("Failed to load portal config, using defaults: {err}");
        PortalConfig::default()
    })
}
