use anyhow::{anyhow, Context};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001/api/v1";
pub const DEFAULT_TIME_ZONE: &str = "Europe/Berlin";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    #[serde(alias = "API_BASE_URL")]
    pub api_base_url: String,
    #[serde(alias = "TIME_ZONE")]
    pub time_zone: String,
    #[serde(alias = "REQUEST_TIMEOUT_MS")]
    pub request_timeout_ms: u32,
    #[serde(alias = "STATUS_POLL_SECONDS")]
    pub status_poll_seconds: u32,
    #[serde(alias = "ADMIN_POLL_SECONDS")]
    pub admin_poll_seconds: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            request_timeout_ms: 15_000,
            status_poll_seconds: 60,
            admin_poll_seconds: 30,
        }
    }
}

static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

pub fn parse_runtime_config(raw: &str) -> anyhow::Result<RuntimeConfig> {
    let mut config: RuntimeConfig =
        serde_json::from_str(raw).context("runtime config is not valid JSON")?;
    if config.api_base_url.trim().is_empty() {
        config.api_base_url = DEFAULT_API_BASE_URL.to_string();
    }
    config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
    if config.request_timeout_ms == 0 {
        config.request_timeout_ms = RuntimeConfig::default().request_timeout_ms;
    }
    Ok(config)
}

pub fn parse_time_zone(name: &str) -> anyhow::Result<Tz> {
    name.parse::<Tz>()
        .map_err(|err| anyhow!(err))
        .with_context(|| format!("unknown time zone `{name}`"))
}

/// The loaded configuration, or defaults before [`init`] finished.
pub fn current() -> RuntimeConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

pub fn current_time_zone() -> Tz {
    let name = current().time_zone;
    parse_time_zone(&name).unwrap_or_else(|err| {
        log::warn!("{err:#}, falling back to {DEFAULT_TIME_ZONE}");
        chrono_tz::Europe::Berlin
    })
}

pub fn request_timeout_ms() -> u32 {
    current().request_timeout_ms
}

pub fn status_poll_ms() -> u32 {
    poll_ms(current().status_poll_seconds)
}

pub fn admin_poll_ms() -> u32 {
    poll_ms(current().admin_poll_seconds)
}

/// Polls at most every five seconds.
fn poll_ms(seconds: u32) -> u32 {
    seconds.max(5).saturating_mul(1000)
}

#[cfg(target_arch = "wasm32")]
fn read_window_global(name: &str) -> Option<RuntimeConfig> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let raw = js_sys::JSON::stringify(&value).ok()?.as_string()?;
    match parse_runtime_config(&raw) {
        Ok(config) => Some(config),
        Err(err) => {
            log::warn!("ignoring window.{name}: {err:#}");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    read_window_global("__SEDA24_ENV").or_else(|| read_window_global("__SEDA24_CONFIG"))
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .context("no window origin")?;
    let response = reqwest::get(format!("{origin}/config.json"))
        .await
        .context("config.json request failed")?;
    if !response.status().is_success() {
        return Err(anyhow!("config.json answered {}", response.status()));
    }
    let raw = response.text().await.context("config.json unreadable")?;
    parse_runtime_config(&raw)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    Err(anyhow!("config.json is only served to the browser"))
}

async fn load() -> RuntimeConfig {
    if let Some(config) = snapshot_from_globals() {
        return config;
    }
    match fetch_runtime_config().await {
        Ok(config) => config,
        Err(err) => {
            log::info!("using default runtime config: {err:#}");
            RuntimeConfig::default()
        }
    }
}

pub async fn await_config() -> RuntimeConfig {
    if let Some(cached) = CONFIG.get() {
        return cached.clone();
    }
    let loaded = load().await;
    CONFIG.get_or_init(|| loaded).clone()
}

pub async fn await_api_base_url() -> String {
    await_config().await.api_base_url
}

pub async fn init() {
    let config = await_config().await;
    log::info!(
        "runtime config loaded: api={} tz={}",
        config.api_base_url,
        config.time_zone
    );
}
