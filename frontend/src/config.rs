use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// Path of the sign-in page on the accounting service's origin, used when no
/// `login_url` is configured.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    /// External sign-in page; this app has no login route of its own.
    pub login_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static LOGIN_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global(global: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> RuntimeConfig {
    #[cfg(target_arch = "wasm32")]
    {
        // window.__LEDGERLY_ENV (env.js) wins over window.__LEDGERLY_CONFIG
        RuntimeConfig {
            api_base_url: read_global("__LEDGERLY_ENV", ["API_BASE_URL", "api_base_url"])
                .or_else(|| read_global("__LEDGERLY_CONFIG", ["api_base_url", "API_BASE_URL"])),
            login_url: read_global("__LEDGERLY_ENV", ["LOGIN_URL", "login_url"])
                .or_else(|| read_global("__LEDGERLY_CONFIG", ["login_url", "LOGIN_URL"])),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        RuntimeConfig::default()
    }
}

#[cfg(target_arch = "wasm32")]
fn write_window_config(cfg: &RuntimeConfig) {
    let Some(w) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    for (key, value) in [("api_base_url", &cfg.api_base_url), ("login_url", &cfg.login_url)] {
        if let Some(value) = value {
            let _ = js_sys::Reflect::set(
                &obj,
                &key.into(),
                &wasm_bindgen::JsValue::from_str(value),
            );
        }
    }
    let _ = js_sys::Reflect::set(&w, &"__LEDGERLY_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    #[cfg(target_arch = "wasm32")]
    {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            log::warn!("config.json returned {}", resp.status());
            return None;
        }
        let cfg = resp.json::<RuntimeConfig>().await.ok()?;
        write_window_config(&cfg);
        Some(cfg)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn cache_base_url(value: &str) -> String {
    let normalized = normalize_base_url(value);
    API_BASE_URL.get_or_init(|| normalized).clone()
}

fn normalize_base_url(value: &str) -> String {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

fn cache_login_url(value: Option<String>) {
    if let Some(url) = value.map(|url| url.trim().to_string()).filter(|url| !url.is_empty()) {
        let _ = LOGIN_URL.set(url);
    }
}

/// `scheme://host[:port]` of an absolute URL; `None` for relative ones.
fn origin_of(url: &str) -> Option<&str> {
    let scheme_end = url.find("://")? + 3;
    let host_end = url[scheme_end..]
        .find('/')
        .map(|offset| scheme_end + offset)
        .unwrap_or(url.len());
    Some(&url[..host_end])
}

fn default_login_url(api_base_url: &str) -> String {
    match origin_of(api_base_url) {
        Some(origin) => format!("{}{}", origin, DEFAULT_LOGIN_PATH),
        None => DEFAULT_LOGIN_PATH.to_string(),
    }
}

/// Where anonymous callers are sent: the configured `login_url`, else the
/// sign-in page on the API's origin.
pub fn login_url() -> String {
    if let Some(url) = LOGIN_URL.get() {
        return url.clone();
    }
    let api_base_url = API_BASE_URL
        .get()
        .map(String::as_str)
        .unwrap_or(DEFAULT_API_BASE_URL);
    default_login_url(api_base_url)
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let globals = snapshot_from_globals();
    if let Some(existing) = globals.api_base_url {
        cache_login_url(globals.login_url);
        return cache_base_url(&existing);
    }
    let fetched = fetch_runtime_config().await.unwrap_or_default();
    cache_login_url(globals.login_url.or(fetched.login_url));
    if let Some(url) = fetched.api_base_url {
        return cache_base_url(&url);
    }
    log::debug!("no runtime config found, using {}", DEFAULT_API_BASE_URL);
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL resolved to {}, sign-in at {}", url, login_url());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes_and_falls_back() {
        assert_eq!(
            normalize_base_url("https://ledger.example.com/api/"),
            "https://ledger.example.com/api"
        );
        assert_eq!(normalize_base_url("  "), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn runtime_config_parses_optional_urls() {
        let cfg: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.api_base_url.is_none());
        assert!(cfg.login_url.is_none());
        let cfg: RuntimeConfig = serde_json::from_str(
            r#"{"api_base_url":"http://api.local","login_url":"https://sso.local/signin"}"#,
        )
        .unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("http://api.local"));
        assert_eq!(cfg.login_url.as_deref(), Some("https://sso.local/signin"));
    }

    #[test]
    fn default_login_url_lives_on_the_api_origin() {
        assert_eq!(
            default_login_url("https://ledger.example.com/api"),
            "https://ledger.example.com/login"
        );
        assert_eq!(
            default_login_url("http://localhost:3000/api"),
            "http://localhost:3000/login"
        );
        assert_eq!(
            default_login_url("https://ledger.example.com"),
            "https://ledger.example.com/login"
        );
        assert_eq!(default_login_url("/api"), DEFAULT_LOGIN_PATH);
    }
}
