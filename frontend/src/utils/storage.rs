#[cfg(target_arch = "wasm32")]
use web_sys::{Storage, Window};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const CURRENT_USER_KEY: &str = "current_user";

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn read_item(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()
            .ok()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

pub fn remove_items(keys: &[&str]) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Ok(storage) = local_storage() {
            for key in keys {
                let _ = storage.remove_item(key);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = keys;
    }
}

/// Full page navigation. No-op outside the browser.
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Ok(win) = window() {
            let location = win.location();
            if location.pathname().map(|p| p == path).unwrap_or(false) {
                return;
            }
            log::debug!("redirecting to {}", path);
            let _ = location.set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}
