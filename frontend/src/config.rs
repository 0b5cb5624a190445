//! Application configuration.
//!
//! Constants for the demo upload pipeline, plus the drop zone configuration,
//! which the hosting page may override by defining
//! `window.__DROPZONE_CONFIG__` before the WASM module starts:
//!
//! ```html
//! <script>
//!   window.__DROPZONE_CONFIG__ = { accept: ["image/*", ".pdf"], maxSize: 52428800 };
//! </script>
//! ```

use dropzone_core::DropzoneConfig;
use wasm_bindgen::JsValue;

use crate::types::{AppError, AppResult};

/// Upload backend base URL.
pub const BACKEND_URL: &str = "http://localhost:9000";

/// Upload endpoint path, appended to [`BACKEND_URL`].
pub const UPLOAD_PATH: &str = "/api/upload";

/// Multipart field carrying the file.
pub const UPLOAD_FIELD: &str = "file";

/// Application name, used as page title.
pub const APP_NAME: &str = "Dropzone";

/// Maximum upload entries kept in the queue panel.
pub const MAX_QUEUE_ENTRIES: usize = 100;

/// Name of the page global holding drop zone overrides.
pub const CONFIG_GLOBAL: &str = "__DROPZONE_CONFIG__";

/// Read the drop zone configuration from the page, falling back to the
/// accept-everything default when it is absent or invalid.
pub fn load_dropzone_config() -> DropzoneConfig {
    match read_page_config() {
        Ok(Some(config)) => {
            log::info!("⚙️  Drop zone config loaded from window.{}", CONFIG_GLOBAL);
            config
        }
        Ok(None) => DropzoneConfig::default(),
        Err(e) => {
            log::error!("❌ Ignoring window.{}, accepting everything: {}", CONFIG_GLOBAL, e);
            DropzoneConfig::default()
        }
    }
}

fn read_page_config() -> AppResult<Option<DropzoneConfig>> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };

    let value = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(v) if !v.is_undefined() && !v.is_null() => v,
        _ => return Ok(None),
    };

    let config = serde_wasm_bindgen::from_value::<DropzoneConfig>(value)
        .map_err(|e| AppError::Config(e.to_string()))?;
    config.validate()?;

    Ok(Some(config))
}
