//! Browser entry point: installs press-to-zoom on `.zoom-container img`.
//!
//! Build with `wasm-pack build --target web -- --features wasm --example wasm_demo`
//! and load it from a page containing
//! `<div class="zoom-container" style="overflow: hidden"><img src="..."></div>`.

use wasm_bindgen::prelude::*;
use zoomlet::{web, ZoomConfig};

macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&JsValue::from_str(&format!($($t)*))))
}

/// Main WASM entry point
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    web::install_on_ready(ZoomConfig::default())?;
    console_log!("zoomlet demo initialized");
    Ok(())
}
