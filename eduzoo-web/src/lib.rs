#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod audio;
pub mod controller;
pub mod dom;
pub mod game;
pub mod logger;
pub mod router;
pub mod view;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(err) = logger::init(log::LevelFilter::Info) {
        web_sys::console::warn_1(&JsValue::from(err.to_string()));
    }
    log::info!("eduzoo-web {} ready", env!("CARGO_PKG_VERSION"));
}
