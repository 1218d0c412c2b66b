//! Todo List Frontend Entry Point

mod models;
mod store;
mod rows;
mod config;
mod error;
mod components;
mod app;

use app::App;
use config::AppConfig;
use error::AppError;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Id of the host element the app mounts into
const MOUNT_ID: &str = "root";

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = start() {
        // The logger may not be installed yet, so go straight to the console
        web_sys::console::error_1(&format!("[APP] Startup failed: {}", err).into());
    }
}

fn start() -> Result<(), AppError> {
    let document = web_sys::window()
        .ok_or(AppError::MissingWindow)?
        .document()
        .ok_or(AppError::MissingDocument)?;
    let element = document
        .get_element_by_id(MOUNT_ID)
        .ok_or_else(|| AppError::MountPointNotFound(MOUNT_ID.to_string()))?;

    let (config, config_error) = AppConfig::from_element(&element);
    console_logger::init(config.log_level)?;
    if let Some(err) = config_error {
        log::warn!("{}, using defaults", err);
    }

    let mount_point = element
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| AppError::MountPointNotHtml(MOUNT_ID.to_string()))?;

    log::info!("mounting into #{}", MOUNT_ID);
    mount_to(mount_point, move || view! { <App config=config /> }).forget();
    Ok(())
}
