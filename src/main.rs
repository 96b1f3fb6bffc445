mod app;
mod components;
mod config;
mod hooks;
mod models;
mod services;
mod utils;
mod views;

use app::App;

fn main() {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();
    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Blue Point starting...");

    yew::Renderer::<App>::new().render();
}
