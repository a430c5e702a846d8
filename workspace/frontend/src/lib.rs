use yew::prelude::*;

mod components;
pub mod hooks;
pub mod settings;
pub mod state;

use components::shell::DashboardShell;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <DashboardShell />
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Guest Analytics Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Loading delay: {}ms", settings.loading_delay_ms);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
