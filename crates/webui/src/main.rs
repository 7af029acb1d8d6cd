use records_webui::{app::App, config::load_config};

fn main() {
    init_logging();
    wasm_bindgen_futures::spawn_local(async move {
        let config = load_config().await;
        log::info!("Using backend at {}", config.api_url);

        yew::Renderer::<App>::new().render();
    });
}

fn init_logging() {
    use log::Level;
    use wasm_logger::Config;

    // use debug level for debug builds, warn level for production builds.
    #[cfg(debug_assertions)]
    let level = Level::Trace;
    #[cfg(not(debug_assertions))]
    let level = Level::Warn;

    wasm_logger::init(Config::new(level));
}
