//! PropCare entry point.
//!
//! One binary serves SSR and the hydrated client; `dx serve` builds the
//! WASM side with explicit features.

fn main() {
    #[cfg(feature = "server")]
    init_server();

    dioxus::launch(propcare::app::App);
}

#[cfg(feature = "server")]
fn init_server() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "propcare=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PropCare");

    match propcare::config::load_config() {
        Ok(config) => {
            tracing::info!(?config, "Configuration loaded");
            // The bundled dioxus server reads its port from the environment.
            std::env::set_var("PORT", config.port.to_string());
            propcare::config::init(config);
        }
        Err(err) => {
            tracing::warn!(%err, "Config unreadable, using defaults");
        }
    }
}
