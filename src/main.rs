//! Coordina Portal - Rust Implementation
//!
//! Customer and admin web portal for the Coordina logistics platform.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize logging (browser builds log through the platform console hook)
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coordina_portal=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Coordina Portal v{}", env!("CARGO_PKG_VERSION"));

    dioxus::launch(coordina_portal::app::App);
}
