//! # Bazaar
//!
//! Storefront backend: flat item collection plus Stripe hosted checkout.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//!
//! # Run the server
//! bazaar
//! ```

use bazaar_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Item store: {}", state.config.store_path);
    info!("Frontend origin: {}", state.config.frontend_origin);

    let app = routes::create_router(state);

    info!("🛒 Bazaar starting on http://{}", addr);

    if !is_prod {
        info!("🩺 Health: http://{}/health", addr);
        info!("🧺 Items: GET http://{}/api/items-list", addr);
        info!("💳 Checkout: POST http://{}/api/create-checkout-session", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  🛒 Bazaar RS 🛒
  ━━━━━━━━━━━━━━━━
  Storefront + checkout backend
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
