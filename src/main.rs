//! Keiri - a countdown timer widget inside a navigation page shell
//!
//! This is the main entry point serving the page and timer controls.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use keiri::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::timer_events_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("keiri={},tower_http=info", config.log_level()))
        .init();

    info!("Starting keiri v{}", env!("CARGO_PKG_VERSION"));

    let (bounds, tick_period) = match (config.bounds(), config.tick_period()) {
        (Ok(bounds), Ok(period)) => (bounds, period),
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!("Configuration: host={}, port={}, seconds={}, tick={:?}",
          config.host, config.port, config.seconds, tick_period);

    // Create application state hosting the timer widget
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        config.seconds,
        bounds,
        tick_period,
    ));

    // Report completions and duration changes
    tokio::spawn(timer_events_task(Arc::clone(&state)));

    if config.autostart {
        state.start().map_err(anyhow::Error::msg)?;
    }

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /, /stats, /goals  - Page shell");
    info!("  GET  /timer             - Current timer frame");
    info!("  POST /timer/:action     - increment, decrement, start, pause, resume, toggle, reset");
    info!("  PUT  /timer/duration    - Reconfigure requested duration");
    info!("  GET  /navigation        - Navigation entries for ?location=");
    info!("  GET  /status            - Timer and server status");
    info!("  GET  /health            - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    state.shutdown().map_err(anyhow::Error::msg)?;
    info!("Server shutdown complete");
    Ok(())
}
