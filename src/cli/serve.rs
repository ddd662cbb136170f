//! Serve the gateway REST API.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::rest::{self, AppState};

/// Load config, apply CLI overrides, and serve until interrupted.
pub async fn run(bind: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(bind) = bind {
        let ip = bind
            .parse()
            .with_context(|| format!("invalid bind address '{bind}'"))?;
        config.bind.set_ip(ip);
    }
    if let Some(port) = port {
        config.bind.set_port(port);
    }

    info!(
        portal = %config.portal_url,
        "starting samvidha-gateway v{}",
        env!("CARGO_PKG_VERSION")
    );

    let state = Arc::new(AppState::new(&config));
    let server = rest::start(config.bind, state);

    tokio::select! {
        result = server => result,
        _ = tokio::signal::ctrl_c() => {
            info!("received shutdown signal");
            Ok(())
        }
    }
}
