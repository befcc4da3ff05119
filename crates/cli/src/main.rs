//! voipd - softphone control daemon
//!
//! Reads `config-get` / `config-set` requests on standard input (or on a TCP
//! port with `--listen`) and answers with framed responses.

mod args;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use voipd_config_core::MemoryConfigStore;
use voipd_daemon_core::{serve_stdio, serve_tcp, Daemon, DaemonSettings, SessionEnd};
use voipd_infra_common::{log_welcome, setup_logging};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let settings = DaemonSettings::load(args.settings.as_deref())
        .context("Failed to load daemon settings")?;
    let settings = args.apply(settings);
    settings.validate().context("Invalid daemon settings")?;

    setup_logging(settings.logging()?)?;
    log_welcome("voipd", voipd_daemon_core::VERSION);

    let store = match &settings.config_file {
        Some(path) => MemoryConfigStore::load(path)
            .with_context(|| format!("Failed to load configuration store {}", path.display()))?,
        None => MemoryConfigStore::new(),
    };
    let store = Arc::new(store);
    let daemon = Arc::new(Daemon::new(store.clone()));

    let mut listener_error = None;
    match settings.listen {
        Some(addr) => {
            let listener = TcpListener::bind(addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;
            tokio::select! {
                result = serve_tcp(Arc::clone(&daemon), listener) => {
                    if let Err(e) = result {
                        error!("Listener failed: {}", e);
                        listener_error = Some(e);
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted, shutting down");
                }
            }
        }
        None => {
            tokio::select! {
                result = serve_stdio(&daemon) => {
                    match result {
                        Ok(SessionEnd::Quit) => info!("Quit requested"),
                        Ok(SessionEnd::Eof) => info!("Standard input closed"),
                        Err(e) => error!("Session failed: {}", e),
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted, shutting down");
                }
            }
        }
    }

    if settings.persist {
        if let Some(path) = &settings.config_file {
            store
                .save(path)
                .with_context(|| format!("Failed to save configuration store {}", path.display()))?;
        }
    }

    if let Some(e) = listener_error {
        return Err(e).context("TCP listener stopped");
    }

    info!("voipd stopped");
    Ok(())
}
