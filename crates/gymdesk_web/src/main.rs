//! Gym desk server entry point.
//!
//! # Responsibility
//! - Resolve launch configuration and start file logging.
//! - Prepare the database (schema and sample data) before serving.
//! - Serve the desk UI until Ctrl+C or SIGTERM.

use anyhow::Context;
use gymdesk_core::{init_logging, open_db, seed_sample_data, GymDesk};
use gymdesk_web::{build_router, AppState, WebConfig};
use log::{info, warn};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let config = WebConfig::from_env(&cwd).context("invalid launch configuration")?;

    init_logging(&config.log_level, &config.log_dir.to_string_lossy())
        .map_err(anyhow::Error::msg)
        .context("failed to start logging")?;

    prepare_database(&config)?;

    let desk = GymDesk::new(config.db_path.clone());
    let app = build_router(AppState::new(desk));

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(
        "event=server_start module=web status=ok bind={} db_path={}",
        config.bind,
        config.db_path.display()
    );
    println!("Gym desk running at http://{}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("event=server_stop module=web status=ok");
    Ok(())
}

fn prepare_database(config: &WebConfig) -> anyhow::Result<()> {
    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open `{}`", config.db_path.display()))?;
    seed_sample_data(&conn).context("failed to load sample data")?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("event=shutdown_signal module=web status=error signal=ctrl_c error={err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!("event=shutdown_signal module=web status=error signal=terminate error={err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("event=shutdown_signal module=web status=ok signal=ctrl_c"),
        _ = terminate => info!("event=shutdown_signal module=web status=ok signal=terminate"),
    }
}
