use std::net::SocketAddr;
use std::sync::Arc;

use recruitment_portal::{
    app,
    config::{get_config, init_config},
    session::{FileSessionStore, MemorySessionStore, SessionStore},
    AppState,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;
    init_config()?;
    let config = get_config()?;

    let sessions: Arc<dyn SessionStore> = match &config.session_dir {
        Some(dir) => {
            info!("Persisting sessions under {}", dir.display());
            Arc::new(FileSessionStore::open(dir)?)
        }
        None => {
            info!("Keeping sessions in memory");
            Arc::new(MemorySessionStore::new())
        }
    };

    let app_state = AppState::new(config, sessions)?;
    let app = app(app_state);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
