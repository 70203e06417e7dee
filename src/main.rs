use anyhow::Result;
use pageview_stats::application::{
    ports::{pageviews::PageviewsSource, time::Clock},
    services::ApplicationServices,
};
use pageview_stats::config::AppConfig;
use pageview_stats::infrastructure::{
    time::SystemClock,
    wikimedia::{HttpFetcher, ReqwestFetcher, WikimediaClient},
};
use pageview_stats::presentation::http::{routes::build_router_with_origins, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let fetcher: Arc<dyn HttpFetcher> = Arc::new(ReqwestFetcher::new(
        config.upstream_user_agent(),
        config.upstream_timeout(),
    )?);
    let source: Arc<dyn PageviewsSource> = Arc::new(WikimediaClient::new(
        fetcher,
        config.upstream_base_url(),
        config.wiki_project(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    tracing::info!(
        upstream = config.upstream_base_url(),
        project = config.wiki_project(),
        "pageviews upstream configured"
    );

    let services = Arc::new(ApplicationServices::new(source, clock));
    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router_with_origins(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,reqwest=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
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
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
