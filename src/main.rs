use anyhow::Result;
use municipal_portal::application::{
    ports::{
        security::TokenVerifier, storage::BlobStore, time::Clock, util::SlugGenerator,
    },
    services::ApplicationServices,
};
use municipal_portal::config::AppConfig;
use municipal_portal::domain::{
    category::CategoryRepository, municipal::MunicipalServiceRepository, news::NewsRepository,
};
use municipal_portal::infrastructure::{
    database,
    repositories::{PostgresCategoryRepository, PostgresNewsRepository, PostgresServiceRepository},
    security::token::BiscuitTokenVerifier,
    storage::LocalBlobStore,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use municipal_portal::presentation::http::{routes::build_router, state::HttpState};
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

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("database migrations applied");

    let news_repo: Arc<dyn NewsRepository> = Arc::new(PostgresNewsRepository::new(pool.clone()));
    let service_repo: Arc<dyn MunicipalServiceRepository> =
        Arc::new(PostgresServiceRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool));

    let verifier = BiscuitTokenVerifier::new(config.biscuit_private_key(), config.token_ttl())?;
    tracing::info!(public_key = %verifier.public_key_hex(), "token verifier ready");
    let token_verifier: Arc<dyn TokenVerifier> = Arc::new(verifier);
    let blobs: Arc<dyn BlobStore> = Arc::new(LocalBlobStore::new(config.media_root().clone()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        news_repo,
        service_repo,
        category_repo,
        token_verifier,
        blobs,
        clock,
        slugger,
    ));

    let state = HttpState { services };

    let app = build_router(state, config.router_options());

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
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

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
            tracing::error!(error = %err, "failed to listen for CTRL+C");
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
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
