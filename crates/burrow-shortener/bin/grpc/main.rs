mod cli;
mod error;
mod server;

use crate::cli::{LogFormatArg, StorageBackendArg, CLI};
use crate::server::ShortenerGrpcServer;
use anyhow::Context;
use burrow_generator::RandomGenerator;
use burrow_proto_schema::v1::url_shortener_server::UrlShortenerServer;
use burrow_shortener::{ShortenerConfig, ShortenerService};
use burrow_storage::{
    InMemoryRepository, PostgresRepository, RedisRepository, Repository, StorageError,
};
use clap::Parser;
use std::sync::Arc;
use tokio::signal;
use tonic::transport::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

type GrpcService<R> = UrlShortenerServer<ShortenerGrpcServer<ShortenerService<R, RandomGenerator>>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = CLI::parse();
    init_tracing(config.log_format);

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        alias_length = config.alias_length,
        max_attempts = config.max_attempts,
        "starting shortener gRPC server"
    );

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(&config, InMemoryRepository::new()).await?;
        }
        StorageBackendArg::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("redis url is required when storage backend is redis")?;
            let repository = RedisRepository::connect(redis_url, &config.redis_key_prefix)
                .await
                .context("failed to connect to redis")?;
            run_server(&config, repository).await?;
        }
        StorageBackendArg::Postgres => {
            let postgres_dsn = config
                .postgres_dsn
                .as_deref()
                .context("postgres dsn is required when storage backend is postgres")?;
            let repository =
                PostgresRepository::connect(postgres_dsn, config.postgres_max_connections)
                    .await
                    .context("failed to connect to postgres")?;
            repository
                .ensure_schema()
                .await
                .context("failed to create schema")?;
            run_server(&config, repository).await?;
        }
    }

    Ok(())
}

fn init_tracing(format: LogFormatArg) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormatArg::Text => subscriber.init(),
        LogFormatArg::Json => subscriber.json().init(),
    }
}

async fn run_server<R: Repository>(config: &CLI, repository: R) -> anyhow::Result<()> {
    let shortener_config = ShortenerConfig::builder()
        .alias_length(config.alias_length as usize)
        .max_attempts(config.max_attempts as usize)
        .storage_timeout(config.storage_timeout())
        .build();

    let service = Arc::new(ShortenerService::with_config(
        repository,
        RandomGenerator::new(),
        shortener_config,
    ));

    let (health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter.set_serving::<GrpcService<R>>().await;

    let shutdown = {
        let service = Arc::clone(&service);
        let health_reporter = health_reporter.clone();
        async move {
            shutdown_signal().await;
            service.begin_shutdown();
            health_reporter.set_not_serving::<GrpcService<R>>().await;
        }
    };

    let served = Server::builder()
        .timeout(config.request_timeout())
        .add_service(health_service)
        .add_service(UrlShortenerServer::new(ShortenerGrpcServer::new(
            Arc::clone(&service),
        )))
        .serve_with_shutdown(config.listen_addr, shutdown)
        .await;

    info!("server stopped, closing storage");
    let closed = service.repository().close().await;

    finish(served, closed)
}

/// Combines the serve and close outcomes; a serve failure takes precedence.
fn finish<E>(
    served: Result<(), E>,
    closed: Result<(), StorageError>,
) -> anyhow::Result<()>
where
    E: std::error::Error + Send + Sync + 'static,
{
    match (served, closed) {
        (Err(serve_err), Err(close_err)) => {
            error!(error = %close_err, "failed to close storage");
            Err(anyhow::Error::new(serve_err).context("gRPC server failed"))
        }
        (Err(serve_err), Ok(())) => Err(anyhow::Error::new(serve_err).context("gRPC server failed")),
        (Ok(()), closed) => closed.context("failed to close storage"),
    }
}

/// Waits for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received SIGINT, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
