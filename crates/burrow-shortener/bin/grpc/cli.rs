use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::time::Duration;

pub const LISTEN_ADDR_ENV: &str = "BURROW_SHORTENER_GRPC_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "BURROW_SHORTENER_STORAGE_BACKEND";
pub const REDIS_URL_ENV: &str = "BURROW_SHORTENER_REDIS_URL";
pub const REDIS_KEY_PREFIX_ENV: &str = "BURROW_SHORTENER_REDIS_KEY_PREFIX";
pub const POSTGRES_DSN_ENV: &str = "BURROW_SHORTENER_POSTGRES_DSN";
pub const POSTGRES_MAX_CONNECTIONS_ENV: &str = "BURROW_SHORTENER_POSTGRES_MAX_CONNECTIONS";
pub const ALIAS_LENGTH_ENV: &str = "BURROW_SHORTENER_ALIAS_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "BURROW_SHORTENER_MAX_ATTEMPTS";
pub const STORAGE_TIMEOUT_ENV: &str = "BURROW_SHORTENER_STORAGE_TIMEOUT_SECS";
pub const REQUEST_TIMEOUT_ENV: &str = "BURROW_SHORTENER_REQUEST_TIMEOUT_SECS";
pub const LOG_FORMAT_ENV: &str = "BURROW_SHORTENER_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:50051";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "redis")]
    Redis,
    #[value(name = "postgres")]
    Postgres,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Redis => write!(f, "redis"),
            StorageBackendArg::Postgres => write!(f, "postgres"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "burrow-shortener-grpc-server")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = REDIS_URL_ENV, required_if_eq("storage", "redis"))]
    pub redis_url: Option<String>,

    #[arg(
        long,
        env = REDIS_KEY_PREFIX_ENV,
        default_value = burrow_storage::redis::DEFAULT_KEY_PREFIX
    )]
    pub redis_key_prefix: String,

    #[arg(long, env = POSTGRES_DSN_ENV, required_if_eq("storage", "postgres"))]
    pub postgres_dsn: Option<String>,

    #[arg(
        long,
        env = POSTGRES_MAX_CONNECTIONS_ENV,
        default_value_t = 16,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub postgres_max_connections: u32,

    #[arg(
        long,
        env = ALIAS_LENGTH_ENV,
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..=64)
    )]
    pub alias_length: u64,

    #[arg(
        long,
        env = MAX_ATTEMPTS_ENV,
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_attempts: u64,

    #[arg(
        long,
        env = STORAGE_TIMEOUT_ENV,
        default_value_t = 4,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub storage_timeout_secs: u64,

    #[arg(
        long,
        env = REQUEST_TIMEOUT_ENV,
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub request_timeout_secs: u64,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,
}

impl CLI {
    pub fn storage_timeout(&self) -> Duration {
        Duration::from_secs(self.storage_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
