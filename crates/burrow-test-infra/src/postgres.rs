use crate::{ipv4_host, Result};
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage, ImageExt};

const PORT: u16 = 5432;
/// Database name, user and password of the throwaway instance.
const CREDENTIAL: &str = "burrow";

/// A PostgreSQL 17 instance with an empty `burrow` database.
pub struct PostgresServer {
    container: ContainerAsync<GenericImage>,
}

impl PostgresServer {
    /// Starts the container. The entrypoint restarts the server once after
    /// initdb, so callers should retry their first connection.
    pub async fn start() -> Result<Self> {
        let container = GenericImage::new("postgres", "17")
            .with_exposed_port(PORT.tcp())
            .with_wait_for(WaitFor::message_on_stderr(
                "database system is ready to accept connections",
            ))
            .with_env_var("POSTGRES_DB", CREDENTIAL)
            .with_env_var("POSTGRES_USER", CREDENTIAL)
            .with_env_var("POSTGRES_PASSWORD", CREDENTIAL)
            .start()
            .await?;

        Ok(Self { container })
    }

    pub async fn database_url(&self) -> Result<String> {
        let host = ipv4_host(&self.container).await?;
        let port = self.container.get_host_port_ipv4(PORT).await?;
        Ok(format!(
            "postgres://{CREDENTIAL}:{CREDENTIAL}@{host}:{port}/{CREDENTIAL}"
        ))
    }
}
