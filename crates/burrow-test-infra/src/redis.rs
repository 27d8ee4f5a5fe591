use crate::{ipv4_host, Result};
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage};

const PORT: u16 = 6379;

/// A standalone Redis 8 instance.
pub struct RedisServer {
    container: ContainerAsync<GenericImage>,
}

impl RedisServer {
    pub async fn start() -> Result<Self> {
        let container = GenericImage::new("redis", "8.6.0")
            .with_exposed_port(PORT.tcp())
            .with_wait_for(WaitFor::message_on_stdout("Ready to accept connections"))
            .start()
            .await?;
        Ok(Self { container })
    }

    pub async fn redis_url(&self) -> Result<String> {
        let host = ipv4_host(&self.container).await?;
        let port = self.container.get_host_port_ipv4(PORT).await?;
        Ok(format!("redis://{host}:{port}"))
    }

    /// A separate connection for inspecting keys behind the repository's back.
    pub async fn connection(&self) -> Result<::redis::aio::MultiplexedConnection> {
        let client = ::redis::Client::open(self.redis_url().await?)?;
        Ok(client.get_multiplexed_async_connection().await?)
    }
}
