//! Disposable containers for backend integration tests.
//!
//! Each server lives as long as its handle; dropping it stops the container.

pub mod postgres;
pub mod redis;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestInfraError {
    #[error("container failed to start or report its ports: {0}")]
    Container(#[from] testcontainers::TestcontainersError),

    #[error("could not open a redis connection: {0}")]
    RedisConnect(#[from] ::redis::RedisError),
}

pub type Result<T, E = TestInfraError> = std::result::Result<T, E>;

/// Docker may report `localhost`, which can resolve to `::1` while the port
/// is only published on IPv4.
async fn ipv4_host<I: testcontainers::Image>(
    container: &testcontainers::ContainerAsync<I>,
) -> Result<String> {
    let host = container.get_host().await?.to_string();
    Ok(if host == "localhost" {
        "127.0.0.1".to_string()
    } else {
        host
    })
}
