use burrow_core::{ErrorKind, ShortenerError};
use thiserror::Error;
use tonic::{Code, Status};
use tracing::{debug, error};

#[derive(Debug, Error)]
pub(crate) enum GrpcError {
    #[error("url is required")]
    UrlRequired,
    #[error("alias is required")]
    AliasRequired,
    #[error(transparent)]
    Shortener(#[from] ShortenerError),
}

impl From<GrpcError> for Status {
    fn from(error: GrpcError) -> Self {
        match error {
            GrpcError::UrlRequired => Status::new(Code::InvalidArgument, "url is required"),
            GrpcError::AliasRequired => Status::new(Code::InvalidArgument, "alias is required"),
            GrpcError::Shortener(source) => shortener_status(source),
        }
    }
}

/// Maps a service failure onto a status code.
///
/// Internal failures are logged with their full chain and reach the caller
/// as an opaque message.
fn shortener_status(source: ShortenerError) -> Status {
    match source.kind() {
        ErrorKind::InvalidInput => {
            debug!(error = %source, "rejected request");
            Status::new(Code::InvalidArgument, source.to_string())
        }
        ErrorKind::NotFound => Status::new(Code::NotFound, "url not found"),
        ErrorKind::Unavailable => {
            Status::new(Code::Unavailable, "server is shutting down")
        }
        ErrorKind::Conflict | ErrorKind::Internal => {
            error!(error = %source, "request failed");
            Status::new(Code::Internal, "internal server error")
        }
    }
}
