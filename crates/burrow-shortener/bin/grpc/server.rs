use crate::error::GrpcError;
use burrow_core::Shortener;
use burrow_proto_schema::v1 as proto;
use burrow_proto_schema::v1::url_shortener_server::UrlShortener;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::info;

pub const DELETE_OK: &str = "OK";

/// gRPC front of a [`Shortener`].
///
/// Rejects empty fields up front; everything else is delegated.
pub struct ShortenerGrpcServer<S: Shortener> {
    shortener: Arc<S>,
}

impl<S: Shortener> ShortenerGrpcServer<S> {
    pub fn new(shortener: Arc<S>) -> Self {
        Self { shortener }
    }
}

#[tonic::async_trait]
impl<S: Shortener> UrlShortener for ShortenerGrpcServer<S> {
    async fn save_url(
        &self,
        request: Request<proto::SaveUrlRequest>,
    ) -> Result<Response<proto::SaveUrlResponse>, Status> {
        let request = request.into_inner();
        if request.url.is_empty() {
            return Err(GrpcError::UrlRequired.into());
        }

        let alias = self
            .shortener
            .save_url(&request.url)
            .await
            .map_err(GrpcError::from)?;

        info!(alias = %alias, url = %request.url, "saved url");
        Ok(Response::new(proto::SaveUrlResponse {
            alias: alias.into(),
        }))
    }

    async fn get_url(
        &self,
        request: Request<proto::GetUrlRequest>,
    ) -> Result<Response<proto::GetUrlResponse>, Status> {
        let request = request.into_inner();
        if request.alias.is_empty() {
            return Err(GrpcError::AliasRequired.into());
        }

        let url = self
            .shortener
            .get_url(&request.alias)
            .await
            .map_err(GrpcError::from)?;

        Ok(Response::new(proto::GetUrlResponse { url }))
    }

    async fn delete_url(
        &self,
        request: Request<proto::DeleteUrlRequest>,
    ) -> Result<Response<proto::DeleteUrlResponse>, Status> {
        let request = request.into_inner();
        if request.alias.is_empty() {
            return Err(GrpcError::AliasRequired.into());
        }

        self.shortener
            .delete_url(&request.alias)
            .await
            .map_err(GrpcError::from)?;

        info!(alias = %request.alias, "deleted url");
        Ok(Response::new(proto::DeleteUrlResponse {
            status: DELETE_OK.to_string(),
        }))
    }
}
