use crate::app_container::Application;
use crate::errors::ApiError;
use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{web, HttpRequest};
use anyhow::anyhow;
use url::form_urlencoded;

/// Proof that a request carried an accepted `api_key` query parameter.
#[derive(Debug)]
pub struct AuthorizedClient;

impl TryFrom<&HttpRequest> for AuthorizedClient {
    type Error = ApiError;

    fn try_from(req: &HttpRequest) -> Result<Self, Self::Error> {
        let app = req.app_data::<web::Data<Application>>().ok_or_else(|| {
            ApiError::InternalServerError(anyhow!("Application state is not registered"))
        })?;

        // When the key is repeated, the first occurrence is the one checked.
        let api_key = form_urlencoded::parse(req.query_string().as_bytes())
            .find(|(key, _)| key == "api_key")
            .map(|(_, value)| value.into_owned());

        app.credentials.verify(api_key.as_deref())?;
        Ok(AuthorizedClient)
    }
}

/// Rejects every request without a valid key before it reaches routing.
pub async fn require_api_key<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, actix_web::Error> {
    match AuthorizedClient::try_from(req.request()) {
        Ok(_) => next
            .call(req)
            .await
            .map(ServiceResponse::map_into_left_body),
        Err(err) => {
            tracing::info!(path = %req.path(), error = %err, "Rejected request");
            Ok(req.error_response(err).map_into_right_body())
        }
    }
}
