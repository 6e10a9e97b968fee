use crate::error::Error;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub(crate) struct APIError(anyhow::Error);

impl APIError {
    fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<Error>() {
            Some(Error::WordNotFound(_)) => StatusCode::NOT_FOUND,
            Some(Error::EmptyBody | Error::InvalidUtf8(_)) => StatusCode::BAD_REQUEST,
            Some(_) => StatusCode::INTERNAL_SERVER_ERROR,
            None => match self.0.downcast_ref::<PathRejection>() {
                // An undecodable path segment mirrors an unmatched route.
                Some(PathRejection::FailedToDeserializePathParams(_)) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for APIError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {:#}", self.0);
        } else {
            tracing::debug!("rejected request: {}", self.0);
        }
        let body = status.canonical_reason().unwrap_or_default();
        (status, body).into_response()
    }
}

impl<E> From<E> for APIError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::APIError;
    use crate::error::Error;
    use axum::extract::rejection::PathRejection;
    use axum::extract::{FromRequestParts, Path};
    use axum::http::{Request, StatusCode};

    #[test]
    fn status_mapping() {
        assert_eq!(
            APIError::from(Error::WordNotFound("3".to_string())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            APIError::from(Error::EmptyBody).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            APIError::from(Error::EmptySeed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            APIError::from(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn missing_path_params_is_a_server_error() {
        let (mut parts, ()) = Request::new(()).into_parts();
        let rejection = Path::<String>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert!(matches!(rejection, PathRejection::MissingPathParams(_)));
        assert_eq!(
            APIError::from(rejection).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
