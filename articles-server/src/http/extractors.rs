//! Custom Axum extractors
//!
//! Both reject with an `InvalidInput` kind of `ApiError` so malformed
//! requests get the same text response as every other handler error.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Integer article identifier from the `id` query parameter
///
/// When `id` is repeated the first occurrence wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleId(pub i64);

impl<S> FromRequestParts<S> for ArticleId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs): Query<Vec<(String, String)>> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::InvalidInput(e.body_text()))?;

        let raw = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "id").then_some(value))
            .ok_or_else(|| ApiError::InvalidInput("missing query parameter id".into()))?;

        raw.parse::<i64>()
            .map(Self)
            .map_err(|e| ApiError::InvalidInput(format!("id {:?}: {}", raw, e)))
    }
}

/// JSON request body decoded from the raw bytes, whatever the content type
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(ApiError::UnreadableBody)?;

        serde_json::from_slice(&body)
            .map(Self)
            .map_err(|e| ApiError::InvalidInput(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode};

    use crate::http::ErrorKind;

    async fn article_id(uri: &str) -> Result<ArticleId, ApiError> {
        let (mut parts, _) = HttpRequest::builder().uri(uri).body(()).unwrap().into_parts();
        ArticleId::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn parses_id_parameter() {
        assert_eq!(article_id("/article?id=7").await.unwrap(), ArticleId(7));
        assert_eq!(article_id("/article?id=-3").await.unwrap(), ArticleId(-3));
    }

    #[tokio::test]
    async fn repeated_id_takes_the_first() {
        assert_eq!(article_id("/article?id=3&id=4").await.unwrap(), ArticleId(3));
        assert_eq!(article_id("/article?x=1&id=5&id=abc").await.unwrap(), ArticleId(5));
    }

    #[tokio::test]
    async fn rejects_missing_or_garbled_id() {
        for uri in ["/article", "/article?id=", "/article?id=abc", "/article?id=1.5", "/article?ids=1"] {
            let err = article_id(uri).await.unwrap_err();
            assert!(matches!(err, ApiError::InvalidInput(_)), "{uri}");
        }
    }

    #[tokio::test]
    async fn decodes_json_without_content_type() {
        let req = HttpRequest::builder().body(Body::from(r#"{"a":1}"#)).unwrap();
        let JsonBody(value): JsonBody<serde_json::Value> =
            JsonBody::from_request(req, &()).await.unwrap();
        assert_eq!(value["a"], 1);
    }

    #[tokio::test]
    async fn malformed_json_is_invalid_input() {
        let req = HttpRequest::builder().body(Body::from("{not json")).unwrap();
        let err = JsonBody::<serde_json::Value>::from_request(req, &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn oversized_body_keeps_payload_too_large() {
        let req = HttpRequest::builder()
            .body(Body::from(vec![b' '; 2 * 1024 * 1024 + 1]))
            .unwrap();
        let err = JsonBody::<serde_json::Value>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
