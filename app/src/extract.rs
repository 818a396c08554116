//! Request extractors

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use acadia_core::error::DomainError;

use crate::controllers::ApiError;

/// The acting tenant, taken from the `X-Tenant-Id` header
///
/// Session handling lives in front of this service; by the time a request
/// arrives here the gateway has already resolved the caller's tenant.
#[derive(Debug, Clone)]
pub struct TenantId(String);

impl TenantId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for TenantId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get("x-tenant-id")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| TenantId(v.to_string()))
            .ok_or_else(|| {
                ApiError::from(DomainError::validation(
                    "tenant_id",
                    "X-Tenant-Id header is required",
                ))
            })
    }
}
