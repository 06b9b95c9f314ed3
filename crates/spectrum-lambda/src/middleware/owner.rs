use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::error::ApiError;

pub const OWNER_HEADER: &str = "x-user-id";

/// The user a request acts for. `None` means anonymous.
///
/// Session handling lives in front of this service; it forwards the
/// authenticated user id in the `x-user-id` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Owner(pub Option<Uuid>);

/// Parse the owner header and insert [`Owner`] into request extensions.
///
/// A present but malformed header is rejected rather than treated as
/// anonymous.
pub async fn resolve_owner(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let owner = match req.headers().get(OWNER_HEADER) {
        None => None,
        Some(value) => {
            let raw = value
                .to_str()
                .map_err(|_| ApiError::BadRequest(format!("{OWNER_HEADER} is not valid text")))?;
            let id = raw.trim().parse::<Uuid>().map_err(|e| {
                ApiError::BadRequest(format!("{OWNER_HEADER} is not a valid UUID: {e}"))
            })?;
            Some(id)
        }
    };

    req.extensions_mut().insert(Owner(owner));

    Ok(next.run(req).await)
}
