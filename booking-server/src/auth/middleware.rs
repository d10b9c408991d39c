//! Route-level role gate

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::extractor::CurrentUser;
use crate::utils::AppError;

/// Reject requests whose principal is not staff or admin.
///
/// Used on the transition and pricing-management routes; ownership checks
/// (a customer cancelling their own booking) live in the manager.
pub async fn require_staff(req: Request, next: Next) -> Response {
    match CurrentUser::from_headers(req.headers()) {
        Ok(user) if user.role.is_staff() => next.run(req).await,
        Ok(_) => AppError::Forbidden("staff role required".to_string()).into_response(),
        Err(e) => e.into_response(),
    }
}
