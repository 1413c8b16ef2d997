use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::jwt::verify_token;
use crate::auth::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// Verifies the bearer token and attaches the caller's [`Identity`].
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

    // Expect "Bearer <token>"
    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::unauthorized("Invalid Authorization format"))?;

    let claims = verify_token(token, &state.jwt)?;
    let identity = Identity::from_claims(&claims)?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
