use crate::models::{AuthUser, LoginRequest, RegisterRequest};
use crate::services::api::{self, Credentials};
use crate::services::error::ApiError;

pub async fn login(credentials: &LoginRequest) -> Result<AuthUser, ApiError> {
    let user: AuthUser = api::post_json("/users/login", credentials, Credentials::Public).await?;
    log::info!("✅ Logged in as {}", user.email);
    Ok(user)
}

pub async fn register(details: &RegisterRequest) -> Result<AuthUser, ApiError> {
    let user: AuthUser = api::post_json("/users/register", details, Credentials::Public).await?;
    log::info!("✅ Registered {}", user.email);
    Ok(user)
}

/// Best-effort server-side logout. The caller clears the local session
/// regardless of the outcome here.
pub async fn logout(token: Option<&str>) -> Result<(), ApiError> {
    api::get_ok("/users/logout", Credentials::Bearer(token)).await
}
