//! Handler for the authenticated profile resource.

use axum::extract::State;
use axum::Json;

use eco_db::models::{NewProfile, ProfileResponse};

use crate::error::AppResult;
use crate::handlers::auth::default_avatar_url;
use crate::middleware::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/profile
///
/// Return the authenticated profile. If the row has gone missing while the
/// token is still valid, a fresh profile is created from the token claims
/// with zero points and empty progress, so a valid session always resolves
/// to a profile.
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<ProfileResponse>>> {
    let profile = match state.store.fetch(user.profile_id()).await? {
        Some(profile) => profile,
        None => {
            tracing::warn!(
                profile_id = user.profile_id(),
                "Profile row missing for valid token; recreating"
            );
            state
                .store
                .create(&NewProfile {
                    email: user.claims.email.clone(),
                    display_name: user.claims.name.clone(),
                    avatar_url: default_avatar_url(&user.claims.email),
                    // No usable password until the account is re-registered.
                    password_hash: String::new(),
                })
                .await?
        }
    };

    Ok(Json(DataResponse::new(profile.into())))
}
