//! Dashboard Logout Handler

use salvo::prelude::*;
use tracing::{debug, error};

use souk_app::auth::AuthServiceError;

use crate::{
    auth::{SESSION_COOKIE, cookies::expired_session_cookie},
    extensions::*,
    responses::SuccessResponse,
};

/// Dashboard Logout Handler
///
/// Revokes the current session and expires its cookie.
#[endpoint(
    tags("dashboard"),
    summary = "Log Out",
    security(("admin_cookie" = []))
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SuccessResponse>, StatusError> {
    let state = depot.state_or_500()?;

    if let Some(token) = req.cookie(SESSION_COOKIE).map(|cookie| cookie.value().to_owned()) {
        match state.app.auth.logout(&token).await {
            Ok(()) => {}
            Err(AuthServiceError::NotFound) => debug!("session already revoked or expired"),
            Err(source) => {
                error!("failed to revoke session: {source}");

                return Err(StatusError::internal_server_error());
            }
        }
    }

    res.add_cookie(expired_session_cookie(state.cookie_secure));

    Ok(SuccessResponse::ok())
}
