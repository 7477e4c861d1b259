//! Dashboard Login Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use souk_app::auth::AuthServiceError;

use crate::{
    auth::cookies::session_cookie,
    extensions::*,
    responses::{SuccessResponse, render_error},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub password: String,
}

/// How to log in, served to browsers the gate redirects here.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginHintResponse {
    pub method: String,
    pub fields: Vec<String>,
}

/// Login Hint Handler
#[endpoint(tags("dashboard"), summary = "Login Form")]
pub(crate) async fn hint() -> Json<LoginHintResponse> {
    Json(LoginHintResponse {
        method: "POST".to_owned(),
        fields: vec!["password".to_owned()],
    })
}

/// Dashboard Login Handler
///
/// Exchanges the admin password for a session cookie.
#[endpoint(
    tags("dashboard"),
    summary = "Log In",
    responses(
        (status_code = StatusCode::OK, description = "Session cookie set"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid password"),
    ),
)]
pub(crate) async fn handler(json: JsonBody<LoginRequest>, depot: &mut Depot, res: &mut Response) {
    let state = match depot.state_or_500() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);

            return;
        }
    };

    match state.app.auth.login(&json.into_inner().password).await {
        Ok(issued) => {
            info!(session = %issued.session.uuid, "dashboard login");

            res.add_cookie(session_cookie(issued.token, state.cookie_secure));
            res.render(SuccessResponse::ok());
        }
        Err(AuthServiceError::InvalidPassword) => {
            render_error(res, StatusCode::UNAUTHORIZED, "Invalid password");
        }
        Err(source) => {
            error!("failed to open dashboard session: {source}");

            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Login failed");
        }
    }
}
