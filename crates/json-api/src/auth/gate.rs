//! Dashboard gate middleware.

use salvo::prelude::*;
use tracing::{debug, error};

use souk_app::auth::AuthServiceError;

use crate::{
    auth::{LOGIN_PATH, SESSION_COOKIE},
    extensions::*,
};

/// Let requests with a live session through; send everyone else to the login page.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = req.cookie(SESSION_COOKIE).map(|cookie| cookie.value().to_owned()) else {
        debug!("no session cookie, redirecting to login");

        redirect_to_login(res, ctrl);

        return;
    };

    let state = match depot.state_or_500() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    match state.app.auth.authenticate_session(&token).await {
        Ok(session) => {
            debug!(session = %session.uuid, "dashboard session accepted");
        }
        Err(AuthServiceError::NotFound | AuthServiceError::InvalidPassword) => {
            debug!("unknown or expired session, redirecting to login");

            redirect_to_login(res, ctrl);

            return;
        }
        Err(AuthServiceError::Sql(source)) => {
            error!("failed to validate session: {source}");

            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
        Err(AuthServiceError::Token(source)) => {
            error!("failed to process session token: {source}");

            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    }

    ctrl.call_next(req, depot, res).await;
}

fn redirect_to_login(res: &mut Response, ctrl: &mut FlowCtrl) {
    res.render(Redirect::found(LOGIN_PATH));
    ctrl.skip_rest();
}
