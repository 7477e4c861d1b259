//! State

use std::sync::Arc;

use souk_app::context::AppContext;

/// Shared handler state.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Whether the session cookie carries the `Secure` attribute.
    pub(crate) cookie_secure: bool,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, cookie_secure: bool) -> Arc<Self> {
        Arc::new(Self { app, cookie_secure })
    }
}
