//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};

use crate::state::State;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    /// Shared application state injected at the router root.
    fn state_or_500(&self) -> Result<Arc<State>, StatusError>;
}

impl DepotExt for Depot {
    fn state_or_500(&self) -> Result<Arc<State>, StatusError> {
        self.obtain::<Arc<State>>()
            .cloned()
            .map_err(|_ignored| StatusError::internal_server_error())
    }
}
