//! Dashboard

pub(crate) mod overview;
