//! Service test support.

mod db;
pub mod helpers;

pub use context::TestContext;
