//! State Management
//!
//! Toast notifications and the signed-in session, both provided as context.

pub mod auth;
pub mod global;
pub mod storage;

pub use auth::provide_auth;
pub use global::provide_global_state;
