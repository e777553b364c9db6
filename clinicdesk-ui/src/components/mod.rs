//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod guard;
pub mod loading;
pub mod modal;
pub mod nav;
pub mod pagination;
pub mod sidebar;
pub mod status_badge;
pub mod toast;

pub use guard::Guarded;
pub use loading::{InlineLoading, ListSkeleton, Loading};
pub use modal::Modal;
pub use nav::Nav;
pub use pagination::Pagination;
pub use status_badge::StatusBadge;
pub use toast::Toast;
