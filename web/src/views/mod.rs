//! Server-rendered UI components.

pub mod catch_boundary;
pub mod document;
pub mod head;
pub mod icons;
pub mod layout;
pub mod not_found;
pub mod sidebar;

pub use catch_boundary::default_catch_boundary;
pub use document::{error_document, root_document};
pub use head::{HeadContent, LinkTag, head_content};
pub use layout::{AppLayoutProps, app_layout};
pub use not_found::not_found;
pub use sidebar::app_sidebar;
