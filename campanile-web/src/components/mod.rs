//! Reusable UI components.

pub(crate) mod header_nav_item;
pub(crate) mod loading;
pub(crate) mod notification_bell;
pub(crate) mod theme_switcher;
pub(crate) mod toast_host;
pub(crate) mod user_dropdown;
