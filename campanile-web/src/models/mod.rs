//! Client-side state stores shared across components.

pub(crate) mod inbox;
pub(crate) mod session;
pub(crate) mod toasts;
