//! Page-level containers.

pub(crate) mod header;
pub(crate) mod layout;
pub(crate) mod page_content;
