//! Rendering of approval statuses with caller-supplied message strings.

mod messages;
mod panel;

pub use messages::{MessageCatalogError, StatusMessages};
pub use panel::{StatusPanel, StatusTone};
