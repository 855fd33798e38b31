//! Render-facing types for UI collaborators.
//!
//! Pure data types with no IO and no widget-toolkit dependency. A renderer
//! asks a lifecycle value for its [`ViewDisposition`] and draws that; it
//! never constructs or transitions lifecycle state itself.

mod view;

pub use view::{Indicator, ViewDisposition};
