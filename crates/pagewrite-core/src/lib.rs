//! Landing page writer.
//!
//! Replaces the ChatSQL landing page component on disk with the TSX source
//! embedded in this crate.

pub mod overwriter;
pub mod target;

pub use overwriter::{FileOverwriter, WriteError, WriteResult};
pub use target::{Target, DESTINATION, PAYLOAD};
