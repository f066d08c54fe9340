//! The destination and payload of a write.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Where the landing page component lives in the ChatSQL UI checkout.
pub const DESTINATION: &str =
    "/Users/bizer/Development/Projects/ChatSQL/ChatSQL-ui/src/pages/ChatSQLLanding.tsx";

/// Landing page component source, written verbatim.
pub const PAYLOAD: &str = include_str!("../templates/ChatSQLLanding.tsx");

/// A destination path paired with the text that replaces its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    destination: PathBuf,
    payload: Cow<'static, str>,
}

impl Target {
    /// Create a target for an arbitrary destination and payload.
    pub fn new(destination: impl Into<PathBuf>, payload: impl Into<Cow<'static, str>>) -> Self {
        Self {
            destination: destination.into(),
            payload: payload.into(),
        }
    }

    /// The fixed landing page target.
    pub fn landing_page() -> Self {
        Self::new(DESTINATION, PAYLOAD)
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}
