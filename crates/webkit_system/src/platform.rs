//! Host platform identifier.

use std::fmt;

/// Identifier of the platform the tool runs on (`"linux"`, `"macos"`, `"cygwin"`, ...).
///
/// Steps receive this as a value instead of querying the environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostPlatform(String);

impl HostPlatform {
    pub const CYGWIN: &'static str = "cygwin";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Platform the binary was compiled for.
    pub fn current() -> Self {
        Self::new(std::env::consts::OS)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact match on `"cygwin"`; no prefix or case folding.
    pub fn is_cygwin(&self) -> bool {
        self.0 == Self::CYGWIN
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HostPlatform {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
