//! Provide the process-invocation vocabulary shared by webkit-patch workflow steps.
//!
//! Steps never spawn processes themselves. They go through an [`Executive`], which the tool wires up as a
//! [`ProcessExecutive`] in production and replaces with an in-memory double under test.
//!
//! ## Notes
//!
//! - The host platform is a plain value ([`HostPlatform`]) handed to whoever needs it; nothing in this crate
//!   inspects the environment except [`HostPlatform::current`].

pub mod errors;
pub mod executive;
pub mod platform;

pub use errors::ScriptError;
pub use executive::{Executive, ProcessExecutive, format_command};
pub use platform::HostPlatform;
