#![forbid(unsafe_code)]
//! webkit-patch workflow tooling
//!
//! A checkout-aware CLI whose commands are sequences of workflow [`steps`]. Steps talk to the outside world only
//! through the collaborators bundled in a [`Tool`]: an [`Executive`](webkit_system::Executive) for processes, a
//! [`Port`](port::Port) for platform-specific commands, and a [`StepLog`](tool::StepLog) for user-facing lines.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests and in the [`mocktool`] doubles.

pub mod cli;
pub mod mocktool;
pub mod port;
pub mod steps;
pub mod tool;
pub mod version;

pub use port::{Port, PortName, WebKitPort};
pub use steps::{RunTests, Step, StepError, StepOptions, StepState};
pub use tool::Tool;
