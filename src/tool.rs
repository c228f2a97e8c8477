//! Collaborators shared by all workflow steps.

use std::path::{Path, PathBuf};

use webkit_system::{Executive, HostPlatform};

use crate::port::Port;

/// Line-oriented sink for user-facing step output.
pub trait StepLog {
    /// Append one line. `line` carries no trailing newline.
    fn log(&self, line: &str);
}

/// Writes step lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLog;

impl StepLog for ConsoleLog {
    fn log(&self, line: &str) {
        tracing::debug!(target: "webkit_patch::steps", "{}", line);
        eprintln!("{}", line);
    }
}

/// Everything a step may touch: processes, port commands, the checkout, the host platform and the log.
pub struct Tool {
    executive: Box<dyn Executive>,
    port: Box<dyn Port>,
    checkout_root: PathBuf,
    platform: HostPlatform,
    log: Box<dyn StepLog>,
}

impl Tool {
    pub fn new(
        executive: Box<dyn Executive>,
        port: Box<dyn Port>,
        checkout_root: impl Into<PathBuf>,
        platform: HostPlatform,
        log: Box<dyn StepLog>,
    ) -> Self {
        Self {
            executive,
            port,
            checkout_root: checkout_root.into(),
            platform,
            log,
        }
    }

    pub fn executive(&self) -> &dyn Executive {
        self.executive.as_ref()
    }

    pub fn port(&self) -> &dyn Port {
        self.port.as_ref()
    }

    pub fn checkout_root(&self) -> &Path {
        &self.checkout_root
    }

    pub fn platform(&self) -> &HostPlatform {
        &self.platform
    }

    pub fn log(&self, line: &str) {
        self.log.log(line);
    }
}
