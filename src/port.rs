//! Platform ports and checkout layout
//!
//! A [`Port`] knows which test scripts exist for a given WebKit port and how to invoke them. Commands are
//! returned as owned token lists so steps can extend them with flags.
//!
//! ## Checkout discovery
//!
//! [`find_checkout_root`] looks for the `Tools/Scripts` directory, first upwards from a starting directory and
//! then in `WEBKIT_CHECKOUT`.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use webkit_system::HostPlatform;

/// Environment variable consulted when the checkout cannot be found from the working directory.
pub const CHECKOUT_ENV_VAR: &str = "WEBKIT_CHECKOUT";

/// Location of the scripts directory relative to the checkout root.
const SCRIPTS_DIR: &str = "Tools/Scripts";

// ============================================================================
// Port trait
// ============================================================================

/// Capability supplying the test commands for one platform port.
///
/// Commands that a port does not support return `None` and are skipped by callers.
pub trait Port {
    fn name(&self) -> &str;

    fn run_python_unittests_command(&self) -> Option<Vec<String>> {
        None
    }

    fn run_perl_unittests_command(&self) -> Option<Vec<String>> {
        None
    }

    fn run_javascriptcore_tests_command(&self) -> Option<Vec<String>> {
        None
    }

    fn run_bindings_tests_command(&self) -> Option<Vec<String>>;

    fn run_webkit_unit_tests_command(&self) -> Option<Vec<String>>;

    /// The layout test runner, without any workflow flags.
    fn run_webkit_tests_command(&self) -> Vec<String>;
}

// ============================================================================
// Port names
// ============================================================================

/// Known WebKit ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortName {
    Mac,
    Gtk,
    Efl,
    Qt,
    Win,
}

impl PortName {
    pub fn as_str(self) -> &'static str {
        match self {
            PortName::Mac => "mac",
            PortName::Gtk => "gtk",
            PortName::Efl => "efl",
            PortName::Qt => "qt",
            PortName::Win => "win",
        }
    }

    /// Flag the shared scripts need to select this port (`--gtk`, ...). Mac and Win are the scripts' defaults.
    pub fn script_flag(self) -> Option<&'static str> {
        match self {
            PortName::Gtk => Some("--gtk"),
            PortName::Efl => Some("--efl"),
            PortName::Qt => Some("--qt"),
            PortName::Mac | PortName::Win => None,
        }
    }

    /// Port used when none is requested explicitly.
    pub fn default_for(platform: &HostPlatform) -> Self {
        match platform.as_str() {
            "macos" => PortName::Mac,
            "windows" | HostPlatform::CYGWIN => PortName::Win,
            _ => PortName::Gtk,
        }
    }
}

impl fmt::Display for PortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mac" => Ok(PortName::Mac),
            "gtk" => Ok(PortName::Gtk),
            "efl" => Ok(PortName::Efl),
            "qt" => Ok(PortName::Qt),
            "win" => Ok(PortName::Win),
            other => Err(format!("unknown port '{}' (expected one of: mac, gtk, efl, qt, win)", other)),
        }
    }
}

// ============================================================================
// WebKitPort
// ============================================================================

/// Port backed by the scripts of a real checkout.
#[derive(Debug, Clone)]
pub struct WebKitPort {
    name: PortName,
    scripts_dir: PathBuf,
}

impl WebKitPort {
    pub fn new(name: PortName, checkout_root: &Path) -> Self {
        Self {
            name,
            scripts_dir: checkout_root.join(SCRIPTS_DIR),
        }
    }

    pub fn port_name(&self) -> PortName {
        self.name
    }

    fn path_to_script(&self, script: &str) -> String {
        self.scripts_dir.join(script).to_string_lossy().into_owned()
    }

    fn script_command(&self, script: &str) -> Vec<String> {
        vec![self.path_to_script(script)]
    }

    fn script_command_with_port_flag(&self, script: &str) -> Vec<String> {
        let mut command = self.script_command(script);
        if let Some(flag) = self.name.script_flag() {
            command.push(flag.to_string());
        }
        command
    }
}

impl Port for WebKitPort {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn run_python_unittests_command(&self) -> Option<Vec<String>> {
        Some(self.script_command("test-webkitpy"))
    }

    fn run_perl_unittests_command(&self) -> Option<Vec<String>> {
        Some(self.script_command("test-webkitperl"))
    }

    fn run_javascriptcore_tests_command(&self) -> Option<Vec<String>> {
        Some(self.script_command_with_port_flag("run-javascriptcore-tests"))
    }

    fn run_bindings_tests_command(&self) -> Option<Vec<String>> {
        Some(self.script_command("run-bindings-tests"))
    }

    fn run_webkit_unit_tests_command(&self) -> Option<Vec<String>> {
        Some(self.script_command_with_port_flag("run-api-tests"))
    }

    fn run_webkit_tests_command(&self) -> Vec<String> {
        self.script_command_with_port_flag("run-webkit-tests")
    }
}

// ============================================================================
// Checkout discovery
// ============================================================================

/// Find the checkout containing `start`, falling back to `WEBKIT_CHECKOUT`.
pub fn find_checkout_root(start: &Path) -> Option<PathBuf> {
    let from_env = env::var(CHECKOUT_ENV_VAR).ok();
    find_checkout_root_from(start, from_env.as_deref())
}

/// Checkout discovery with the environment fallback passed in explicitly.
pub fn find_checkout_root_from(start: &Path, env_checkout: Option<&str>) -> Option<PathBuf> {
    if let Some(root) = start.ancestors().find(|dir| is_checkout_root(dir)) {
        return Some(root.to_path_buf());
    }

    let candidate = PathBuf::from(env_checkout?);
    if is_checkout_root(&candidate) {
        return Some(candidate);
    }

    tracing::debug!(path = %candidate.display(), "{} does not point at a checkout", CHECKOUT_ENV_VAR);
    None
}

fn is_checkout_root(dir: &Path) -> bool {
    dir.join(SCRIPTS_DIR).is_dir()
}
