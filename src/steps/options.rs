//! Options shared by workflow steps

/// Switches a step reads from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOptions {
    /// Run tests at all
    pub test: bool,
    /// Running unattended (bots, queues): no prompts, CI-friendly runner flags
    pub non_interactive: bool,
    /// Ask sub-tools for less output
    pub quiet: bool,
}

impl Default for StepOptions {
    fn default() -> Self {
        Self {
            test: true,
            non_interactive: false,
            quiet: false,
        }
    }
}

impl StepOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    pub fn with_non_interactive(mut self, non_interactive: bool) -> Self {
        self.non_interactive = non_interactive;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = StepOptions::default();
        assert!(options.test);
        assert!(!options.non_interactive);
        assert!(!options.quiet);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(StepOptions::new(), StepOptions::default());
    }

    #[test]
    fn test_builder_chain() {
        let options = StepOptions::new()
            .with_test(false)
            .with_non_interactive(true)
            .with_quiet(true);
        assert_eq!(
            options,
            StepOptions {
                test: false,
                non_interactive: true,
                quiet: true
            }
        );
    }

    #[test]
    fn test_builder_override() {
        let options = StepOptions::new().with_quiet(true).with_quiet(false);
        assert!(!options.quiet); // Last value wins
    }
}
