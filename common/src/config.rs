/// Runtime options for the command line front-end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Only report warnings, errors and the final verdict.
    pub quiet: bool,
    /// Log every parsed range entry.
    ///
    /// Ignored when `quiet` is set.
    pub verbose: bool,
}

impl Config {
    /// Default `tracing` filter directive for these options.
    pub fn log_filter(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "warn",
            (false, true) => "debug",
            (false, false) => "info",
        }
    }
}
