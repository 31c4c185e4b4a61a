//! Preprocessor configuration.

/// External tool probed for help output when no override is given.
pub const DEFAULT_COMMAND: &str = "basm";

/// Selects the external tool whose flag tables are generated.
///
/// The command string is split on whitespace into an argv prefix, so a
/// multi-word launcher such as `cargo run --quiet --` works as well as a
/// plain binary name. Built once at startup and passed explicitly to
/// everything that needs it.
#[derive(Debug, Clone)]
pub struct FlagTableConfig {
    /// Command line prefix for the probed tool (e.g. `basm`).
    pub command: String,
}

impl Default for FlagTableConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
        }
    }
}

impl FlagTableConfig {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The command split into program + leading arguments.
    ///
    /// Empty or all-whitespace commands yield an empty vector; the probe
    /// reports that as a spawn failure.
    pub fn argv_prefix(&self) -> Vec<&str> {
        self.command.split_whitespace().collect()
    }
}
