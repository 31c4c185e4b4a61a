//! Subprocess boundary for help probing.
//!
//! One blocking invocation per subcommand, no timeout; a hung tool hangs
//! the whole run.

use std::io::ErrorKind;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::FlagTableConfig;
use crate::error::{PreprocessorError, Result};

/// Runs the configured tool with `[subcommand, "-h"]` and captures stdout.
///
/// Stdin is closed and stderr is discarded; the help convention puts the
/// flag listing on stdout. Output is decoded lossily, matching how the
/// captured text is consumed (a trusted companion tool, not arbitrary
/// input). Spawn failure and a non-zero exit are both fatal.
pub fn capture_help(config: &FlagTableConfig, subcommand: &str) -> Result<String> {
    let argv = config.argv_prefix();
    let Some((program, leading_args)) = argv.split_first() else {
        return Err(PreprocessorError::Spawn {
            command: config.command.clone(),
            source: ErrorKind::NotFound.into(),
        });
    };

    debug!(command = %config.command, subcommand, "probing help output");
    let output = Command::new(program)
        .args(leading_args)
        .args([subcommand, "-h"])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
        .map_err(|source| PreprocessorError::Spawn {
            command: config.command.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(PreprocessorError::HelpFailed {
            command: config.command.clone(),
            subcommand: subcommand.to_string(),
            status: output.status,
        });
    }

    let help = String::from_utf8_lossy(&output.stdout).into_owned();
    debug!(subcommand, length = help.len(), "captured help output");
    Ok(help)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_help_missing_binary_is_spawn_error() {
        let config = FlagTableConfig::new("definitely-not-a-real-binary-4729");
        let err = capture_help(&config, "run").unwrap_err();
        assert!(matches!(err, PreprocessorError::Spawn { .. }));
    }

    #[test]
    fn test_capture_help_blank_command_is_spawn_error() {
        let config = FlagTableConfig::new("");
        let err = capture_help(&config, "run").unwrap_err();
        assert!(matches!(err, PreprocessorError::Spawn { .. }));
    }
}
