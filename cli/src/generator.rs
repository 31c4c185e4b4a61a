//! Flag-table generation and placeholder substitution.
//!
//! Probes the external tool once per subcommand, turns each captured help
//! output into a rendered Markdown table, and holds the two results for the
//! duration of the tree rewrite. The tables are built once at startup and
//! passed explicitly wherever substitution happens.

use flagtable_core::flag_table_from_help;
use tracing::info;

use crate::config::FlagTableConfig;
use crate::error::{PreprocessorError, Result};
use crate::probe::capture_help;

/// Placeholder token authors embed to request the `run` flag table.
pub const RUN_PLACEHOLDER: &str = "{{#custom run-flags}}";

/// Placeholder token authors embed to request the `compile` flag table.
pub const COMPILE_PLACEHOLDER: &str = "{{#custom compile-flags}}";

/// Subcommands whose flag tables are generated, in probe order.
pub const SUBCOMMANDS: [&str; 2] = ["run", "compile"];

/// Generates the rendered Markdown flag table for one subcommand.
///
/// Invokes `<tool> <subcommand> -h`, locates the `Options:` section, and
/// renders the three-column table. Any failure along the way (missing
/// binary, non-zero exit, no options section) is fatal for the run.
pub fn generate_flag_table(config: &FlagTableConfig, subcommand: &str) -> Result<String> {
    let help = capture_help(config, subcommand)?;
    let table = flag_table_from_help(&help).ok_or_else(|| {
        PreprocessorError::MissingOptionsSection {
            command: config.command.clone(),
            subcommand: subcommand.to_string(),
        }
    })?;
    info!(subcommand, "generated flag table");
    Ok(table)
}

/// The two precomputed tables, written once and read for every text field.
#[derive(Debug, Clone)]
pub struct FlagTables {
    pub run: String,
    pub compile: String,
}

impl FlagTables {
    /// Probes both subcommands sequentially and renders their tables.
    pub fn generate(config: &FlagTableConfig) -> Result<Self> {
        let [run_subcommand, compile_subcommand] = SUBCOMMANDS;
        Ok(Self {
            run: generate_flag_table(config, run_subcommand)?,
            compile: generate_flag_table(config, compile_subcommand)?,
        })
    }

    /// Replaces every occurrence of both placeholder tokens in `text`.
    ///
    /// Tokens not present are left untouched; a string may contain zero,
    /// one, or both tokens, each replaced independently.
    pub fn apply(&self, text: &str) -> String {
        text.replace(RUN_PLACEHOLDER, &self.run)
            .replace(COMPILE_PLACEHOLDER, &self.compile)
    }
}
