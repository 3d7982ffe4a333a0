//! # Closet CLI
//!
//! Command-line host for the closet configurator core. Reads a closet
//! document (any supported schema version) from a file or stdin and prints
//! JSON to stdout. Logs go to stderr.
//!
//! ## Usage
//!
//! ```bash
//! closet parts closet.json
//! closet validate closet.json        # exit code 1 when errors are found
//! closet export --pretty closet.json
//! closet dims --units in closet.json
//! closet preset reach_in --auto double-hang
//! ```
//!
//! ## Architecture
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `run` - Executes a command and returns its [`Outcome`]; `main` only
//!   prints it, so commands are testable in-process

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use closet_core::{
    build_parts, derive_dims, export_for_backend, has_errors, load_state, validate_closet,
    AutoCreatePreset, ClosetState, ClosetType, DerivedDims, IdSource, SequentialIds, Units,
    UuidIds, Violation,
};
use serde::Serialize;

/// Exit code returned when validation finds errors.
pub const EXIT_INVALID: u8 = 1;

/// Command-line arguments for closet.
#[derive(Debug, Clone, Parser)]
#[command(name = "closet")]
#[command(about = "Build parts, validate and export closet configurations")]
#[command(version)]
pub struct CliArgs {
    /// Pretty-print JSON output
    #[arg(long, global = true, env = "CLOSET_PRETTY")]
    pub pretty: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the positioned part list
    Parts {
        /// Closet document, or `-` for stdin
        input: PathBuf,
    },

    /// Print constraint violations
    Validate {
        /// Closet document, or `-` for stdin
        input: PathBuf,
    },

    /// Print the clamped pricing payload
    Export {
        /// Closet document, or `-` for stdin
        input: PathBuf,
    },

    /// Print the cabinet's derived interior dimensions
    Dims {
        /// Closet document, or `-` for stdin
        input: PathBuf,

        /// Display units for the formatted values (defaults to the document's)
        #[arg(long)]
        units: Option<Units>,
    },

    /// Print a fresh closet document for a closet type
    Preset {
        /// Closet type: `reach_in`, `walk_in` or `custom`
        closet_type: ClosetType,

        /// Replace the towers with an auto-create layout filling the interior
        #[arg(long)]
        auto: Option<AutoCreatePreset>,

        /// Mint random tower and wall ids instead of sequential ones
        #[arg(long, env = "CLOSET_RANDOM_IDS")]
        random_ids: bool,
    },
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text for stdout.
    pub output: String,
    /// Process exit code.
    pub exit_code: u8,
}

impl Outcome {
    fn success(output: String) -> Self {
        Self {
            output,
            exit_code: 0,
        }
    }
}

/// Validation report printed by `validate`.
#[derive(Debug, Serialize)]
struct ValidationReport<'a> {
    valid: bool,
    violations: &'a [Violation],
}

/// Derived dims plus their display strings.
#[derive(Debug, Serialize)]
struct DimsReport {
    units: Units,
    dims: DerivedDims,
    formatted: FormattedDims,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormattedDims {
    width: String,
    height: String,
    depth: String,
    inner_width: String,
    inner_height: String,
    inner_depth: String,
}

impl FormattedDims {
    fn new(dims: &DerivedDims, units: Units) -> Self {
        Self {
            width: units.format(dims.width, None),
            height: units.format(dims.height, None),
            depth: units.format(dims.depth, None),
            inner_width: units.format(dims.inner_width, None),
            inner_height: units.format(dims.inner_height, None),
            inner_depth: units.format(dims.inner_depth, None),
        }
    }
}

/// Run a parsed command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, or if output
/// serialization fails. Validation errors are not failures; they set
/// [`Outcome::exit_code`] to [`EXIT_INVALID`].
pub fn run(args: &CliArgs) -> anyhow::Result<Outcome> {
    match &args.command {
        Command::Parts { input } => {
            let state = read_state(input)?;
            let parts = build_parts(&state);
            tracing::info!(parts = parts.len(), "Built parts");
            Ok(Outcome::success(to_json(&parts, args.pretty)?))
        }
        Command::Validate { input } => {
            let state = read_state(input)?;
            let violations = validate_closet(&state);
            let valid = !has_errors(&violations);
            if !valid {
                tracing::warn!(violations = violations.len(), "Closet has errors");
            }
            let report = ValidationReport {
                valid,
                violations: &violations,
            };
            Ok(Outcome {
                output: to_json(&report, args.pretty)?,
                exit_code: if valid { 0 } else { EXIT_INVALID },
            })
        }
        Command::Export { input } => {
            let state = read_state(input)?;
            let payload = export_for_backend(&state);
            Ok(Outcome::success(to_json(&payload, args.pretty)?))
        }
        Command::Dims { input, units } => {
            let state = read_state(input)?;
            let units = units.unwrap_or(state.units);
            let dims = derive_dims(&state.cabinet);
            let report = DimsReport {
                units,
                dims,
                formatted: FormattedDims::new(&dims, units),
            };
            Ok(Outcome::success(to_json(&report, args.pretty)?))
        }
        Command::Preset {
            closet_type,
            auto,
            random_ids,
        } => {
            let state = if *random_ids {
                preset_state(*closet_type, *auto, &mut UuidIds)
            } else {
                preset_state(*closet_type, *auto, &mut SequentialIds::new())
            };
            tracing::info!(
                closet_type = %closet_type,
                towers = state.towers.len(),
                "Created closet preset"
            );
            Ok(Outcome::success(to_json(&state, args.pretty)?))
        }
    }
}

/// A fresh state for `closet_type`, optionally with auto-created towers.
#[must_use]
pub fn preset_state(
    closet_type: ClosetType,
    auto: Option<AutoCreatePreset>,
    ids: &mut dyn IdSource,
) -> ClosetState {
    let mut state = ClosetState::for_type(closet_type, ids);
    if let Some(preset) = auto {
        let dims = derive_dims(&state.cabinet);
        state.towers = preset.create_towers(ids, dims.inner_width, dims.depth, dims.height);
    }
    state
}

/// Load a closet document from `path`, or stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not a supported
/// closet document.
pub fn read_state(path: &Path) -> anyhow::Result<ClosetState> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read closet document from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    let state = load_state(&json)
        .with_context(|| format!("Invalid closet document: {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        schema_version = state.schema_version,
        towers = state.towers.len(),
        "Loaded closet document"
    );
    Ok(state)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
