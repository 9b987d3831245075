//! Command implementations and argument parsing for the tonari CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;
use tonari_core::{ComponentSizes, ForestErrorCode, Instance, InstanceError, TonariError};
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "tonari",
    about = "Print the connected-component sizes of planar point sets."
)]
pub struct Cli {
    /// Instance files: a distance threshold on line 1, then one `x, y`
    /// point per line.
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening an instance file failed.
    #[error("failed to open `{}`: {source}", .path.display())]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The instance file was malformed.
    #[error("failed to parse `{}`: {source}", .path.display())]
    Instance {
        /// Offending instance file.
        path: PathBuf,
        /// Parse failure with its line number.
        #[source]
        source: InstanceError,
    },
    /// The core library rejected the instance.
    #[error("failed to solve `{}`: {source}", .path.display())]
    Core {
        /// Offending instance file.
        path: PathBuf,
        /// Underlying library error.
        #[source]
        source: TonariError,
    },
    /// Writing a result line failed.
    #[error("failed to write results: {0}")]
    Output(#[source] io::Error),
}

impl CliError {
    /// Stable code of the underlying library error, when there is one.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Instance { source, .. } => Some(source.code().as_str()),
            Self::Core { source, .. } => Some(source.code().as_str()),
            Self::Io { .. } | Self::Output(_) => None,
        }
    }

    /// Forest error code when the failure was a forest invariant violation.
    #[must_use]
    pub fn forest_code(&self) -> Option<ForestErrorCode> {
        match self {
            Self::Core { source, .. } => source.forest_code(),
            _ => None,
        }
    }
}

/// Outcome of solving one instance file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceSummary {
    /// File the instance was read from.
    pub path: PathBuf,
    /// Component sizes, largest first.
    pub sizes: ComponentSizes,
}

/// Solves every instance named by `cli`, writing one result line per
/// instance to `writer` and flushing after each.
///
/// Processing stops at the first failure; lines for earlier instances have
/// already been flushed by then. Returns the number of instances solved.
///
/// # Errors
/// Returns [`CliError`] for the first instance that cannot be opened,
/// parsed, or solved, or when writing a result fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use tonari_cli::cli::{Cli, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "2.0\n0,0\n1,0\n5,5\n5,6\n")?;
/// let cli = Cli {
///     paths: vec![file.path().to_path_buf()],
/// };
/// let mut output = Vec::new();
/// assert_eq!(run_cli(cli, &mut output)?, 1);
/// assert_eq!(String::from_utf8(output)?, "[2, 2]\n");
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli, writer),
    fields(instances = cli.paths.len()),
)]
pub fn run_cli(cli: Cli, mut writer: impl Write) -> Result<usize, CliError> {
    for path in &cli.paths {
        let summary = run_instance(path)?;
        render_summary(&summary, &mut writer).map_err(CliError::Output)?;
        writer.flush().map_err(CliError::Output)?;
    }
    Ok(cli.paths.len())
}

/// Opens, parses, and solves the instance stored at `path`.
///
/// The threshold declared by the file configures the computation.
///
/// # Errors
/// Returns [`CliError::Io`] when the file cannot be opened,
/// [`CliError::Instance`] when it is malformed, and [`CliError::Core`] when
/// the declared threshold or a point is rejected.
#[instrument(
    name = "cli.instance",
    err,
    skip(path),
    fields(path = %path.display(), points = field::Empty, threshold = field::Empty),
)]
pub fn run_instance(path: &Path) -> Result<InstanceSummary, CliError> {
    let reader = open_instance(path)?;
    let instance = Instance::try_from_reader(reader).map_err(|source| CliError::Instance {
        path: path.to_path_buf(),
        source,
    })?;

    let span = Span::current();
    span.record("points", instance.len());
    span.record("threshold", instance.threshold());

    let sizes = instance
        .connectivity()
        .and_then(|connectivity| connectivity.run(&instance))
        .map_err(|source| CliError::Core {
            path: path.to_path_buf(),
            source,
        })?;
    info!(components = sizes.component_count(), "instance solved");
    Ok(InstanceSummary {
        path: path.to_path_buf(),
        sizes,
    })
}

fn open_instance(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Writes `summary` as a single line in list form, e.g. `[3, 1]`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use tonari_cli::cli::{InstanceSummary, render_summary};
/// # use tonari_core::ComponentSizes;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = InstanceSummary {
///     path: "demo.txt".into(),
///     sizes: ComponentSizes::from_unsorted(vec![1, 3]),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(buffer, b"[3, 1]\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &InstanceSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{}", summary.sizes)
}
