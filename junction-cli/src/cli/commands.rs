//! Command implementations and argument parsing for the junction CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use junction_core::{
    ClusterEngine, ClusterEngineBuilder, ClusterError, ComponentProduct, DEFAULT_ATTEMPT_LIMIT,
    DEFAULT_TOP_COMPONENTS, EdgeSequence,
};
use junction_providers_points::{Point3, PointCloud, PointsError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "junction",
    about = "Cluster 3D points by ascending pairwise distance."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run cluster queries against a point file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a text file with one `x,y,z` point per line.
    pub path: PathBuf,

    /// Number of shortest edges the component product query may attempt.
    #[arg(
        long,
        default_value_t = DEFAULT_ATTEMPT_LIMIT,
        value_parser = clap::value_parser!(usize),
    )]
    pub attempts: usize,

    /// Number of largest components multiplied together.
    #[arg(
        long,
        default_value_t = DEFAULT_TOP_COMPONENTS,
        value_parser = clap::value_parser!(usize),
    )]
    pub top: usize,

    /// Which queries to run.
    #[arg(long, value_enum, default_value_t = QueryKind::Both)]
    pub query: QueryKind,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Queries selectable from the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum QueryKind {
    /// Multiply the largest component sizes after the attempt budget.
    Product,
    /// Find the edge that first connects every point.
    Bottleneck,
    /// Run both queries.
    Both,
}

impl QueryKind {
    const fn label(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Bottleneck => "bottleneck",
            Self::Both => "both",
        }
    }

    const fn wants_product(self) -> bool {
        matches!(self, Self::Product | Self::Both)
    }

    const fn wants_bottleneck(self) -> bool {
        matches!(self, Self::Bottleneck | Self::Both)
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading the point file.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The point file could not be parsed.
    #[error(transparent)]
    Points(#[from] PointsError),
    /// A cluster query failed.
    #[error(transparent)]
    Core(#[from] ClusterError),
}

impl CliError {
    /// Returns the stable code of the underlying library error, if any.
    ///
    /// I/O failures while opening the file carry no code.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => None,
            Self::Points(err) => Some(err.code().as_str()),
            Self::Core(err) => Some(err.code().as_str()),
        }
    }
}

/// The closing edge of a full connection, resolved back to its points.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BottleneckReport {
    /// Index and coordinates of the edge's first endpoint.
    pub source: (usize, Point3),
    /// Index and coordinates of the edge's second endpoint.
    pub target: (usize, Point3),
    /// Squared distance between the endpoints.
    pub weight: u128,
    /// Edges read before the final merge, inclusive.
    pub edges_consumed: usize,
    /// Product of the endpoints' x coordinates.
    pub x_product: i64,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the point cloud.
    pub data_source: String,
    /// Number of points read.
    pub points: usize,
    /// Component product outcome, when requested.
    pub product: Option<ComponentProduct>,
    /// Bottleneck outcome, when requested.
    pub bottleneck: Option<BottleneckReport>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing, or a query fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use junction_cli::cli::{Cli, Command, QueryKind, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0,0,0\n1,0,0\n10,0,0\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         attempts: 1,
///         top: 3,
///         query: QueryKind::Both,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.product.map(|outcome| outcome.product()), Some(2));
/// assert_eq!(summary.bottleneck.map(|report| report.x_product), Some(10));
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        attempts = field::Empty,
        top = field::Empty,
        query = field::Empty,
        override_name = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        attempts,
        top,
        query,
        name,
    } = command;
    let engine = ClusterEngineBuilder::new()
        .with_attempt_limit(attempts)
        .with_top_components(top)
        .build()?;

    let span = Span::current();
    span.record("attempts", field::display(attempts));
    span.record("top", field::display(top));
    span.record("query", field::display(query.label()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );

    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let reader = open_points_reader(&path)?;
    let cloud = PointCloud::try_from_reader(chosen_name, reader)?;
    let summary = execute_queries(&engine, &cloud, query)?;

    info!(
        data_source = summary.data_source.as_str(),
        points = summary.points,
        "command completed"
    );
    Ok(summary)
}

fn execute_queries(
    engine: &ClusterEngine,
    cloud: &PointCloud,
    query: QueryKind,
) -> Result<ExecutionSummary, CliError> {
    let edges = cloud.sorted_edges()?;
    let sequence = EdgeSequence::new(cloud.len(), &edges)?;

    let product = if query.wants_product() {
        Some(engine.component_product(sequence)?)
    } else {
        None
    };

    let bottleneck = if query.wants_bottleneck() {
        let found = engine.bottleneck_edge(sequence)?;
        let (source, target) = found.endpoints();
        let (Some(&left), Some(&right)) = (cloud.get(source), cloud.get(target)) else {
            return Err(ClusterError::ElementOutOfRange {
                element: source.max(target),
                element_count: cloud.len(),
            }
            .into());
        };
        Some(BottleneckReport {
            source: (source, left),
            target: (target, right),
            weight: found.weight(),
            edges_consumed: found.edges_consumed(),
            x_product: i64::from(left.x()) * i64::from(right.x()),
        })
    } else {
        None
    };

    Ok(ExecutionSummary {
        data_source: cloud.name().to_owned(),
        points: cloud.len(),
        product,
        bottleneck,
    })
}

#[instrument(name = "cli.open_points_reader", err, fields(path = field::Empty))]
pub(super) fn open_points_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "points".to_owned())
}

/// Renders `summary` to `writer` as `key: value` lines.
///
/// Queries that were not requested are omitted.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use junction_cli::cli::{ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     points: 4,
///     product: None,
///     bottleneck: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "data source: demo\npoints: 4\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "points: {}", summary.points)?;
    if let Some(product) = &summary.product {
        let sizes: Vec<String> = product.sizes().iter().map(ToString::to_string).collect();
        writeln!(writer, "component product: {}", product.product())?;
        writeln!(writer, "largest components: {}", sizes.join(" x "))?;
        writeln!(
            writer,
            "attempts: {} ({} merges)",
            product.attempts(),
            product.merges()
        )?;
    }
    if let Some(report) = &summary.bottleneck {
        let (source, left) = report.source;
        let (target, right) = report.target;
        writeln!(
            writer,
            "bottleneck: {source} ({},{},{}) - {target} ({},{},{})",
            left.x(),
            left.y(),
            left.z(),
            right.x(),
            right.y(),
            right.z()
        )?;
        writeln!(writer, "bottleneck weight: {}", report.weight)?;
        writeln!(writer, "edges consumed: {}", report.edges_consumed)?;
        writeln!(writer, "x product: {}", report.x_product)?;
    }
    Ok(())
}
