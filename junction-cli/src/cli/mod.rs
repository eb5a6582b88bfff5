//! Command-line interface orchestration for junction.
//!
//! The `run` command reads a point file, sorts every pairwise distance and
//! runs the component product and bottleneck queries over the result.

mod commands;

pub use commands::{
    BottleneckReport, Cli, CliError, Command, ExecutionSummary, QueryKind, RunCommand,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;
