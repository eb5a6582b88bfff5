//! Unit tests for the CLI commands and point file loading.

use std::path::Path;

use clap::Parser;
use junction_core::{ClusterError, ClusterErrorCode};
use junction_providers_points::{Point3, PointsError};
use rstest::rstest;
use tracing_subscriber::layer::SubscriberExt;

use super::commands::{derive_data_source_name, run_command};
use super::test_helpers::{SAMPLE, SpanCapture, run_args, temp_dir, write_points};
use super::{
    BottleneckReport, Cli, CliError, Command, ExecutionSummary, QueryKind, render_summary, run_cli,
};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[rstest]
#[case::override_name("/tmp/boxes.txt", Some("override"), "override")]
#[case::stem_with_extension("/tmp/boxes.txt", None, "boxes")]
#[case::stem_without_extension("/tmp/boxes", None, "boxes")]
#[case::missing_stem("", None, "points")]
fn derive_data_source_name_selects_expected_name(
    #[case] raw_path: &str,
    #[case] override_name: Option<&'static str>,
    #[case] expected: &str,
) {
    let name = derive_data_source_name(Path::new(raw_path), override_name);
    assert_eq!(name, expected);
}

#[rstest]
fn sample_run_reports_both_answers() -> TestResult {
    let dir = temp_dir();
    let path = write_points(&dir, "boxes.txt", SAMPLE)?;
    let summary = run_cli(Cli {
        command: Command::Run(run_args(path, 10)),
    })?;

    assert_eq!(summary.data_source, "boxes");
    assert_eq!(summary.points, 20);

    let product = summary.product.as_ref().ok_or("product must be present")?;
    assert_eq!(product.product(), 40);
    assert_eq!(product.sizes(), &[5, 4, 2]);
    assert_eq!(product.attempts(), 10);

    let report = summary.bottleneck.ok_or("bottleneck must be present")?;
    assert_eq!(report.x_product, 25_272);
    let mut xs = [report.source.1.x(), report.target.1.x()];
    xs.sort_unstable();
    assert_eq!(xs, [117, 216]);
    assert_eq!(report.weight, report.source.1.squared_distance(&report.target.1));
    Ok(())
}

#[rstest]
#[case::product_only(QueryKind::Product, true, false)]
#[case::bottleneck_only(QueryKind::Bottleneck, false, true)]
#[case::both(QueryKind::Both, true, true)]
fn query_kind_selects_queries(
    #[case] query: QueryKind,
    #[case] wants_product: bool,
    #[case] wants_bottleneck: bool,
) -> TestResult {
    let dir = temp_dir();
    let path = write_points(&dir, "boxes.txt", SAMPLE)?;
    let mut command = run_args(path, 10);
    command.query = query;
    let summary = run_command(command)?;
    assert_eq!(summary.product.is_some(), wants_product);
    assert_eq!(summary.bottleneck.is_some(), wants_bottleneck);
    Ok(())
}

#[rstest]
fn top_flag_changes_the_product() -> TestResult {
    let dir = temp_dir();
    let path = write_points(&dir, "boxes.txt", SAMPLE)?;
    let mut command = run_args(path, 10);
    command.top = 2;
    command.query = QueryKind::Product;
    let summary = run_command(command)?;
    let product = summary.product.ok_or("product must be present")?;
    assert_eq!(product.product(), 20);
    Ok(())
}

#[rstest]
fn name_override_is_reported() -> TestResult {
    let dir = temp_dir();
    let path = write_points(&dir, "boxes.txt", SAMPLE)?;
    let mut command = run_args(path, 10);
    command.name = Some("playground".to_owned());
    let summary = run_command(command)?;
    assert_eq!(summary.data_source, "playground");
    Ok(())
}

#[rstest]
fn missing_file_is_an_io_error() {
    let dir = temp_dir();
    let err = run_command(run_args(dir.path().join("missing.txt"), 10))
        .expect_err("missing file must fail");
    assert_eq!(err.code(), None);
    match err {
        CliError::Io { path, .. } => assert!(path.ends_with("missing.txt")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn malformed_line_is_a_points_error() -> TestResult {
    let dir = temp_dir();
    let path = write_points(&dir, "bad.txt", "1,2,3\n4,5\n")?;
    let err = run_command(run_args(path, 10)).expect_err("malformed line must fail");
    assert_eq!(err.code(), Some("JUNCTION_POINTS_MALFORMED_LINE"));
    assert!(matches!(
        err,
        CliError::Points(PointsError::MalformedLine { line: 2, .. })
    ));
    Ok(())
}

#[rstest]
fn zero_attempts_is_a_core_error() -> TestResult {
    let dir = temp_dir();
    let path = write_points(&dir, "boxes.txt", SAMPLE)?;
    let err = run_command(run_args(path, 0)).expect_err("zero attempts must fail");
    match err {
        CliError::Core(core) => {
            assert_eq!(core, ClusterError::InvalidAttemptLimit { got: 0 });
            assert_eq!(core.code(), ClusterErrorCode::InvalidAttemptLimit);
            assert_eq!(
                CliError::Core(core).code(),
                Some("JUNCTION_INVALID_ATTEMPT_LIMIT")
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[rstest]
fn single_point_has_no_bottleneck() -> TestResult {
    let dir = temp_dir();
    let path = write_points(&dir, "one.txt", "7,8,9\n")?;
    let err = run_command(run_args(path.clone(), 10)).expect_err("one point cannot connect");
    assert!(matches!(err, CliError::Core(ClusterError::SingleElement)));

    let mut command = run_args(path, 10);
    command.query = QueryKind::Product;
    let summary = run_command(command)?;
    assert_eq!(summary.product.map(|outcome| outcome.product()), Some(1));
    Ok(())
}

#[test]
fn clap_applies_defaults() -> TestResult {
    let cli = Cli::try_parse_from(["junction", "run", "points.txt"])?;
    let Command::Run(run) = cli.command;
    assert_eq!(run.attempts, 1000);
    assert_eq!(run.top, 3);
    assert_eq!(run.query, QueryKind::Both);
    assert_eq!(run.name, None);
    Ok(())
}

#[test]
fn clap_parses_every_flag() -> TestResult {
    let cli = Cli::try_parse_from([
        "junction",
        "run",
        "points.txt",
        "--attempts",
        "10",
        "--top",
        "2",
        "--query",
        "bottleneck",
        "--name",
        "demo",
    ])?;
    let Command::Run(run) = cli.command;
    assert_eq!(run.attempts, 10);
    assert_eq!(run.top, 2);
    assert_eq!(run.query, QueryKind::Bottleneck);
    assert_eq!(run.name.as_deref(), Some("demo"));
    Ok(())
}

#[rstest]
#[case::negative_attempts(&["junction", "run", "p.txt", "--attempts", "-1"])]
#[case::unknown_query(&["junction", "run", "p.txt", "--query", "everything"])]
#[case::missing_path(&["junction", "run"])]
fn clap_rejects_invalid_arguments(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn render_summary_lists_every_answer() -> TestResult {
    let summary = ExecutionSummary {
        data_source: "demo".to_owned(),
        points: 3,
        product: None,
        bottleneck: Some(BottleneckReport {
            source: (1, Point3::new(2, 0, 0)),
            target: (2, Point3::new(-3, 0, 1)),
            weight: 26,
            edges_consumed: 2,
            x_product: -6,
        }),
    };
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    let rendered = String::from_utf8(buffer)?;
    assert_eq!(
        rendered,
        "data source: demo\n\
         points: 3\n\
         bottleneck: 1 (2,0,0) - 2 (-3,0,1)\n\
         bottleneck weight: 26\n\
         edges consumed: 2\n\
         x product: -6\n"
    );
    Ok(())
}

#[test]
fn render_summary_includes_component_sizes() -> TestResult {
    let dir = temp_dir();
    let path = write_points(&dir, "boxes.txt", SAMPLE)?;
    let mut command = run_args(path, 10);
    command.query = QueryKind::Product;
    let summary = run_command(command)?;
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    let rendered = String::from_utf8(buffer)?;
    assert!(rendered.contains("component product: 40\n"));
    assert!(rendered.contains("largest components: 5 x 4 x 2\n"));
    assert!(rendered.contains("attempts: 10 ("));
    Ok(())
}

#[rstest]
fn run_command_emits_tracing_fields() -> TestResult {
    let dir = temp_dir();
    let path = write_points(&dir, "boxes.txt", SAMPLE)?;
    let layer = SpanCapture::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let summary =
        tracing::subscriber::with_default(subscriber, || run_command(run_args(path, 10)))?;
    assert_eq!(summary.data_source, "boxes");

    let execute = layer.span("cli.execute").ok_or("cli.execute span must exist")?;
    assert_eq!(execute.fields.get("attempts"), Some(&"10".to_owned()));
    assert_eq!(execute.fields.get("top"), Some(&"3".to_owned()));
    assert_eq!(execute.fields.get("query"), Some(&"both".to_owned()));
    assert_eq!(
        execute.fields.get("override_name"),
        Some(&"<derived>".to_owned())
    );

    let reader = layer
        .span("cli.open_points_reader")
        .ok_or("reader span must exist")?;
    assert!(
        reader
            .fields
            .get("path")
            .is_some_and(|value| value.ends_with("boxes.txt"))
    );

    let product = layer
        .span("engine.component_product")
        .ok_or("engine span must exist")?;
    assert_eq!(product.fields.get("element_count"), Some(&"20".to_owned()));
    assert!(layer.span("engine.bottleneck_edge").is_some());
    assert!(layer.has_event("command completed"));
    Ok(())
}

#[rstest]
fn open_points_reader_records_path_on_error() {
    let dir = temp_dir();
    let layer = SpanCapture::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let command = run_args(dir.path().join("missing.txt"), 10);
    let err = tracing::subscriber::with_default(subscriber, || run_command(command))
        .expect_err("missing file must fail");
    assert!(matches!(err, CliError::Io { .. }));

    let reader = layer
        .span("cli.open_points_reader")
        .expect("reader span must exist");
    assert!(
        reader
            .fields
            .get("path")
            .is_some_and(|value| value.ends_with("missing.txt"))
    );
}
