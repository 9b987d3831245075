//! Unit tests for argument parsing and instance execution.

use super::test_helpers::{run_paths, temp_dir, write_instance};
use super::{Cli, CliError, InstanceSummary, render_summary, run_instance};

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use rstest::rstest;
use tonari_core::{ComponentSizes, InstanceError, TonariError};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use tonari_test_support::tracing::RecordingLayer;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const TWO_PAIRS: &str = "2.0\n0.0, 0.0\n1.0, 0.0\n5.0, 5.0\n5.0, 6.0\n";
const ISOLATED: &str = "0.5\n0,0\n10,10\n";

#[rstest]
fn parse_requires_at_least_one_path() {
    let err = Cli::try_parse_from(["tonari"]).expect_err("paths are required");
    assert_eq!(
        err.kind(),
        clap::error::ErrorKind::MissingRequiredArgument
    );
}

#[rstest]
fn parse_keeps_paths_in_order() {
    let cli = Cli::try_parse_from(["tonari", "b.txt", "a.txt", "b.txt"]).expect("paths parse");
    assert_eq!(cli.paths, vec![
        PathBuf::from("b.txt"),
        PathBuf::from("a.txt"),
        PathBuf::from("b.txt"),
    ]);
}

#[rstest]
fn run_cli_prints_one_line_per_instance() -> TestResult {
    let dir = temp_dir();
    let first = write_instance(&dir, "pairs.txt", TWO_PAIRS)?;
    let second = write_instance(&dir, "isolated.txt", ISOLATED)?;
    let empty = write_instance(&dir, "empty.txt", "1.5\n")?;

    let (outcome, output) = run_paths(vec![first, second, empty]);
    assert_eq!(outcome?, 3);
    assert_eq!(output, "[2, 2]\n[1, 1]\n[]\n");
    Ok(())
}

#[rstest]
fn run_cli_stops_at_first_failure_after_flushing_earlier_results() -> TestResult {
    let dir = temp_dir();
    let good = write_instance(&dir, "good.txt", TWO_PAIRS)?;
    let bad = write_instance(&dir, "bad.txt", "1.0\n0,0\n1;1\n")?;
    let unreached = write_instance(&dir, "unreached.txt", ISOLATED)?;

    let (outcome, output) = run_paths(vec![good, bad.clone(), unreached]);
    match outcome {
        Err(CliError::Instance { path, source }) => {
            assert_eq!(path, bad);
            assert!(matches!(
                source,
                InstanceError::WrongFieldCount { line: 3, found: 1 }
            ));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(output, "[2, 2]\n");
    Ok(())
}

#[rstest]
fn missing_file_reports_io_error() {
    let dir = temp_dir();
    let missing = dir.path().join("absent.txt");
    let err = run_instance(&missing).expect_err("missing file must fail");
    assert!(matches!(&err, CliError::Io { path, .. } if *path == missing));
    assert_eq!(err.code(), None);
    assert!(err.to_string().contains("absent.txt"));
}

#[rstest]
#[case::zero("0\n0,0\n")]
#[case::negative("-2.5\n0,0\n")]
fn unusable_declared_threshold_is_a_core_error(#[case] contents: &str) -> TestResult {
    let dir = temp_dir();
    let path = write_instance(&dir, "threshold.txt", contents)?;
    let err = run_instance(&path).expect_err("threshold must be rejected");
    assert!(matches!(
        err,
        CliError::Core {
            source: TonariError::InvalidThreshold { .. },
            ..
        }
    ));
    assert_eq!(err.code(), Some("TONARI_INVALID_THRESHOLD"));
    assert_eq!(err.forest_code(), None);
    Ok(())
}

#[rstest]
fn far_out_point_is_a_core_error() -> TestResult {
    let dir = temp_dir();
    let path = write_instance(&dir, "far.txt", "1e-10\n1e9,0\n1000000001,0\n")?;
    let err = run_instance(&path).expect_err("far-out point must be rejected");
    assert_eq!(err.code(), Some("TONARI_COORDINATE_OUT_OF_RANGE"));
    assert!(err.to_string().contains("far.txt"));
    Ok(())
}

#[rstest]
#[case::missing_threshold("", "INSTANCE_MISSING_THRESHOLD")]
#[case::bad_threshold("near\n", "INSTANCE_INVALID_THRESHOLD")]
#[case::bad_coordinate("1\n0,zero\n", "INSTANCE_INVALID_COORDINATE")]
#[case::infinite_coordinate("1\ninf,0\n", "INSTANCE_NON_FINITE_COORDINATE")]
fn parse_failures_expose_instance_codes(
    #[case] contents: &str,
    #[case] expected: &str,
) -> TestResult {
    let dir = temp_dir();
    let path = write_instance(&dir, "instance.txt", contents)?;
    let err = run_instance(&path).expect_err("malformed instance must fail");
    assert_eq!(err.code(), Some(expected));
    Ok(())
}

#[rstest]
fn run_instance_records_span_fields() -> TestResult {
    let dir = temp_dir();
    let path = write_instance(&dir, "pairs.txt", TWO_PAIRS)?;
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let summary = tracing::subscriber::with_default(subscriber, || run_instance(&path))?;
    assert_eq!(summary.sizes.as_slice(), &[2, 2]);

    let span = layer
        .span("cli.instance")
        .expect("cli.instance span must exist");
    let expected_path = path.display().to_string();
    assert_eq!(span.field("path"), Some(expected_path.as_str()));
    assert_eq!(span.field("points"), Some("4"));
    assert_eq!(span.field("threshold"), Some("2.0"));
    assert!(layer.span("core.component_sizes").is_some());

    let solved = layer
        .events_at(Level::INFO)
        .into_iter()
        .find(|event| event.message() == Some("instance solved"))
        .expect("instance solved event must exist");
    assert_eq!(solved.field("components"), Some("2"));
    Ok(())
}

#[rstest]
fn failures_are_reported_on_the_instance_span() -> TestResult {
    let dir = temp_dir();
    let path = write_instance(&dir, "bad.txt", "1\n1,2,3\n")?;
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let outcome = tracing::subscriber::with_default(subscriber, || run_instance(&path));
    assert!(outcome.is_err());
    assert!(!layer.events_at(Level::ERROR).is_empty());
    Ok(())
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[rstest]
fn write_failures_surface_as_output_errors() -> TestResult {
    let dir = temp_dir();
    let path = write_instance(&dir, "pairs.txt", TWO_PAIRS)?;
    let err = super::run_cli(Cli { paths: vec![path] }, FailingWriter)
        .expect_err("broken writer must fail");
    assert!(matches!(err, CliError::Output(ref source) if source.kind() == io::ErrorKind::BrokenPipe));
    Ok(())
}

#[rstest]
#[case::two(vec![2, 2], "[2, 2]\n")]
#[case::unsorted(vec![1, 4, 2], "[4, 2, 1]\n")]
#[case::empty(vec![], "[]\n")]
fn render_summary_writes_list_form(#[case] sizes: Vec<usize>, #[case] expected: &str) -> TestResult {
    let summary = InstanceSummary {
        path: PathBuf::from("demo.txt"),
        sizes: ComponentSizes::from_unsorted(sizes),
    };
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    assert_eq!(String::from_utf8(buffer)?, expected);
    Ok(())
}
