//!
//! The benchmark runner tests.
//!

use std::path::Path;

use super::error::Error as RunnerError;
use super::Runner;
use crate::input::parser::Parser;
use crate::kind::Kind;
use crate::model::result_set::ResultSet;

fn shell(script: &str) -> Runner {
    Runner::new("sh".to_owned(), vec!["-c".to_owned(), script.to_owned()]).with_quiet(true)
}

#[test]
fn go_test_command_line() {
    let runner = Runner::go_test(1024, "v2", "purego", "./bench");
    assert_eq!(
        runner.command_line(),
        "FFT_BENCH_MAX=1024 GOAMD64=v2 go test -bench . -benchmem -run ^$ -tags=purego ./bench"
    );
}

#[test]
fn bench_dir_from_nested_package() {
    let directory = tempfile::tempdir().expect("Always valid");
    let nested = directory.path().join("cmd").join("benchrunner");
    std::fs::create_dir_all(nested.as_path()).expect("Always valid");

    assert_eq!(Runner::resolve_bench_dir(nested.as_path()), "../../bench");
}

#[test]
fn bench_dir_from_project_root() {
    let directory = tempfile::tempdir().expect("Always valid");
    std::fs::create_dir(directory.path().join("bench")).expect("Always valid");

    assert_eq!(Runner::resolve_bench_dir(directory.path()), "./bench");
    assert_eq!(
        Runner::resolve_bench_dir(Path::new("/nonexistent/project")),
        "./bench"
    );
}

#[cfg(unix)]
#[test]
fn streams_output_into_result_set() {
    let runner = shell(
        "echo 'goos: linux'; \
         echo 'BenchmarkFFT/go-fftw/64-8 1000 100 ns/op 10 MB/s 0 B/op 0 allocs/op'; \
         echo \"BenchmarkFFT/gonum/64-8 1000 $FFT_BENCH_MAX ns/op 5 MB/s 16 B/op 1 allocs/op\"; \
         echo PASS",
    )
    .with_environment("FFT_BENCH_MAX", "200".to_owned());

    let mut result_set = ResultSet::default();
    let recognized = runner
        .run(&Parser::default(), &mut result_set)
        .expect("Always valid");

    assert_eq!(recognized, 2);
    assert_eq!(
        result_set
            .get(&Kind::FFT, "gonum", 64)
            .map(|record| record.time_per_op),
        Some(200.0)
    );
}

#[cfg(unix)]
#[test]
fn failure_keeps_partial_results() {
    let runner = shell(
        "echo 'BenchmarkIFFT/gonum/64-8 1000 100 ns/op 10 MB/s 0 B/op 0 allocs/op'; exit 3",
    );

    let mut result_set = ResultSet::default();
    let result = runner.run(&Parser::default(), &mut result_set);

    let error = result.expect_err("Always fails");
    assert!(matches!(error, RunnerError::Failed { .. }));
    assert!(error.keeps_partial_results());
    assert_eq!(result_set.count(), 1);
}

#[cfg(unix)]
#[test]
fn invalid_utf8_output_is_skipped() {
    let runner = shell(
        "echo 'BenchmarkFFT/libA/64-8 1000 100 ns/op 10 MB/s 0 B/op 0 allocs/op'; \
         printf '\\377\\376 progress noise\\n'; \
         echo 'BenchmarkFFT/libB/64-8 1000 50 ns/op 20 MB/s 0 B/op 0 allocs/op'",
    );

    let mut result_set = ResultSet::default();
    let recognized = runner
        .run(&Parser::default(), &mut result_set)
        .expect("Always valid");

    assert_eq!(recognized, 2);
    assert!(result_set.get(&Kind::FFT, "libB", 64).is_some());
}

#[test]
fn partial_results_kept_on_reading_errors() {
    let reading = RunnerError::Reading {
        error: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"),
    };
    let spawning = RunnerError::Spawning {
        error: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        command: "go test".to_owned(),
    };
    let unavailable = RunnerError::OutputUnavailable {
        command: "go test".to_owned(),
    };

    assert!(reading.keeps_partial_results());
    assert!(!spawning.keeps_partial_results());
    assert!(!unavailable.keeps_partial_results());
}

#[test]
fn missing_program() {
    let runner = Runner::new("benchmark-reporter-nonexistent-program".to_owned(), vec![]);
    let result = runner.run(&Parser::default(), &mut ResultSet::default());
    assert!(matches!(result, Err(RunnerError::Spawning { .. })));
}
