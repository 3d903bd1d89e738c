//!
//! The benchmark reporter executable.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

/// The exit code on success.
const EXIT_CODE_SUCCESS: i32 = 0;

/// The exit code on failure.
const EXIT_CODE_FAILURE: i32 = 1;

///
/// The application entry point.
///
fn main() {
    let exit_code = match main_inner(Arguments::parse()) {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{} {error:?}", "Error:".bright_red().bold());
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;

    let parser = benchmark_reporter::Parser::with_extra_kinds(arguments.kinds.clone());
    let mut result_set = benchmark_reporter::ResultSet::default();
    let mut settings = benchmark_reporter::ReportSettings::new(arguments.baseline.clone())
        .with_notes(arguments.notes.clone());

    if arguments.input_paths.is_empty() {
        let bench_dir = match arguments.bench_dir.as_deref() {
            Some(bench_dir) => bench_dir.to_owned(),
            None => {
                let current_dir = std::env::current_dir()?;
                benchmark_reporter::Runner::resolve_bench_dir(current_dir.as_path()).to_owned()
            }
        };
        let runner = benchmark_reporter::Runner::go_test(
            arguments.max_size,
            arguments.goamd64.as_str(),
            arguments.tags.as_str(),
            bench_dir.as_str(),
        )
        .with_quiet(arguments.quiet);

        if !arguments.quiet {
            eprintln!(
                "     {} benchmarks (max size: {})",
                "Running".bright_green().bold(),
                arguments.max_size,
            );
            eprintln!(
                "     {} {}",
                "Command".bright_green().bold(),
                runner.command_line()
            );
        }

        match runner.run(&parser, &mut result_set) {
            Ok(_) => {}
            Err(error) if arguments.keep_partial && error.keeps_partial_results() => {
                if !arguments.quiet {
                    eprintln!(
                        "     {} {error}. Reporting the results collected so far.",
                        "Warning".bright_yellow().bold(),
                    );
                }
            }
            Err(error) => Err(error)?,
        }
        settings = settings.with_command(runner.command_line());
    } else {
        for input in benchmark_reporter::Input::resolve(arguments.input_paths)?.into_iter() {
            match input.read_into(&parser, &mut result_set) {
                Ok(_) => {}
                Err(benchmark_reporter::InputError::EmptyFile { path }) => {
                    if !arguments.quiet {
                        eprintln!("Warning: Input file {path:?} is empty and will be skipped.");
                    }
                }
                Err(error) => Err(error)?,
            }
        }
    }

    if !arguments.quiet {
        eprintln!(
            "      {} {} results",
            "Parsed".bright_green().bold(),
            result_set.count(),
        );
    }

    let output: benchmark_reporter::Output =
        (&result_set, &settings, arguments.output_format).try_into()?;
    if arguments.show {
        output.write_to_stdout()?;
    } else {
        output.write_to_file(arguments.output.clone())?;
        if !arguments.quiet {
            eprintln!(
                "    {} writing results to {:?}",
                "Finished".bright_green().bold(),
                arguments.output,
            );
        }
    }

    Ok(())
}
