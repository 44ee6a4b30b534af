use std::process::ExitCode;

use tracklist::runtime;

fn main() -> ExitCode {
    runtime::init_logging();

    match runtime::run() {
        Ok(summary) => {
            println!(
                "Created {} with {} tracks",
                summary.output.display(),
                summary.count
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            runtime::report_failure(&e);
            ExitCode::FAILURE
        }
    }
}
