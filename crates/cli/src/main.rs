use std::process::ExitCode;

fn main() -> ExitCode {
    commonground_cli::run()
}
