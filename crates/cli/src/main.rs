use std::process::ExitCode;

fn main() -> ExitCode {
    airtime_cli::run()
}
