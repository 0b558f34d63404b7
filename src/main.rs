use std::process::ExitCode;

fn main() -> ExitCode {
    ctx::cli::run(std::env::args_os()).into()
}
