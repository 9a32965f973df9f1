use std::process::ExitCode;

fn main() -> ExitCode {
    match extension_repo_builder::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
