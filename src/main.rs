use std::process::ExitCode;

fn main() -> ExitCode {
    match stylegate::cli::run() {
        Ok(status) => status.into(),
        Err(e) => {
            stylegate::ui::output::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
