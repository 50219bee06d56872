//! yeeks main entrypoint.

use flexi_logger::Logger;
use yeeks::run;
use yeeks::ui::messages::error;

fn main() {
    // diagnostics go to stderr; RUST_LOG overrides the default level
    let _logger = Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.log_to_stderr().start())
        .map_err(|e| eprintln!("Logging disabled: {e}"))
        .ok();

    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
