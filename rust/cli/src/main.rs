use std::io;

fn main() {
    // Invalid configuration is reported by the command itself; logging just falls back.
    let level = handrank_cli::config::load()
        .map(|cfg| cfg.log_level)
        .unwrap_or_else(|_| handrank_cli::config::Config::default().log_level);
    handrank_cli::logging::init_logging(&level);

    let code = handrank_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
