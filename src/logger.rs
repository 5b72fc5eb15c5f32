//! Logging setup: file logs/ghost-ai.log, stderr if the file can't be opened.
//! The terminal itself belongs to the chat.

use log::LevelFilter;
use std::io::Write;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "logs/ghost-ai.log";

pub fn init() {
    let mut builder = env_logger::Builder::new();

    if let Ok(log_level) = std::env::var("RUST_LOG") {
        builder.parse_filters(&log_level);
    } else {
        builder.filter_level(LevelFilter::Info);
        // HTTP stack is too chatty at info
        builder.filter_module("reqwest", LevelFilter::Warn);
        builder.filter_module("hyper", LevelFilter::Warn);
        builder.filter_module("hyper_util", LevelFilter::Warn);
    }

    // [HH:MM:SS LEVEL] module - message
    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    if !std::path::Path::new(LOG_DIR).exists() {
        let _ = std::fs::create_dir(LOG_DIR);
    }

    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)
    {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!("Could not open {}: {}, logging to stderr", LOG_FILE, e);
            builder.target(env_logger::Target::Stderr);
        }
    }

    if builder.try_init().is_ok() {
        log::info!("Logging initialized ✓");
    }
}
