use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "spherecast")]
#[command(about = "A flat-color sphere ray caster in Rust")]
pub struct Args {
    /// Scene configuration file; the built-in demo scene is used when the
    /// file does not exist
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Override the configured image width in pixels
    #[arg(long, help = "Override the configured image width in pixels")]
    pub width: Option<u32>,

    /// Override the configured image height in pixels
    #[arg(long, help = "Override the configured image height in pixels")]
    pub height: Option<u32>,

    /// Output file path (.png)
    #[arg(
        short,
        long,
        default_value = "output.png",
        help = "Output file path (.png)"
    )]
    pub output: String,
}
