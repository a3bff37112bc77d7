use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use segment_designer::LogLevel;

/// Inspect segment layouts, truth-table presets and editor settings
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineArguments {
    /// Log verbosity (overrides the level in the saved settings)
    #[arg(long, value_enum)]
    pub log_level: Option<CliLogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the preview color of every segment
    Palette {
        /// Number of segments in the layout
        #[arg(short, long)]
        segments: i64,
        /// Output notation
        #[arg(short, long, value_enum, default_value_t = ColorFormat::Hex)]
        format: ColorFormat,
    },
    /// List groups of segments with identical activation patterns
    Groups {
        /// Truth-table preset file
        preset: PathBuf,
    },
    /// Validate a settings file and report redundant segments
    Check {
        /// Settings file; defaults to the one in the config directory
        settings: Option<PathBuf>,
    },
    /// Write a settings file to the config directory
    Init {
        /// Truth-table preset to start from
        #[arg(short, long)]
        preset: Option<PathBuf>,
        /// Number of segments; taken from the preset when omitted
        #[arg(short, long)]
        segments: Option<i64>,
    },
    /// Rewrite a JSON file with simple arrays kept on one line
    Format {
        /// File to format
        file: PathBuf,
        /// Overwrite the file instead of printing to stdout
        #[arg(short, long)]
        in_place: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    /// `#rrggbb`
    Hex,
    /// `r g b a`
    Rgba,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}
