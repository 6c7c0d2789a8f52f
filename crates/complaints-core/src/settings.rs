use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Summarise consumer complaints by product and year
#[derive(Parser, Debug, Clone)]
#[command(
    name = "complaint-report",
    about = "Summarise consumer complaints by product and year",
    version
)]
pub struct Settings {
    /// Input CSV with `Date received`, `Product` and `Company` columns
    pub input: PathBuf,

    /// Output report path
    pub output: PathBuf,

    /// Logging level
    #[arg(
        long,
        env = "COMPLAINT_REPORT_LOG_LEVEL",
        default_value = "INFO",
        value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"]
    )]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Write a JSON summary of the run (rows read, accepted, skipped) here
    #[arg(long)]
    pub report: Option<PathBuf>,
}

// ── PipelineConfig ─────────────────────────────────────────────────────────────

/// Paths the pipeline reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl PipelineConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    /// `--debug` overrides the log level.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// The input/output pair handed to the pipeline.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::new(&self.input, &self.output)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
