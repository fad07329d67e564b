//! Count command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_inputs, Input, LineReader};
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, ShowOptions, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use ngc_core::{
    parse_length, AnalysisSession, Config, Conversions, Discards, PartialPolicy, WindowMode,
};
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for counting n-grams
#[derive(Debug, Clone, Default, Args)]
pub struct CountArgs {
    /// Input files or patterns (supports glob); standard input when omitted
    #[arg(value_name = "FILE|PATTERN")]
    pub input: Vec<String>,

    /// Use fixed blocks instead of sliding windows
    #[arg(short, long)]
    pub block: bool,

    /// Conversions: a (Unicode to ASCII), l (to lower), u (to upper), s (squeeze spaces)
    #[arg(short, long, value_name = "ARGS")]
    pub convert: Option<String>,

    /// Discards: U (Unicode), u (upper), l (lower), L (letters), c (connectors),
    /// d (digits), p (punctuation), o (other symbols), s (spaces), n (control)
    #[arg(short, long, value_name = "ARGS")]
    pub discard: Option<String>,

    /// N-gram length
    #[arg(short, long, value_name = "N", value_parser = parse_length)]
    pub length: Option<usize>,

    /// Partial n-grams: d (discard), k (keep), j (justify)
    #[arg(short, long, value_name = "d|k|j")]
    pub partial: Option<PartialPolicy>,

    /// Hide the n-gram table
    #[arg(short, long)]
    pub quiet: bool,

    /// Show the character summary and coincidence metrics
    #[arg(short, long)]
    pub summary: bool,

    /// Show the transformed text
    #[arg(short, long)]
    pub text: bool,

    /// Count n-grams inside words
    #[arg(short, long)]
    pub word: bool,

    /// Enable debug logging (also enabled when NGC_DEBUG is set, whatever its value)
    #[arg(long)]
    pub debug: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(long, value_name = "FILE", env = "NGC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show a progress bar over the inputs on stderr
    #[arg(long)]
    pub progress: bool,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every input was processed
    Success,
    /// Some inputs could not be processed
    InputFailures(usize),
}

impl RunStatus {
    /// Whether the run processed every input
    pub fn is_success(self) -> bool {
        self == RunStatus::Success
    }
}

/// Settings resolved from the configuration file and the command line
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Analysis configuration
    pub analysis: Config,
    /// Parts of the results to show
    pub show: ShowOptions,
    /// Output format
    pub format: OutputFormat,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> Result<RunStatus> {
        self.init_logging();

        log::info!("Starting n-gram counting");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let settings = self.settings(&file_config)?;

        let resolution = resolve_inputs(&self.input);
        let mut failures = resolution.failures.len();
        for failure in &resolution.failures {
            log::error!("{failure}");
        }

        let mut session = AnalysisSession::new(settings.analysis.clone());
        let mut text_lines = Vec::new();
        let mut progress = ProgressReporter::new(self.progress);
        progress.init_inputs(resolution.inputs.len() as u64);

        for input in &resolution.inputs {
            if let Err(error) = process_input(input, &mut session, &settings, &mut text_lines) {
                log::error!("{error:#}");
                failures += 1;
            }
            progress.input_completed(&input.to_string());
        }
        progress.finish();

        log::info!(
            "Processed {} line(s) from {} input(s)",
            session.lines(),
            resolution.inputs.len()
        );

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        let mut formatter: Box<dyn OutputFormatter> = match settings.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, settings.show)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, settings.show)),
        };

        for line in &text_lines {
            formatter.format_text_line(line)?;
        }
        formatter.format_report(&session.report())?;
        formatter.finish()?;

        if failures == 0 {
            Ok(RunStatus::Success)
        } else {
            Ok(RunStatus::InputFailures(failures))
        }
    }

    /// Merge configuration file defaults with command-line flags
    pub fn settings(&self, file: &CliConfig) -> Result<Settings> {
        let convert_codes = format!(
            "{}{}",
            file.analysis.convert,
            self.convert.as_deref().unwrap_or_default()
        );
        let discard_codes = format!(
            "{}{}",
            file.analysis.discard,
            self.discard.as_deref().unwrap_or_default()
        );

        let partial = match (self.partial, file.analysis.partial.as_deref()) {
            (Some(policy), _) => policy,
            (None, Some(text)) => text
                .parse()
                .map_err(|e| CliError::ConfigError(format!("{e}")))?,
            (None, None) => PartialPolicy::default(),
        };

        let show = ShowOptions {
            text: self.text || file.output.text,
            ngrams: !self.quiet && file.output.ngrams,
            summary: self.summary || file.output.summary,
        };

        let window = if self.block || file.analysis.block {
            WindowMode::FixedBlock
        } else {
            WindowMode::Sliding
        };

        let analysis = Config::builder()
            .conversions(Conversions::from_codes(&convert_codes).map_err(config_error)?)
            .discards(Discards::from_codes(&discard_codes).map_err(config_error)?)
            .length(
                self.length
                    .or(file.analysis.length)
                    .unwrap_or(ngc_core::config::defaults::LENGTH),
            )
            .window(window)
            .word_boundary(self.word || file.analysis.word)
            .partial(partial)
            .summary(show.summary)
            .build()
            .map_err(config_error)?;

        Ok(Settings {
            analysis,
            show,
            format: self.format.or(file.output.format).unwrap_or_default(),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let debug = self.debug || env::var_os(DEBUG_ENV).is_some();
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level(self.verbose, debug)),
        )
        .try_init();
    }
}

/// Environment variable whose presence turns debug logging on
pub const DEBUG_ENV: &str = "NGC_DEBUG";

fn log_level(verbose: u8, debug: bool) -> &'static str {
    match (verbose, debug) {
        (0, false) => "warn",
        (1, false) => "info",
        (0..=2, _) => "debug",
        _ => "trace",
    }
}

fn config_error(error: ngc_core::ConfigError) -> CliError {
    CliError::ConfigError(error.to_string())
}

fn process_input(
    input: &Input,
    session: &mut AnalysisSession,
    settings: &Settings,
    text_lines: &mut Vec<String>,
) -> Result<()> {
    log::debug!("Processing {input}");
    let reader = LineReader::open(input)?;
    let keep_text = settings.show.text;

    let lines = LineReader::for_each_line(reader, |line| {
        let transformed = session.process_line(line);
        if keep_text {
            text_lines.push(transformed);
        }
    })
    .map_err(|error| CliError::ReadError {
        input: input.to_string(),
        reason: error.to_string(),
    })?;

    log::debug!("Read {lines} line(s) from {input}");
    Ok(())
}
