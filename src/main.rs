mod input;
mod model;
mod pipeline;
mod report;
mod tracing;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use ::tracing::{debug, error, info, warn};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use crate::input::script::{SessionCommand, parse_command};
use crate::input::{InputError, coerce_score, load_seed_history};
use crate::model::profile::{DEFAULT_CATEGORY_SCORE, DEFAULT_QUESTION_COUNT, ScoringProfile};
use crate::model::scores::CategoryScores;
use crate::pipeline::session::{CalculatorSession, SubmitOutcome};
use crate::report::SessionReport;
use crate::report::json::render_report_json;
use crate::report::text::render_report_text;

#[derive(Parser, Debug)]
#[command(name = "certcalc")]
#[command(about = "Weighted certification score calculator with attempt history", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one attempt from the four category percentages
    Score {
        /// Developer Fundamentals percentage
        #[arg(
            long,
            default_value_t = DEFAULT_CATEGORY_SCORE,
            value_parser = coerce_score,
            allow_negative_numbers = true
        )]
        dev_fundamentals: f64,

        /// Process Automation and Logic percentage
        #[arg(
            long,
            default_value_t = DEFAULT_CATEGORY_SCORE,
            value_parser = coerce_score,
            allow_negative_numbers = true
        )]
        process_automation: f64,

        /// User Interface percentage
        #[arg(
            long,
            default_value_t = DEFAULT_CATEGORY_SCORE,
            value_parser = coerce_score,
            allow_negative_numbers = true
        )]
        user_interface: f64,

        /// Testing, Debugging, and Deployment percentage
        #[arg(
            long,
            default_value_t = DEFAULT_CATEGORY_SCORE,
            value_parser = coerce_score,
            allow_negative_numbers = true
        )]
        test_debug_deploy: f64,

        #[command(flatten)]
        common: CommonArgs,
    },
    /// Run a scripted session (set/submit/delete/show), one command per line
    Session {
        /// Script file (defaults to stdin)
        #[arg(long)]
        script: Option<PathBuf>,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    /// Number of questions on the exam
    #[arg(long, default_value_t = DEFAULT_QUESTION_COUNT)]
    questions: i64,

    /// JSON file with the starting attempt history
    #[arg(long, conflicts_with = "no_seed")]
    seed: Option<PathBuf>,

    /// Start with an empty attempt history
    #[arg(long)]
    no_seed: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to render JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings shared by both subcommands.
#[derive(Debug, Clone)]
struct SessionConfig {
    profile: ScoringProfile,
    seed: SeedSource,
    format: ReportFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SeedSource {
    Default,
    Empty,
    File(PathBuf),
}

impl SessionConfig {
    fn from_args(common: &CommonArgs) -> Self {
        let seed = match (&common.seed, common.no_seed) {
            (Some(path), _) => SeedSource::File(path.clone()),
            (None, true) => SeedSource::Empty,
            (None, false) => SeedSource::Default,
        };
        Self {
            profile: ScoringProfile::platform_dev_v1().with_question_count(common.questions),
            seed,
            format: common.format,
        }
    }

    fn build_session(&self) -> Result<CalculatorSession, InputError> {
        let profile = self.profile.clone();
        let session = match &self.seed {
            SeedSource::Default => CalculatorSession::new(profile),
            SeedSource::Empty => CalculatorSession::with_seed(profile, Vec::new()),
            SeedSource::File(path) => {
                CalculatorSession::with_seed(profile, load_seed_history(path)?)
            }
        };
        info!(
            attempts = session.history().len(),
            questions = self.profile.question_count,
            "session started"
        );
        Ok(session)
    }
}

fn main() {
    let cli = Cli::parse();
    crate::tracing::init(cli.verbose);
    if let Err(err) = run(cli) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Score {
            dev_fundamentals,
            process_automation,
            user_interface,
            test_debug_deploy,
            common,
        } => {
            let config = SessionConfig::from_args(&common);
            let scores = CategoryScores::new(
                dev_fundamentals,
                process_automation,
                user_interface,
                test_debug_deploy,
            );
            let outcome = run_score(&config, scores, &mut out)?;
            debug!(
                id = outcome.attempt.id,
                verdict = outcome.verdict.as_str(),
                "score run finished"
            );
        }
        Commands::Session { script, common } => {
            let config = SessionConfig::from_args(&common);
            let mut session = config.build_session()?;
            match script {
                Some(path) => {
                    let reader = open_script(&path)?;
                    run_session_script(&mut session, reader, &mut out, config.format)?;
                }
                None => {
                    let stdin = io::stdin();
                    run_session_script(&mut session, stdin.lock(), &mut out, config.format)?;
                }
            }
            write_report(&mut out, &session, config.format)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// One submit from fixed category scores, then the report.
fn run_score<W: Write>(
    config: &SessionConfig,
    scores: CategoryScores,
    out: &mut W,
) -> Result<SubmitOutcome, AppError> {
    let mut session = config.build_session()?;
    session.set_scores(scores);
    let outcome = session.submit();
    write_report(out, &session, config.format)?;
    Ok(outcome)
}

fn open_script(path: &Path) -> Result<BufReader<File>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Feeds script lines to the session. Bad lines are logged and skipped.
fn run_session_script<R: BufRead, W: Write>(
    session: &mut CalculatorSession,
    reader: R,
    out: &mut W,
    format: ReportFormat,
) -> Result<(), AppError> {
    let mut shown_revision = None;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                warn!(line = line_no, "{err}");
                continue;
            }
        };
        debug!(line = line_no, ?command, "applying command");

        match command {
            SessionCommand::Set { field, value } => {
                if let Err(err) = session.set_category(&field, &value) {
                    warn!(line = line_no, "{err}");
                }
            }
            SessionCommand::Submit => {
                session.submit();
            }
            SessionCommand::Delete(id) => {
                session.delete_attempt(id);
            }
            SessionCommand::Show => {
                let revision = session.history().revision();
                if shown_revision == Some(revision) {
                    debug!(line = line_no, revision, "attempt history unchanged since last show");
                }
                shown_revision = Some(revision);
                debug!(
                    line = line_no,
                    attempts = session.history().len(),
                    "rendering report"
                );
                write_report(out, session, format)?;
            }
        }
    }
    Ok(())
}

fn write_report<W: Write>(
    out: &mut W,
    session: &CalculatorSession,
    format: ReportFormat,
) -> Result<(), AppError> {
    let report = SessionReport::from_session(session);
    let rendered = match format {
        ReportFormat::Text => render_report_text(&report),
        ReportFormat::Json => {
            let mut json = render_report_json(&report)?;
            json.push('\n');
            json
        }
    };
    out.write_all(rendered.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
