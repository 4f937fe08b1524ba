use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{Chapter, ChapterId, Difficulty, Language};
use services::{
    AppServices, ChapterService, ChapterStats, Clock, ConfigError, DashboardService,
    LeaderboardService, QuizConfig, QuizFlowService,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as log_fmt, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidValue { flag: &'static str, raw: String },
    InvalidConfig(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidValue { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidConfig(err) => write!(f, "invalid configuration: {err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_value<T: std::str::FromStr>(raw: String, flag: &'static str) -> Result<T, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidValue { flag, raw })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn quiz(&self) -> Arc<QuizFlowService> {
        self.services.quiz()
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        self.services.dashboard()
    }

    fn leaderboard(&self) -> Arc<LeaderboardService> {
        self.services.leaderboard()
    }

    fn chapters(&self) -> Arc<ChapterService> {
        self.services.chapters()
    }

    fn history_limit(&self) -> usize {
        self.services.config().history_limit()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--batch-size <n>] [--time-limit <secs>] [--auto-submit] [--history-limit <n>]");
    eprintln!("  cargo run -p app -- bank [--chapter <id>] [--difficulty easy|medium|hard] [--language en|hi]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --batch-size 50");
    eprintln!("  --time-limit 1800");
    eprintln!("  --history-limit 5");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BATCH_SIZE, QUIZ_TIME_LIMIT_SECS, QUIZ_AUTO_SUBMIT, QUIZ_HISTORY_LIMIT, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Bank,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "bank" => Some(Self::Bank),
            _ => None,
        }
    }
}

/// Narrows the `bank` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BankFilter {
    chapter: Option<ChapterId>,
    difficulty: Option<Difficulty>,
    language: Language,
}

impl Default for BankFilter {
    fn default() -> Self {
        Self {
            chapter: None,
            difficulty: None,
            language: Language::English,
        }
    }
}

impl BankFilter {
    fn admits(&self, chapter: &Chapter, stats: &ChapterStats) -> bool {
        let chapter_matches = self.chapter.as_ref().is_none_or(|id| chapter.id() == id);
        let difficulty_matches = self.difficulty.is_none_or(|wanted| {
            stats
                .pool_by_difficulty
                .iter()
                .any(|(level, count)| *level == wanted && *count > 0)
        });
        chapter_matches && difficulty_matches
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    batch_size: usize,
    time_limit_secs: u32,
    auto_submit: bool,
    history_limit: usize,
    bank: BankFilter,
}

impl Default for Args {
    fn default() -> Self {
        let config = QuizConfig::default();
        Self {
            batch_size: config.batch_size(),
            time_limit_secs: config.time_limit_secs(),
            auto_submit: config.auto_submit_on_expiry(),
            history_limit: config.history_limit(),
            bank: BankFilter::default(),
        }
    }
}

impl Args {
    /// Defaults overridden by `QUIZ_*` variables; unparsable values are ignored.
    fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let number = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());
        Self {
            batch_size: number("QUIZ_BATCH_SIZE")
                .and_then(|v| usize::try_from(v).ok())
                .unwrap_or(defaults.batch_size),
            time_limit_secs: number("QUIZ_TIME_LIMIT_SECS")
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(defaults.time_limit_secs),
            auto_submit: lookup("QUIZ_AUTO_SUBMIT")
                .map_or(defaults.auto_submit, |v| parse_flag(&v)),
            history_limit: number("QUIZ_HISTORY_LIMIT")
                .and_then(|v| usize::try_from(v).ok())
                .unwrap_or(defaults.history_limit),
            bank: defaults.bank,
        }
    }

    fn parse(mut self, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--batch-size" => {
                    let value = require_value(args, "--batch-size")?;
                    self.batch_size = parse_value(value, "--batch-size")?;
                }
                "--time-limit" => {
                    let value = require_value(args, "--time-limit")?;
                    self.time_limit_secs = parse_value(value, "--time-limit")?;
                }
                "--auto-submit" => self.auto_submit = true,
                "--history-limit" => {
                    let value = require_value(args, "--history-limit")?;
                    self.history_limit = parse_value(value, "--history-limit")?;
                }
                "--chapter" => {
                    let value = require_value(args, "--chapter")?;
                    self.bank.chapter = Some(parse_value(value, "--chapter")?);
                }
                "--difficulty" => {
                    let value = require_value(args, "--difficulty")?;
                    self.bank.difficulty = Some(parse_value(value, "--difficulty")?);
                }
                "--language" => {
                    let value = require_value(args, "--language")?;
                    self.bank.language = parse_value(value, "--language")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(self)
    }

    fn config(&self) -> Result<QuizConfig, ArgsError> {
        QuizConfig::new(
            self.batch_size,
            self.time_limit_secs,
            self.auto_submit,
            self.history_limit,
        )
        .map_err(ArgsError::InvalidConfig)
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = log_fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

fn print_bank(
    services: &AppServices,
    filter: &BankFilter,
) -> Result<(), Box<dyn std::error::Error>> {
    let chapters = services.chapters();
    let mut listed = 0;
    println!(
        "{:<20} {:>5} {:>5} {:>7} {:>5}  name",
        "chapter", "pool", "easy", "medium", "hard"
    );
    for chapter in chapters.list_chapters()? {
        let stats = chapters.stats(&chapter)?;
        if !filter.admits(&chapter, &stats) {
            continue;
        }
        listed += 1;
        let count = |difficulty: Difficulty| {
            stats
                .pool_by_difficulty
                .iter()
                .find(|(d, _)| *d == difficulty)
                .map_or(0, |(_, n)| *n)
        };
        println!(
            "{:<20} {:>5} {:>5} {:>7} {:>5}  {}",
            chapter.id().as_str(),
            stats.pool_size,
            count(Difficulty::Easy),
            count(Difficulty::Medium),
            count(Difficulty::Hard),
            chapter.name_in(filter.language)
        );
    }
    if listed == 0 {
        println!("no chapters match");
    }
    println!("batch size: {}", services.config().batch_size());
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let args = Args::from_env(|key| std::env::var(key).ok())
        .parse(&mut iter)
        .map_err(report_usage)?;
    let config = args.config().map_err(report_usage)?;

    init_tracing();
    let services = AppServices::new_mock(Clock::default_clock(), config)?;

    match cmd {
        Command::Ui => {
            info!(
                batch_size = config.batch_size(),
                time_limit_secs = config.time_limit_secs(),
                auto_submit = config.auto_submit_on_expiry(),
                "launching quiz trainer"
            );
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("CCC Quiz World")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Bank => print_bank(&services, &args.bank),
    }
}

fn report_usage(err: ArgsError) -> ArgsError {
    eprintln!("{err}");
    print_usage();
    err
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_clock;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let owned: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| owned.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }

    fn argv(items: &[&str]) -> impl Iterator<Item = String> {
        items
            .iter()
            .map(|s| (*s).to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn defaults_without_env_or_flags() {
        let args = Args::from_env(env(&[])).parse(&mut argv(&[])).unwrap();
        assert_eq!(args.config().unwrap(), QuizConfig::default());
    }

    #[test]
    fn env_values_apply_and_bad_ones_are_ignored() {
        let args = Args::from_env(env(&[
            ("QUIZ_BATCH_SIZE", "20"),
            ("QUIZ_TIME_LIMIT_SECS", "soon"),
            ("QUIZ_AUTO_SUBMIT", "true"),
        ]));
        assert_eq!(args.batch_size, 20);
        assert_eq!(args.time_limit_secs, 1800);
        assert!(args.auto_submit);
    }

    #[test]
    fn flags_override_env() {
        let args = Args::from_env(env(&[("QUIZ_BATCH_SIZE", "20")]))
            .parse(&mut argv(&["--batch-size", "10", "--time-limit", "600", "--auto-submit"]))
            .unwrap();
        let config = args.config().unwrap();
        assert_eq!(config.batch_size(), 10);
        assert_eq!(config.time_limit_secs(), 600);
        assert!(config.auto_submit_on_expiry());
    }

    #[test]
    fn rejects_bad_flags() {
        let err = Args::default().parse(&mut argv(&["--batch-size"])).unwrap_err();
        assert!(matches!(err, ArgsError::MissingValue { flag: "--batch-size" }));

        let err = Args::default()
            .parse(&mut argv(&["--history-limit", "many"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid --history-limit value: many");

        let err = Args::default().parse(&mut argv(&["--db"])).unwrap_err();
        assert!(matches!(err, ArgsError::UnknownArg(arg) if arg == "--db"));
    }

    #[test]
    fn zero_batch_is_invalid_config() {
        let err = Args::default()
            .parse(&mut argv(&["--batch-size", "0"]))
            .and_then(|args| args.config())
            .unwrap_err();
        assert!(matches!(err, ArgsError::InvalidConfig(ConfigError::ZeroBatchSize)));
    }

    #[test]
    fn bank_filters_parse_through_domain_types() {
        let args = Args::default()
            .parse(&mut argv(&["--chapter", "spreadsheet", "--difficulty", "HARD", "--language", "hi"]))
            .unwrap();
        assert_eq!(args.bank.chapter, Some(ChapterId::new("spreadsheet")));
        assert_eq!(args.bank.difficulty, Some(Difficulty::Hard));
        assert_eq!(args.bank.language, Language::Hindi);

        let err = Args::default()
            .parse(&mut argv(&["--difficulty", "extreme"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid --difficulty value: extreme");

        let err = Args::default().parse(&mut argv(&["--chapter", "  "])).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidValue { flag: "--chapter", .. }));
    }

    #[test]
    fn bank_filter_narrows_chapters() {
        let services = AppServices::new_mock(fixed_clock(), QuizConfig::default()).unwrap();
        let chapters = services.chapters();
        let spreadsheet = chapters.chapter(&ChapterId::new("spreadsheet")).unwrap().unwrap();
        let intro = chapters.chapter(&ChapterId::new("intro-computer")).unwrap().unwrap();
        let spreadsheet_stats = chapters.stats(&spreadsheet).unwrap();
        let intro_stats = chapters.stats(&intro).unwrap();

        let everything = BankFilter::default();
        assert!(everything.admits(&spreadsheet, &spreadsheet_stats));
        assert!(everything.admits(&intro, &intro_stats));

        let only_spreadsheet = BankFilter {
            chapter: Some(ChapterId::new("spreadsheet")),
            ..BankFilter::default()
        };
        assert!(only_spreadsheet.admits(&spreadsheet, &spreadsheet_stats));
        assert!(!only_spreadsheet.admits(&intro, &intro_stats));

        let hard = BankFilter {
            difficulty: Some(Difficulty::Hard),
            ..BankFilter::default()
        };
        assert!(hard.admits(&spreadsheet, &spreadsheet_stats));
    }

    #[test]
    fn parse_flag_accepts_common_truthy_values() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" Yes "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
    }
}
