use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use academy_core::XpPolicy;
use content::{ContentBundle, ContentSources};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, SessionSettings};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidXp { flag: &'static str, raw: String },
    EmptyLearner,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidXp { flag, raw } => {
                write!(f, "invalid {flag} value: {raw} (expected a whole number)")
            }
            ArgsError::EmptyLearner => write!(f, "--learner must not be blank"),
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

fn parse_xp(flag: &'static str, raw: &str) -> Result<u32, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidXp {
        flag,
        raw: raw.to_string(),
    })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- ui    [--curriculum <path>] [--library <path>] [--learner <name>]"
    );
    eprintln!("                            [--participation-xp <n>] [--mastery-xp <n>]");
    eprintln!("  cargo run -p app -- check [--curriculum <path>] [--library <path>]");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  embedded curriculum and library");
    eprintln!("  --learner \"John Student\"");
    eprintln!("  --participation-xp {}", XpPolicy::DEFAULT_PARTICIPATION_AWARD);
    eprintln!("  --mastery-xp {}", XpPolicy::DEFAULT_MASTERY_AWARD);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ACADEMY_CURRICULUM, ACADEMY_LIBRARY, ACADEMY_LEARNER_NAME,");
    eprintln!("  ACADEMY_PARTICIPATION_XP, ACADEMY_MASTERY_XP, ACADEMY_LOG,");
    eprintln!("  ACADEMY_AI_API_KEY, ACADEMY_AI_BASE_URL, ACADEMY_AI_MODEL, ACADEMY_AI_IMAGE_MODEL");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    sources: ContentSources,
    settings: SessionSettings,
}

impl Args {
    /// Flags win over `env`, which wins over the built-in defaults.
    fn parse(
        command: Command,
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut sources = ContentSources {
            curriculum: env("ACADEMY_CURRICULUM").map(PathBuf::from),
            library: env("ACADEMY_LIBRARY").map(PathBuf::from),
        };
        let mut settings = SessionSettings::default();
        if let Some(name) = env("ACADEMY_LEARNER_NAME").filter(|name| !name.trim().is_empty()) {
            settings.learner = name.trim().to_string();
        }
        if let Some(raw) = env("ACADEMY_PARTICIPATION_XP") {
            settings.policy.participation_award = parse_xp("ACADEMY_PARTICIPATION_XP", &raw)?;
        }
        if let Some(raw) = env("ACADEMY_MASTERY_XP") {
            settings.policy.mastery_award = parse_xp("ACADEMY_MASTERY_XP", &raw)?;
        }

        while let Some(arg) = args.next() {
            match (command, arg.as_str()) {
                (_, "--curriculum") => {
                    sources.curriculum = Some(require_value(args, "--curriculum")?.into());
                }
                (_, "--library") => {
                    sources.library = Some(require_value(args, "--library")?.into());
                }
                (Command::Ui, "--learner") => {
                    let value = require_value(args, "--learner")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyLearner);
                    }
                    settings.learner = value.trim().to_string();
                }
                (Command::Ui, "--participation-xp") => {
                    let value = require_value(args, "--participation-xp")?;
                    settings.policy.participation_award = parse_xp("--participation-xp", &value)?;
                }
                (Command::Ui, "--mastery-xp") => {
                    let value = require_value(args, "--mastery-xp")?;
                    settings.policy.mastery_award = parse_xp("--mastery-xp", &value)?;
                }
                (_, "--help" | "-h") => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { sources, settings })
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ACADEMY_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_summary(bundle: &ContentBundle) {
    println!("curriculum: {} modules", bundle.catalog.total_count());
    for (index, module) in bundle.catalog.modules().iter().enumerate() {
        println!(
            "  {}. {} [{}] lessons={} questions={}",
            index + 1,
            module.title(),
            module.id(),
            module.lessons().len(),
            module.quiz().questions().len(),
        );
    }
    let library = &bundle.library;
    println!(
        "library: {} prompts, {} tools, {} glossary terms, {} case studies",
        library.prompts.len(),
        library.toolkit.len(),
        library.glossary.len(),
        library.case_studies.len(),
    );
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
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
    let parsed = Args::parse(cmd, &mut iter, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();
    let bundle = content::load(&parsed.sources)?;

    match cmd {
        Command::Check => {
            print_summary(&bundle);
            Ok(())
        }
        Command::Ui => {
            info!(
                learner = %parsed.settings.learner,
                mastery_xp = parsed.settings.policy.mastery_award,
                participation_xp = parsed.settings.policy.participation_award,
                "launching academy"
            );
            let services = AppServices::from_env(bundle, parsed.settings, Clock::system());
            if !services.tools().enabled() {
                info!("ACADEMY_AI_API_KEY not set; generative tools disabled");
            }

            let app: Arc<dyn UiApp> = Arc::new(services);
            let context = build_app_context(&app);

            // Some tao setups default to always-on-top.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Vibe Academy")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
