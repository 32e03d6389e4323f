use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use portfolio_core::{Profile, ProfileDraft, ProfileError};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const ENV_GITHUB: &str = "PORTFOLIO_GITHUB";
const ENV_LINKEDIN: &str = "PORTFOLIO_LINKEDIN";
const ENV_EMAIL: &str = "PORTFOLIO_EMAIL";

#[derive(Debug, Error)]
enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    profile: Profile,
}

impl UiApp for DesktopApp {
    fn profile(&self) -> Profile {
        self.profile.clone()
    }
}

#[derive(Debug)]
enum Command {
    Launch(Profile),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--github <user>] [--linkedin <url>] [--email <addr> | --no-email]");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {ENV_GITHUB}, {ENV_LINKEDIN}, {ENV_EMAIL}");
    eprintln!("  RUST_LOG (default: info)");
}

/// Flags win over environment values, which win over the built-in profile.
fn parse_command(
    args: impl IntoIterator<Item = String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Command, ArgsError> {
    let mut draft = ProfileDraft::default();
    if let Some(github) = env(ENV_GITHUB) {
        draft.github_username = github;
    }
    if let Some(linkedin) = env(ENV_LINKEDIN) {
        draft.linkedin_url = linkedin;
    }
    if let Some(email) = env(ENV_EMAIL) {
        draft.email = Some(email);
    }

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--github" => draft.github_username = require_value(&mut args, "--github")?,
            "--linkedin" => draft.linkedin_url = require_value(&mut args, "--linkedin")?,
            "--email" => draft.email = Some(require_value(&mut args, "--email")?),
            "--no-email" => draft.email = None,
            "--help" | "-h" => return Ok(Command::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(Command::Launch(draft.validate()?))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let command = parse_command(std::env::args().skip(1), |key| std::env::var(key).ok())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    let profile = match command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Launch(profile) => profile,
    };

    let title = profile.site_title();
    info!(owner = profile.owner_name(), github = profile.github_username(), "launching portfolio");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { profile });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
