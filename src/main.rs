use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use termfolio::animate::TypingConfig;
use termfolio::app::{self, Options};
use termfolio::content::Portfolio;
use termfolio::theme::{preset, preset_names, ThemeMode};

/// A single-page personal portfolio for the terminal.
#[derive(Debug, Parser)]
#[command(name = "termfolio", version, about)]
struct Cli {
    /// Portfolio content file (TOML). Defaults to the built-in document.
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Theme preset name.
    #[arg(long, default_value = "midnight")]
    theme: String,

    /// Start in light mode instead of dark.
    #[arg(long)]
    light: bool,

    /// Milliseconds between typed characters in the banner.
    #[arg(long, default_value_t = 90)]
    type_ms: u64,

    /// Milliseconds between deleted characters in the banner.
    #[arg(long, default_value_t = 45)]
    delete_ms: u64,

    /// Background effect preset name.
    #[arg(long, default_value = "starfield")]
    fx: String,

    /// Disable the background effect layer.
    #[arg(long)]
    no_effects: bool,

    /// Seed for the background effect, for a reproducible field.
    #[arg(long)]
    seed: Option<u64>,

    /// List available theme presets and exit.
    #[arg(long)]
    list_themes: bool,

    /// List available background effects and exit.
    #[arg(long)]
    list_effects: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.list_themes {
        for name in preset_names() {
            println!("{name}");
        }
        return Ok(());
    }
    if cli.list_effects {
        for name in termfolio::fx::preset_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let portfolio = match &cli.content {
        Some(path) => Portfolio::load(path)
            .with_context(|| format!("loading portfolio content from {}", path.display()))?,
        None => Portfolio::embedded(),
    };

    let theme = preset(&cli.theme)
        .with_context(|| format!("unknown theme {:?} (try --list-themes)", cli.theme))?;

    let mode = if cli.light {
        ThemeMode::Light
    } else {
        ThemeMode::Dark
    };

    let effect = (!cli.no_effects).then(|| cli.fx.clone());
    let seed = cli.seed.unwrap_or_else(wall_clock_seed);

    let options = Options {
        portfolio,
        theme,
        mode,
        typing: TypingConfig {
            type_ms: cli.type_ms,
            delete_ms: cli.delete_ms,
        },
        effect,
        seed,
    };

    app::run(options).context("running the portfolio")?;
    Ok(())
}

/// Fallback seed when none is given. The RNG only drives the cosmetic
/// particle layer, so wall-clock entropy is plenty.
fn wall_clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0xdead_beef)
}
