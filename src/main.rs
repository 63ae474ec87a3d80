use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use profile_lookup::config::Config;
use profile_lookup::data::{DataPaths, ProfileData};
use profile_lookup::logging::{init_tracing, LogSink};
use profile_lookup::ui::app::App;
use profile_lookup::ui::layout::Viewport;
use profile_lookup::ui::print::render_dialog_text;
use profile_lookup::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "profile-lookup", version, about = "Show a player's profile card in the terminal")]
struct Cli {
    /// Roster JSON: operator id -> operator record
    #[arg(long, value_name = "FILE")]
    roster: PathBuf,

    /// Account profile JSON
    #[arg(long, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Social handles JSON
    #[arg(long, value_name = "FILE")]
    social: Option<PathBuf>,

    /// Operator reference table JSON (skills per operator)
    #[arg(long, value_name = "FILE")]
    operators: Option<PathBuf>,

    /// Config file (default: <config dir>/profile-lookup/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start with the profile dialog open
    #[arg(long)]
    open: bool,

    /// Print the dialog as plain text and exit
    #[arg(long, conflicts_with = "open")]
    print: bool,
}

impl Cli {
    fn data_paths(&self) -> DataPaths {
        DataPaths {
            roster: self.roster.clone(),
            profile: self.profile.clone(),
            social: self.social.clone(),
            operators: self.operators.clone(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }?;

    init_tracing(&config.logging, LogSink::for_mode(&config.logging, !cli.print))
        .context("Failed to open log file")?;

    let data = ProfileData::load(&cli.data_paths())?;
    let mut app = App::new(data, config.display.clone());

    if cli.print {
        let width = config.display.max_width;
        let viewport = Viewport::for_width(width, config.display.narrow_breakpoint);
        print!(
            "{}",
            render_dialog_text(app.view(), app.assets(), width, viewport)
        );
        return Ok(());
    }

    if cli.open {
        app.open_profile();
    }
    runtime::run(app)?;
    Ok(())
}
