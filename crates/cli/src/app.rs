use crate::command;
use anyhow::Result;
use clap::Parser;
use quill_config::Settings;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub enum RunCmd {
    /// Print the word-count status line of a document.
    #[clap(name = "stats")]
    Stats(command::stats::Stats),
    /// Print the heading outline of a document.
    #[clap(name = "outline")]
    Outline(command::outline::Outline),
    /// Render a markdown document to HTML.
    #[clap(name = "render")]
    Render(command::render::Render),
    /// Generate or update the table of contents of a markdown document.
    #[clap(name = "toc")]
    Toc(command::toc::Toc),
    /// Print the full analysis of a document as a JSON host message.
    #[clap(name = "analyze")]
    Analyze(command::analyze::Analyze),
    /// Re-analyze a document on every change.
    #[clap(name = "watch")]
    Watch(command::watch::Watch),
    /// Inspect or initialize the settings file.
    #[clap(name = "settings", subcommand)]
    Settings(command::settings::SettingsCmd),
}

/// Quill CLI arguments.
#[derive(Parser, Debug, Default)]
pub struct Args {
    /// Enable the logging system, writing to the given file.
    #[clap(long)]
    pub log: Option<PathBuf>,

    /// Specify the path of the settings file.
    #[clap(long)]
    pub settings: Option<PathBuf>,
}

impl Args {
    /// The settings file in use: `--settings`, or the platform default.
    pub fn settings_path(&self) -> Result<PathBuf> {
        match &self.settings {
            Some(path) => Ok(path.clone()),
            None => Ok(quill_config::default_settings_path()?),
        }
    }
}

impl RunCmd {
    pub fn run(self, args: Args) -> Result<()> {
        let settings_path = args.settings_path()?;
        let (settings, settings_err) = Settings::load_or_default(&settings_path);

        // Held until the command returns so that buffered log lines are flushed.
        let _guard = crate::init_logging(args.log.as_deref(), &settings.log)?;

        if let Some(err) = settings_err {
            tracing::error!(?err, "Error occurred in the settings file");
        }

        tracing::debug!(path = %settings_path.display(), "Loaded settings");

        match self {
            Self::Stats(stats) => stats.run(&settings),
            Self::Outline(outline) => outline.run(),
            Self::Render(render) => render.run(),
            Self::Toc(toc) => toc.run(),
            Self::Analyze(analyze) => analyze.run(&settings),
            Self::Watch(watch) => watch.run(&settings),
            Self::Settings(cmd) => cmd.run(&settings, &settings_path),
        }
    }
}
