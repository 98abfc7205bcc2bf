use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use quill_config::Settings;
use std::io::Write;
use std::path::Path;

/// Inspect or initialize the settings file.
#[derive(Subcommand, Debug, Clone)]
pub enum SettingsCmd {
    Show(Show),
    Init(Init),
}

impl SettingsCmd {
    pub fn run(&self, settings: &Settings, settings_path: &Path) -> Result<()> {
        match self {
            Self::Show(show) => show.run(settings, settings_path),
            Self::Init(init) => init.run(settings_path),
        }
    }
}

/// Print the effective settings and where they are read from.
#[derive(Parser, Debug, Clone)]
pub struct Show {}

impl Show {
    fn run(&self, settings: &Settings, settings_path: &Path) -> Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();

        writeln!(lock, "Settings file:")?;
        writeln!(lock, "\t{}\n", settings_path.display())?;
        writeln!(lock, "{}", serde_json::to_string_pretty(settings)?)?;

        Ok(())
    }
}

/// Write the default settings to the settings file.
#[derive(Parser, Debug, Clone)]
pub struct Init {
    /// Overwrite an existing settings file.
    #[clap(long)]
    force: bool,
}

impl Init {
    fn run(&self, settings_path: &Path) -> Result<()> {
        if settings_path.exists() && !self.force {
            return Err(anyhow!(
                "{} already exists, pass --force to overwrite it",
                settings_path.display()
            ));
        }

        Settings::default().save(settings_path)?;

        writeln!(
            std::io::stdout().lock(),
            "Wrote default settings to {}",
            settings_path.display()
        )?;

        Ok(())
    }
}
