use clap::Parser;
use cli::{Args, RunCmd};

#[derive(Parser, Debug)]
pub enum Cmd {
    /// Display the current version.
    #[clap(name = "version")]
    Version,

    /// Run the quill.
    #[clap(flatten)]
    Run(Box<RunCmd>),
}

#[derive(Parser, Debug)]
#[clap(name = "quill", disable_version_flag = true)]
pub struct Quill {
    #[clap(flatten)]
    pub args: Args,

    #[clap(subcommand)]
    pub cmd: Cmd,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let quill = Quill::parse();

    match quill.cmd {
        Cmd::Version => {
            println!(
                "version {}, built for {}.",
                env!("CARGO_PKG_VERSION"),
                std::env::consts::ARCH
            );
        }
        Cmd::Run(run_cmd) => {
            if let Err(e) = run_cmd.run(quill.args) {
                eprintln!("error: {e:?}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_parse_global_args() {
        let quill = Quill::try_parse_from([
            "quill",
            "--settings",
            "/tmp/settings.json",
            "stats",
            "notes.md",
            "--json",
        ])
        .unwrap();

        assert_eq!(
            quill.args.settings.as_deref(),
            Some(std::path::Path::new("/tmp/settings.json"))
        );
        assert!(matches!(quill.cmd, Cmd::Run(cmd) if matches!(*cmd, RunCmd::Stats(_))));
    }

    #[test]
    fn test_failed_command_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = dir.path().join("settings.json");
        let missing = dir.path().join("missing.md");

        let quill = Quill::try_parse_from([
            OsStr::new("quill"),
            OsStr::new("--settings"),
            settings.as_os_str(),
            OsStr::new("stats"),
            missing.as_os_str(),
        ])
        .unwrap();
        let Cmd::Run(run_cmd) = quill.cmd else {
            panic!("Expected a run command");
        };

        let err = run_cmd.run(quill.args).unwrap_err();
        assert!(format!("{err:?}").contains("missing.md"));
    }

    #[test]
    fn test_parse_subcommands() {
        for args in [
            vec!["quill", "version"],
            vec!["quill", "outline", "a.md"],
            vec!["quill", "render", "a.md", "-o", "a.html"],
            vec!["quill", "toc", "a.md", "--indent", "2", "--max-level", "3", "--write"],
            vec!["quill", "analyze", "a.txt"],
            vec!["quill", "watch", "a.md"],
            vec!["quill", "settings", "init", "--force"],
            vec!["quill", "--log", "/tmp/quill.log", "settings", "show"],
        ] {
            assert!(Quill::try_parse_from(&args).is_ok(), "failed to parse {args:?}");
        }
    }
}
