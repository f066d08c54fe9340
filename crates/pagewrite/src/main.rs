//! pagewrite CLI - rewrites the ChatSQL landing page component.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use pagewrite_core::{FileOverwriter, Target};

#[derive(Parser)]
#[command(name = "pagewrite")]
#[command(about = "Overwrite the ChatSQL landing page with its bundled source")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    run(Target::landing_page())
}

fn run(target: Target) -> Result<()> {
    let overwriter = FileOverwriter::new(target);

    let result = overwriter.overwrite().with_context(|| {
        format!(
            "Failed to overwrite {}",
            overwriter.target().destination().display()
        )
    })?;

    tracing::info!(
        "Wrote {} bytes to {}",
        result.bytes,
        result.destination.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_verbose_flag() {
        let cli = Cli::try_parse_from(["pagewrite", "--verbose"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["pagewrite"]).unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn rejects_destination_argument() {
        assert!(Cli::try_parse_from(["pagewrite", "/tmp/other.tsx"]).is_err());
    }

    #[test]
    fn run_writes_target() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("out.txt");

        run(Target::new(&out, "hello world")).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "hello world");
    }

    #[test]
    fn run_reports_destination_on_failure() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("missing").join("out.txt");

        let err = run(Target::new(&out, "hello world")).unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to overwrite"));
        assert!(err
            .chain()
            .any(|e| e.downcast_ref::<std::io::Error>().is_some()));
    }
}
