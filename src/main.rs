//! Collision Odds entry point
//!
//! The two positional paths are accepted for caller compatibility and never read.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use collision_odds::{SimConfig, SimError, Simulation};

#[derive(Parser, Debug)]
#[command(
    name = "collision-odds",
    version,
    about = "Monte Carlo estimate of ego/agent collision probability"
)]
struct Cli {
    /// Corpus path (accepted, not read).
    corpus_path: Option<PathBuf>,

    /// Query path (accepted, not read).
    query_path: Option<PathBuf>,

    /// JSON file overriding the default run parameters.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// RNG seed; drawn from OS entropy when omitted.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Print the full result as JSON instead of the `odds=` line.
    #[arg(long)]
    json: bool,
}

fn run(cli: &Cli) -> Result<String, SimError> {
    for path in [&cli.corpus_path, &cli.query_path].into_iter().flatten() {
        log::debug!("Ignoring path argument {}", path.display());
    }

    let mut config = match &cli.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let sim = Simulation::new(config)?;
    let result = sim.run()?;
    if cli.json {
        Ok(serde_json::to_string_pretty(&result)?)
    } else {
        Ok(result.to_string())
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Collision Odds starting...");

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Simulation failed: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_positional_paths_are_collected() {
        let cli = Cli::try_parse_from(["collision-odds", "corpus.txt", "query.txt"]).unwrap();
        assert_eq!(cli.corpus_path, Some(PathBuf::from("corpus.txt")));
        assert_eq!(cli.query_path, Some(PathBuf::from("query.txt")));
        assert!(cli.config.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_paths_are_optional() {
        let cli = Cli::try_parse_from(["collision-odds"]).unwrap();
        assert!(cli.corpus_path.is_none());
        assert!(cli.query_path.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "collision-odds",
            "--seed",
            "42",
            "a",
            "--json",
            "--config",
            "run.json",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.config, Some(PathBuf::from("run.json")));
        assert_eq!(cli.corpus_path, Some(PathBuf::from("a")));
        assert!(cli.json);
    }

    #[test]
    fn test_equals_form() {
        let cli = Cli::try_parse_from(["collision-odds", "--seed=5", "--config=run.json"]).unwrap();
        assert_eq!(cli.seed, Some(5));
        assert_eq!(cli.config, Some(PathBuf::from("run.json")));
    }

    #[test]
    fn test_bad_flags() {
        let err = Cli::try_parse_from(["collision-odds", "--seed", "abc"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(Cli::try_parse_from(["collision-odds", "--seed"]).is_err());
        let err = Cli::try_parse_from(["collision-odds", "--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert!(Cli::try_parse_from(["collision-odds", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_help_and_version() {
        let err = Cli::try_parse_from(["collision-odds", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        let err = Cli::try_parse_from(["collision-odds", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_run_prints_odds_line() {
        let cli = Cli::try_parse_from(["collision-odds", "--seed", "5"]).unwrap();
        let output = run(&cli).unwrap();
        assert!(output.starts_with("odds= "), "{output}");
    }
}
