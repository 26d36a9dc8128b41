mod discover;
mod error;
mod experiment;
mod outputs;
mod rounds;
mod stats;

use std::path::PathBuf;

use clap::Parser;

use discover::{discover_pairs, RoundPair};
use error::EvalError;
use experiment::{EvalConfig, Experiment};
use outputs::Outputs;
use rounds::{aggregate_pair, load_round1_maxima};
use stats::summarize;

#[derive(Debug, Parser)]
#[command(name = "Throughput Results Aggregation")]
struct Args {
    #[arg(short, long)]
    experiment: Experiment,
    #[arg(short, long)]
    basefolder: PathBuf,
    #[arg(short, long, default_value = ".")]
    outdir: PathBuf,
    #[arg(short, long)]
    dry_run: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    tracing::info!("Arguments: {:?}", args);
    let Args {
        experiment,
        basefolder,
        outdir,
        dry_run,
    } = args;

    assert!(
        basefolder.is_dir(),
        "Base folder does not exist: {}",
        basefolder.display()
    );

    let config = EvalConfig {
        experiment,
        basefolder,
        outdir,
        dry_run,
    };
    if let Err(e) = run(&config) {
        tracing::error!("Aborting: {e}");
        std::process::exit(1);
    }
}

fn run(config: &EvalConfig) -> Result<(), EvalError> {
    let outputs = Outputs::new(config);
    outputs.init()?;

    for pair in discover_pairs(&config.basefolder) {
        if let Err(e) = process_pair(&pair, &outputs) {
            tracing::error!("Failed on {}", pair.round2.display());
            return Err(e);
        }
        tracing::info!("Processed {}", pair.round2.display());
    }
    Ok(())
}

fn process_pair(pair: &RoundPair, outputs: &Outputs) -> Result<(), EvalError> {
    if !pair.round1.exists() {
        return Err(EvalError::MissingPair(pair.round1.clone()));
    }

    let round1_maxima = load_round1_maxima(&pair.round1)?;
    tracing::debug!(
        "Round1 maxima for {}: {:?}",
        pair.round1.display(),
        round1_maxima
    );

    let (meta, samples) = aggregate_pair(&pair.round2, &round1_maxima)?;
    let summary = summarize(&samples)?;
    outputs.append(&meta, &summary, &samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    const ROUND1: &str = "\
Security,Threads,Node1,Node2,Node3,Total,Total
secured,4,sending,receiving,sending,3,5
secured,4,sending,receiving,sending,2,7
";

    const ROUND2: &str = "\
Security,Threads,Node1,Node2,Node3,Total
secured,4,sending,receiving,sending,1.0
secured,4,sending,receiving,sending,2.0
";

    fn config_for(dir: &Path, dry_run: bool) -> EvalConfig {
        EvalConfig {
            experiment: Experiment::Threads,
            basefolder: dir.join("results"),
            outdir: dir.to_path_buf(),
            dry_run,
        }
    }

    fn write_round_files(basefolder: &Path) {
        fs::create_dir_all(basefolder).unwrap();
        fs::write(basefolder.join("Log_16Nodes_Round1.csv"), ROUND1).unwrap();
        fs::write(basefolder.join("Log_16Nodes_Round2.csv"), ROUND2).unwrap();
    }

    #[test]
    fn test_run_aggregates_a_pair() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), false);
        write_round_files(&config.basefolder);

        run(&config).unwrap();

        let results = fs::read_to_string(dir.path().join("threads.csv")).unwrap();
        assert_eq!(
            results,
            "category,nodes,threads,senders,mind,q1,medi,avrg,q3,maxd\n\
             s,3,4,2,6,6.75,7.5,7.5,8.25,9\n"
        );
        let totals = fs::read_to_string(dir.path().join("threadsall_totals.csv")).unwrap();
        assert_eq!(
            totals,
            "category,nodes,threads,senders,totals...\ns,3,4,2,6,9\n"
        );
    }

    #[test]
    fn test_run_fails_on_missing_round1() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), false);
        fs::create_dir_all(&config.basefolder).unwrap();
        fs::write(config.basefolder.join("Log_16Nodes_Round2.csv"), ROUND2).unwrap();

        let err = run(&config).unwrap_err();
        assert!(matches!(err, EvalError::MissingPair(_)));

        // Headers were initialized, but no data row was appended
        let results = fs::read_to_string(dir.path().join("threads.csv")).unwrap();
        assert_eq!(results.lines().count(), 1);
    }

    #[test]
    fn test_run_fails_on_header_only_pair() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), false);
        fs::create_dir_all(&config.basefolder).unwrap();
        let header = "Security,Threads,Node1,Total\n";
        fs::write(config.basefolder.join("Log_Round1.csv"), header).unwrap();
        fs::write(config.basefolder.join("Log_Round2.csv"), header).unwrap();

        let err = run(&config).unwrap_err();
        assert!(matches!(err, EvalError::EmptyInput));

        let results = fs::read_to_string(dir.path().join("threads.csv")).unwrap();
        assert_eq!(results.lines().count(), 1);
    }

    #[test]
    fn test_dry_run_persists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), true);
        write_round_files(&config.basefolder);

        run(&config).unwrap();

        assert!(!dir.path().join("threads.csv").exists());
        assert!(!dir.path().join("threadsall_totals.csv").exists());
    }
}
