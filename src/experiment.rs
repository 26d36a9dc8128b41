use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Experiment {
    Threads,
    Nodes,
    Messages,
}

impl Experiment {
    pub fn name(&self) -> &'static str {
        match self {
            Experiment::Threads => "threads",
            Experiment::Nodes => "nodes",
            Experiment::Messages => "messages",
        }
    }
}

impl std::str::FromStr for Experiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "threads" => Ok(Experiment::Threads),
            "nodes" => Ok(Experiment::Nodes),
            "messages" => Ok(Experiment::Messages),
            _ => Err(format!("Invalid experiment: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EvalConfig {
    pub experiment: Experiment,
    pub basefolder: PathBuf,
    pub outdir: PathBuf,
    pub dry_run: bool,
}

impl EvalConfig {
    pub fn results_path(&self) -> PathBuf {
        self.outdir.join(format!("{}.csv", self.experiment.name()))
    }

    // The raw totals file shares the summary file's stem.
    pub fn totals_path(&self) -> PathBuf {
        self.outdir
            .join(format!("{}all_totals.csv", self.experiment.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experiment_from_str() {
        assert_eq!("threads".parse(), Ok(Experiment::Threads));
        assert_eq!("nodes".parse(), Ok(Experiment::Nodes));
        assert_eq!("messages".parse(), Ok(Experiment::Messages));
        assert!("latency".parse::<Experiment>().is_err());
    }

    #[test]
    fn test_output_paths() {
        let config = EvalConfig {
            experiment: Experiment::Messages,
            basefolder: PathBuf::from("results"),
            outdir: PathBuf::from("out"),
            dry_run: false,
        };
        assert_eq!(config.results_path(), PathBuf::from("out").join("messages.csv"));
        assert_eq!(
            config.totals_path(),
            PathBuf::from("out").join("messagesall_totals.csv")
        );
    }
}
