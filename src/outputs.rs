use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::error::EvalError;
use crate::experiment::EvalConfig;
use crate::rounds::ConfigMeta;
use crate::stats::Summary;

pub const SUMMARY_CSV_COLUMNS: &[&str] = &[
    "category", "nodes", "threads", "senders", "mind", "q1", "medi", "avrg", "q3", "maxd",
];

pub const TOTALS_CSV_COLUMNS: &[&str] = &["category", "nodes", "threads", "senders", "totals..."];

pub struct Outputs {
    results_path: PathBuf,
    totals_path: PathBuf,
    dry_run: bool,
}

impl Outputs {
    pub fn new(config: &EvalConfig) -> Self {
        Self {
            results_path: config.results_path(),
            totals_path: config.totals_path(),
            dry_run: config.dry_run,
        }
    }

    // Truncates both output files and writes their header rows.
    pub fn init(&self) -> Result<(), EvalError> {
        if self.dry_run {
            return Ok(());
        }

        let mut writer = csv::Writer::from_path(&self.results_path)?;
        writer.write_record(SUMMARY_CSV_COLUMNS)?;
        writer.flush()?;

        let mut writer = csv::Writer::from_path(&self.totals_path)?;
        writer.write_record(TOTALS_CSV_COLUMNS)?;
        writer.flush()?;
        Ok(())
    }

    // Appends one summary row and one raw totals row for a processed pair.
    // Each file is opened, written and closed within this call.
    pub fn append(
        &self,
        meta: &ConfigMeta,
        summary: &Summary,
        samples: &[f64],
    ) -> Result<(), EvalError> {
        let mut summary_record = meta_fields(meta);
        summary_record.extend([
            summary.min.to_string(),
            summary.q1.to_string(),
            summary.median.to_string(),
            summary.mean.to_string(),
            summary.q3.to_string(),
            summary.max.to_string(),
        ]);

        if self.dry_run {
            println!("{}", summary_record.join(","));
            return Ok(());
        }

        append_record(&self.results_path, &summary_record)?;

        let mut totals_record = meta_fields(meta);
        totals_record.extend(samples.iter().map(|sample| sample.to_string()));
        append_record(&self.totals_path, &totals_record)?;
        Ok(())
    }
}

fn meta_fields(meta: &ConfigMeta) -> Vec<String> {
    vec![
        meta.category.to_string(),
        meta.nodes.to_string(),
        meta.threads.to_string(),
        meta.senders.to_string(),
    ]
}

fn append_record(path: &Path, record: &[String]) -> Result<(), EvalError> {
    let file = OpenOptions::new().append(true).open(path)?;
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(record)?;
    writer.flush()?;
    Ok(())
}
