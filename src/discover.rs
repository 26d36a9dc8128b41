use std::path::{Path, PathBuf};

use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundPair {
    pub round1: PathBuf,
    pub round2: PathBuf,
}

// Walks the base folder and yields one pair per Round2 result file found.
// The Round1 counterpart is derived by name only; whether it exists on disk
// is checked when the pair is processed.
pub fn discover_pairs(basefolder: &Path) -> impl Iterator<Item = RoundPair> {
    WalkDir::new(basefolder)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with("Round2.csv"))
        .map(|entry| {
            let round2 = entry.into_path();
            // The round marker is substituted wherever it occurs in the path.
            let round1 = PathBuf::from(round2.to_string_lossy().replace("Round2", "Round1"));
            RoundPair { round1, round2 }
        })
}
