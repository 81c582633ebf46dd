use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;
use crate::model::batch::ScanBatch;
use crate::scoring::{berk_jones, higher_criticism, kolmogorov_smirnov};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    BerkJones,
    HigherCriticism,
    KolmogorovSmirnov,
}

impl ScoreKind {
    pub const ALL: [ScoreKind; 3] = [
        ScoreKind::BerkJones,
        ScoreKind::HigherCriticism,
        ScoreKind::KolmogorovSmirnov,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreKind::BerkJones => "berk_jones",
            ScoreKind::HigherCriticism => "higher_criticism",
            ScoreKind::KolmogorovSmirnov => "kolmogorov_smirnov",
        }
    }

    /// Per-element closed form for this kind.
    pub fn score_one(self, n_alpha: f64, no_records: f64, alpha: f64) -> f64 {
        match self {
            ScoreKind::BerkJones => berk_jones::score_one(n_alpha, no_records, alpha),
            ScoreKind::HigherCriticism => higher_criticism::score_one(n_alpha, no_records, alpha),
            ScoreKind::KolmogorovSmirnov => {
                kolmogorov_smirnov::score_one(n_alpha, no_records, alpha)
            }
        }
    }

    pub fn score(self, batch: &ScanBatch<'_>) -> Vec<f64> {
        let mut out = vec![0.0; batch.len()];
        self.score_into(batch, &mut out);
        out
    }

    /// Writes scores for `batch` into `out`, which must have `batch.len()` entries.
    pub fn score_into(self, batch: &ScanBatch<'_>, out: &mut [f64]) {
        match self {
            ScoreKind::BerkJones => berk_jones::score_into(batch, out),
            ScoreKind::HigherCriticism => higher_criticism::score_into(batch, out),
            ScoreKind::KolmogorovSmirnov => kolmogorov_smirnov::score_into(batch, out),
        }
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoreKind {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "berk_jones" | "berk-jones" | "bj" => Ok(ScoreKind::BerkJones),
            "higher_criticism" | "higher-criticism" | "hc" => Ok(ScoreKind::HigherCriticism),
            "kolmogorov_smirnov" | "kolmogorov-smirnov" | "ks" => {
                Ok(ScoreKind::KolmogorovSmirnov)
            }
            _ => Err(ScoringError::UnknownScoreKind(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/kind.rs"]
mod tests;
