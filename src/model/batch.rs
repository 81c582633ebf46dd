use std::fmt;
use std::ops::Range;

use crate::error::ScoringError;

/// Borrowed view over one scoring batch: entry `i` describes one record group
/// (`n_alpha[i]` of `no_records[i]` records fall below threshold `alpha[i]`).
#[derive(Debug, Clone, Copy)]
pub struct ScanBatch<'a> {
    n_alpha: &'a [f64],
    no_records: &'a [f64],
    alpha: &'a [f64],
}

impl<'a> ScanBatch<'a> {
    pub fn new(
        n_alpha: &'a [f64],
        no_records: &'a [f64],
        alpha: &'a [f64],
    ) -> Result<Self, ScoringError> {
        if n_alpha.len() != no_records.len() || n_alpha.len() != alpha.len() {
            return Err(ScoringError::LengthMismatch {
                n_alpha: n_alpha.len(),
                no_records: no_records.len(),
                alpha: alpha.len(),
            });
        }
        Ok(Self {
            n_alpha,
            no_records,
            alpha,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n_alpha.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_alpha.is_empty()
    }

    #[inline]
    pub fn n_alpha(&self) -> &'a [f64] {
        self.n_alpha
    }

    #[inline]
    pub fn no_records(&self) -> &'a [f64] {
        self.no_records
    }

    #[inline]
    pub fn alpha(&self) -> &'a [f64] {
        self.alpha
    }

    /// Sub-batch over `range`. Panics if `range` is out of bounds, like slice indexing.
    pub fn slice(&self, range: Range<usize>) -> ScanBatch<'a> {
        ScanBatch {
            n_alpha: &self.n_alpha[range.clone()],
            no_records: &self.no_records[range.clone()],
            alpha: &self.alpha[range],
        }
    }

    /// Entries that break `no_records > 0`, `0 < alpha < 1` or `0 <= n_alpha <= no_records`.
    /// Scores for these entries are still computed; this is diagnostics only.
    pub fn domain_violations(&self) -> impl Iterator<Item = DomainViolation> + 'a {
        let n_alpha = self.n_alpha;
        let no_records = self.no_records;
        let alpha = self.alpha;
        (0..n_alpha.len()).filter_map(move |index| {
            check_entry(n_alpha[index], no_records[index], alpha[index])
                .map(|fault| DomainViolation { index, fault })
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainFault {
    NotANumber,
    NonPositiveRecords,
    AlphaOutOfRange,
    NegativeCount,
    CountExceedsRecords,
}

impl DomainFault {
    pub fn as_str(self) -> &'static str {
        match self {
            DomainFault::NotANumber => "nan input",
            DomainFault::NonPositiveRecords => "no_records <= 0",
            DomainFault::AlphaOutOfRange => "alpha outside (0, 1)",
            DomainFault::NegativeCount => "n_alpha < 0",
            DomainFault::CountExceedsRecords => "n_alpha > no_records",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainViolation {
    pub index: usize,
    pub fault: DomainFault,
}

impl fmt::Display for DomainViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {}: {}", self.index, self.fault.as_str())
    }
}

fn check_entry(n_alpha: f64, no_records: f64, alpha: f64) -> Option<DomainFault> {
    if n_alpha.is_nan() || no_records.is_nan() || alpha.is_nan() {
        Some(DomainFault::NotANumber)
    } else if no_records <= 0.0 {
        Some(DomainFault::NonPositiveRecords)
    } else if alpha <= 0.0 || alpha >= 1.0 {
        Some(DomainFault::AlphaOutOfRange)
    } else if n_alpha < 0.0 {
        Some(DomainFault::NegativeCount)
    } else if n_alpha > no_records {
        Some(DomainFault::CountExceedsRecords)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/batch.rs"]
mod tests;
