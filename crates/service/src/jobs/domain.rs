use serde::{Deserialize, Serialize};

use models::job::TRACKED_STATUSES;

/// Status summary over the whole collection.
///
/// `total` counts every row; the four named counts only match their exact,
/// case-sensitive status string, so `total` may exceed their sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStats {
    pub total: u64,
    pub applied: u64,
    pub interview: u64,
    pub offer: u64,
    pub rejected: u64,
}

impl JobStats {
    pub fn from_status_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let [applied, interview, offer, rejected] = TRACKED_STATUSES;
        let mut stats = JobStats::default();
        for (status, n) in counts {
            let n = u64::try_from(n).unwrap_or_default();
            stats.total += n;
            match status.as_ref() {
                s if s == applied => stats.applied += n,
                s if s == interview => stats.interview += n,
                s if s == offer => stats.offer += n,
                s if s == rejected => stats.rejected += n,
                _ => {}
            }
        }
        stats
    }

    /// Rows whose status is none of [`TRACKED_STATUSES`].
    pub fn other(&self) -> u64 {
        self.total - (self.applied + self.interview + self.offer + self.rejected)
    }
}
