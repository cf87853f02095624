use crate::culler::criteria::{Criterion, ExclusionVerdict};
use serde::Serialize;

/// Counts of documents removed by a filter pass, per criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RemovalReport {
    pub examined: usize,
    pub stub: usize,
    pub empty: usize,
    pub below_size: usize,
}

impl RemovalReport {
    pub fn record(&mut self, verdict: ExclusionVerdict) {
        self.examined += 1;
        match verdict {
            ExclusionVerdict::Retained => {}
            ExclusionVerdict::Excluded(Criterion::Stub) => self.stub += 1,
            ExclusionVerdict::Excluded(Criterion::EmptyContent) => self.empty += 1,
            ExclusionVerdict::Excluded(Criterion::BelowSizeThreshold) => self.below_size += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.stub + self.empty + self.below_size
    }

    pub fn retained(&self) -> usize {
        self.examined - self.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_total() {
        let mut report = RemovalReport::default();
        report.record(ExclusionVerdict::Excluded(Criterion::Stub));
        report.record(ExclusionVerdict::Excluded(Criterion::BelowSizeThreshold));
        report.record(ExclusionVerdict::Excluded(Criterion::BelowSizeThreshold));
        report.record(ExclusionVerdict::Retained);

        assert_eq!(report.examined, 4);
        assert_eq!(report.stub, 1);
        assert_eq!(report.empty, 0);
        assert_eq!(report.below_size, 2);
        assert_eq!(report.total(), 3);
        assert_eq!(report.retained(), 1);
    }
}
