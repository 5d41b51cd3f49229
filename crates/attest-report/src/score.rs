//! Compliance scoring

use attest_domain::{ClaimVerification, Verdict};

/// Verdict tallies for one verification list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerdictCounts {
    /// Claims that passed
    pub pass: usize,
    /// Claims partially satisfied
    pub partial: usize,
    /// Claims that failed
    pub fail: usize,
    /// Claims not assessable
    pub na: usize,
}

impl VerdictCounts {
    /// Tally verdicts from a verification list.
    pub fn tally(verifications: &[ClaimVerification]) -> Self {
        let mut counts = Self::default();
        for v in verifications {
            match v.verdict {
                Verdict::Pass => counts.pass += 1,
                Verdict::Partial => counts.partial += 1,
                Verdict::Fail => counts.fail += 1,
                Verdict::NotApplicable => counts.na += 1,
            }
        }
        counts
    }

    /// Total verifications tallied.
    pub fn total(&self) -> usize {
        self.pass + self.partial + self.fail + self.na
    }

    /// Claims that could actually be judged.
    pub fn assessable(&self) -> usize {
        self.total() - self.na
    }

    /// Weighted percentage of assessable claims satisfied:
    /// `(pass + 0.5 * partial) / assessable * 100`. A PARTIAL costs half
    /// credit. Returns 0 when nothing is assessable (guards the
    /// divide-by-zero on all-N/A runs).
    pub fn score(&self) -> f64 {
        let assessable = self.assessable();
        if assessable == 0 {
            return 0.0;
        }
        (self.pass as f64 + 0.5 * self.partial as f64) / assessable as f64 * 100.0
    }
}

/// Compute the compliance score for a verification list.
pub fn compliance_score(verifications: &[ClaimVerification]) -> f64 {
    VerdictCounts::tally(verifications).score()
}
