//! Per-call validation results and the policies that judge them.

use crate::custom::CheckId;

/// How many checks must pass for a password to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PassPolicy {
    /// Every check must pass.
    #[default]
    All,
    /// The passed fraction must reach this value (`0.0..=1.0`).
    Ratio(f64),
    /// At least this many checks must pass.
    MinPassed(usize),
}

/// Outcome of running every registered check against one password.
///
/// Built-in checks come first in flag order, then custom checks by tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    results: Vec<(CheckId, bool)>,
}

impl ValidationReport {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            results: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, id: CheckId, passed: bool) {
        self.results.push((id, passed));
    }

    /// Every executed check with its result.
    pub fn checks(&self) -> impl Iterator<Item = (&CheckId, bool)> {
        self.results.iter().map(|(id, passed)| (id, *passed))
    }

    pub fn passed(&self) -> impl Iterator<Item = &CheckId> {
        self.checks().filter(|(_, passed)| *passed).map(|(id, _)| id)
    }

    pub fn failed(&self) -> impl Iterator<Item = &CheckId> {
        self.checks().filter(|(_, passed)| !*passed).map(|(id, _)| id)
    }

    /// Result of a single check, if it ran.
    pub fn result(&self, id: &CheckId) -> Option<bool> {
        self.checks().find(|(other, _)| *other == id).map(|(_, passed)| passed)
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed_count(&self) -> usize {
        self.passed().count()
    }

    pub fn failed_count(&self) -> usize {
        self.total() - self.passed_count()
    }

    /// True when no check failed. An empty report is valid.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, passed)| *passed)
    }

    /// Fraction of checks that passed; `1.0` when nothing ran.
    pub fn pass_ratio(&self) -> f64 {
        if self.results.is_empty() {
            return 1.0;
        }
        self.passed_count() as f64 / self.total() as f64
    }

    pub fn satisfies(&self, policy: PassPolicy) -> bool {
        if self.is_valid() {
            return true;
        }
        match policy {
            PassPolicy::All => false,
            PassPolicy::Ratio(fraction) => self.pass_ratio() + f64::EPSILON >= fraction,
            PassPolicy::MinPassed(count) => self.passed_count() >= count,
        }
    }
}
