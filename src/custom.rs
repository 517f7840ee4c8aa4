//! Caller-supplied checks registered under a unique tag.

use std::fmt;
use std::sync::Arc;

use crate::kind::CheckKind;

/// A password check defined outside this crate.
///
/// Checks are shared with the validator behind an `Arc`, so they must be
/// `Send + Sync`; `execute` takes `&self` and must not depend on earlier calls.
pub trait CustomCheck: Send + Sync {
    /// Unique name of the check inside a validator.
    fn tag(&self) -> &str;

    /// Runs the check. `true` means the password passed.
    fn execute(&self, password: &str) -> bool;
}

/// A [`CustomCheck`] made from a tag and a closure.
pub struct SimpleCheck<F> {
    tag: String,
    check: F,
}

impl<F> SimpleCheck<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    pub fn new(tag: impl Into<String>, check: F) -> Self {
        Self {
            tag: tag.into(),
            check,
        }
    }
}

impl<F> CustomCheck for SimpleCheck<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn tag(&self) -> &str {
        &self.tag
    }

    fn execute(&self, password: &str) -> bool {
        (self.check)(password)
    }
}

impl<F> fmt::Debug for SimpleCheck<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleCheck").field("tag", &self.tag).finish_non_exhaustive()
    }
}

/// Identity of a registered check: its kind for built-ins, its tag for custom checks.
///
/// Built-in ids order before custom ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckId {
    Kind(CheckKind),
    Tag(Arc<str>),
}

impl CheckId {
    pub fn kind(&self) -> Option<CheckKind> {
        match self {
            CheckId::Kind(kind) => Some(*kind),
            CheckId::Tag(_) => None,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            CheckId::Kind(_) => None,
            CheckId::Tag(tag) => Some(tag.as_ref()),
        }
    }
}

impl From<CheckKind> for CheckId {
    fn from(kind: CheckKind) -> Self {
        CheckId::Kind(kind)
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckId::Kind(kind) => fmt::Display::fmt(kind, f),
            CheckId::Tag(tag) => f.write_str(tag),
        }
    }
}
