//! Password validator - owns the active checks and runs them per call.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::{CheckConfig, SymbolSet, Threshold};
use crate::custom::{CheckId, CustomCheck, SimpleCheck};
use crate::error::{Result, ValidatorError};
use crate::factory;
use crate::kind::{CheckKind, CheckKinds};
use crate::report::{PassPolicy, ValidationReport};
use crate::rules::Rule;

/// Validates passwords against a configurable set of checks.
///
/// Built-in rules are added by [`CheckKinds`]; custom checks by tag. Running a
/// validation never mutates the validator, so a shared `&Validator` can be
/// used from several threads at once.
#[derive(Clone, Default)]
pub struct Validator {
    kinds: CheckKinds,
    rules: BTreeMap<CheckKind, Rule>,
    custom: BTreeMap<Arc<str>, Arc<dyn CustomCheck>>,
    config: CheckConfig,
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("kinds", &self.kinds)
            .field("rules", &self.rules)
            .field("custom", &self.custom.keys().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

impl Validator {
    /// A validator without checks. It accepts every password.
    pub fn new() -> Self {
        Self::default()
    }

    /// A validator running the given built-in checks with default configuration.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::InvalidArgument`] if `kinds` holds undefined bits.
    pub fn with_checks(kinds: CheckKinds) -> Result<Self> {
        Self::with_config(kinds, CheckConfig::default())
    }

    /// Like [`Validator::with_checks`], with a custom minimum length.
    pub fn with_required_length(kinds: CheckKinds, min_length: usize) -> Result<Self> {
        let config = CheckConfig {
            min_length,
            ..CheckConfig::default()
        };
        Self::with_config(kinds, config)
    }

    /// A validator whose rules are created from `config`.
    pub fn with_config(kinds: CheckKinds, config: CheckConfig) -> Result<Self> {
        let mut validator = Self {
            config,
            ..Self::default()
        };
        validator.add_checks(kinds)?;
        Ok(validator)
    }

    // ------------------------------------------------------------------
    // Check registration
    // ------------------------------------------------------------------

    /// Adds the built-in checks in `kinds`.
    ///
    /// Kinds that are already registered keep their current rule.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::InvalidArgument`] if `kinds` is out of range; the
    /// validator is left unchanged.
    pub fn add_checks(&mut self, kinds: CheckKinds) -> Result<()> {
        ensure_in_range(kinds)?;
        self.kinds |= kinds;

        for kind in kinds.active_checks() {
            if !self.rules.contains_key(&kind) {
                #[cfg(feature = "tracing")]
                tracing::debug!("Adding check: {}", kind);
                self.rules.insert(kind, factory::build(kind, &self.config));
            }
        }
        Ok(())
    }

    /// Removes the built-in checks in `kinds`, dropping their rules.
    ///
    /// Kinds that are not registered are ignored.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::InvalidArgument`] if `kinds` is out of range.
    pub fn remove_checks(&mut self, kinds: CheckKinds) -> Result<()> {
        ensure_in_range(kinds)?;
        self.kinds.remove(kinds);

        for kind in kinds.active_checks() {
            if self.rules.remove(&kind).is_some() {
                #[cfg(feature = "tracing")]
                tracing::debug!("Removed check: {}", kind);
            }
        }
        Ok(())
    }

    /// Registers a custom check. Returns `false`, leaving the existing check
    /// in place, if the tag is already taken.
    pub fn add_check(&mut self, check: Arc<dyn CustomCheck>) -> bool {
        if self.custom.contains_key(check.tag()) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Custom check '{}' already registered", check.tag());
            return false;
        }
        self.custom.insert(Arc::from(check.tag()), check);
        true
    }

    /// Registers `check` under `tag`. See [`Validator::add_check`].
    pub fn add_custom_check<F>(&mut self, tag: impl Into<String>, check: F) -> bool
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.add_check(Arc::new(SimpleCheck::new(tag, check)))
    }

    /// Removes the custom check registered under `tag`, if any.
    pub fn remove_custom_check(&mut self, tag: &str) -> bool {
        self.custom.remove(tag).is_some()
    }

    /// Removes whatever check is registered under `check`'s tag.
    pub fn remove_check(&mut self, check: &dyn CustomCheck) -> bool {
        self.remove_custom_check(check.tag())
    }

    /// The built-in kinds currently active.
    pub fn check_kinds(&self) -> CheckKinds {
        self.kinds
    }

    /// The registered rule for `kind`.
    pub fn rule(&self, kind: CheckKind) -> Option<&Rule> {
        self.rules.get(&kind)
    }

    /// Ids of every registered check, built-ins first.
    pub fn all_checks(&self) -> impl Iterator<Item = CheckId> + '_ {
        self.rules
            .keys()
            .map(|kind| CheckId::Kind(*kind))
            .chain(self.custom.keys().map(|tag| CheckId::Tag(Arc::clone(tag))))
    }

    pub fn len(&self) -> usize {
        self.rules.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    pub fn min_length(&self) -> usize {
        self.config.min_length
    }

    pub fn max_length(&self) -> usize {
        self.config.max_length
    }

    /// Sets the minimum length, updating a registered length rule in place.
    pub fn set_min_length(&mut self, min_length: usize) {
        self.set_length_bounds(min_length, self.config.max_length);
    }

    /// Sets the maximum length, updating a registered length rule in place.
    pub fn set_max_length(&mut self, max_length: usize) {
        self.set_length_bounds(self.config.min_length, max_length);
    }

    pub fn set_length_bounds(&mut self, min_length: usize, max_length: usize) {
        self.config.min_length = min_length;
        self.config.max_length = max_length;
        if let Some(rule) = self.rules.get_mut(&CheckKind::Length) {
            rule.set_length_bounds(min_length, max_length);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Length bounds set to {}..={}", min_length, max_length);
    }

    pub fn digit_repetition(&self) -> usize {
        self.config.digit_repetition.get()
    }

    /// # Errors
    ///
    /// [`ValidatorError::InvalidConfiguration`] if `value <= 1`.
    pub fn set_digit_repetition(&mut self, value: usize) -> Result<()> {
        let threshold = Threshold::new("digit_repetition", value)?;
        self.config.digit_repetition = threshold;
        self.update_threshold(CheckKind::DigitRepetition, threshold);
        Ok(())
    }

    pub fn letter_repetition(&self) -> usize {
        self.config.letter_repetition.get()
    }

    /// # Errors
    ///
    /// [`ValidatorError::InvalidConfiguration`] if `value <= 1`.
    pub fn set_letter_repetition(&mut self, value: usize) -> Result<()> {
        let threshold = Threshold::new("letter_repetition", value)?;
        self.config.letter_repetition = threshold;
        self.update_threshold(CheckKind::LetterRepetition, threshold);
        Ok(())
    }

    pub fn symbol_repetition(&self) -> usize {
        self.config.symbol_repetition.get()
    }

    /// # Errors
    ///
    /// [`ValidatorError::InvalidConfiguration`] if `value <= 1`.
    pub fn set_symbol_repetition(&mut self, value: usize) -> Result<()> {
        let threshold = Threshold::new("symbol_repetition", value)?;
        self.config.symbol_repetition = threshold;
        self.update_threshold(CheckKind::SymbolRepetition, threshold);
        Ok(())
    }

    pub fn digit_sequence(&self) -> usize {
        self.config.digit_sequence.get()
    }

    /// # Errors
    ///
    /// [`ValidatorError::InvalidConfiguration`] if `value <= 1`.
    pub fn set_digit_sequence(&mut self, value: usize) -> Result<()> {
        let threshold = Threshold::new("digit_sequence", value)?;
        self.config.digit_sequence = threshold;
        self.update_threshold(CheckKind::DigitSequence, threshold);
        Ok(())
    }

    pub fn letter_sequence(&self) -> usize {
        self.config.letter_sequence.get()
    }

    /// # Errors
    ///
    /// [`ValidatorError::InvalidConfiguration`] if `value <= 1`.
    pub fn set_letter_sequence(&mut self, value: usize) -> Result<()> {
        let threshold = Threshold::new("letter_sequence", value)?;
        self.config.letter_sequence = threshold;
        self.update_threshold(CheckKind::LetterSequence, threshold);
        Ok(())
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.config.symbols
    }

    /// Sets the characters treated as symbols by the symbol and symbol
    /// repetition rules.
    pub fn set_symbols(&mut self, symbols: SymbolSet) {
        for kind in [CheckKind::Symbols, CheckKind::SymbolRepetition] {
            if let Some(rule) = self.rules.get_mut(&kind) {
                rule.set_symbols(symbols.clone());
            }
        }
        self.config.symbols = symbols;
    }

    fn update_threshold(&mut self, kind: CheckKind, threshold: Threshold) {
        if let Some(rule) = self.rules.get_mut(&kind) {
            rule.set_threshold(threshold);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Threshold for {} set to {}", kind, threshold);
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Runs every registered check and collects the results.
    pub fn report(&self, password: &SecretString) -> ValidationReport {
        self.run_checks(password.expose_secret(), || false)
            .unwrap_or_default()
    }

    /// True when every check passes. A validator without checks accepts everything.
    pub fn validate(&self, password: &SecretString) -> bool {
        self.report(password).is_valid()
    }

    /// True when every check passes or at least `fraction` of them do.
    pub fn validate_ratio(&self, password: &SecretString, fraction: f64) -> bool {
        self.validate_with(password, PassPolicy::Ratio(fraction))
    }

    /// True when every check passes or at least `min_passed` of them do.
    pub fn validate_min_passed(&self, password: &SecretString, min_passed: usize) -> bool {
        self.validate_with(password, PassPolicy::MinPassed(min_passed))
    }

    pub fn validate_with(&self, password: &SecretString, policy: PassPolicy) -> bool {
        self.report(password).satisfies(policy)
    }

    /// Executes all checks in order. Returns `None` as soon as `cancelled` reports true.
    fn run_checks(
        &self,
        password: &str,
        cancelled: impl Fn() -> bool,
    ) -> Option<ValidationReport> {
        let mut report = ValidationReport::with_capacity(self.len());

        for (kind, rule) in &self.rules {
            if cancelled() {
                return None;
            }
            let passed = rule.execute(password);
            #[cfg(feature = "tracing")]
            tracing::trace!("Check {} passed: {}", kind, passed);
            report.push(CheckId::Kind(*kind), passed);
        }

        for (tag, check) in &self.custom {
            if cancelled() {
                return None;
            }
            let passed = check.execute(password);
            #[cfg(feature = "tracing")]
            tracing::trace!("Custom check {} passed: {}", tag, passed);
            report.push(CheckId::Tag(Arc::clone(tag)), passed);
        }

        Some(report)
    }
}

#[cfg(feature = "async")]
impl Validator {
    /// Runs [`Validator::validate_with`] on tokio's blocking pool.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::Cancelled`] if the blocking task did not complete.
    pub async fn validate_async(&self, password: SecretString, policy: PassPolicy) -> Result<bool> {
        let validator = self.clone();
        tokio::task::spawn_blocking(move || validator.validate_with(&password, policy))
            .await
            .map_err(|_e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Password validation task failed: {}", _e);
                ValidatorError::Cancelled
            })
    }

    /// Like [`Validator::report`], but stops between checks once `token` is cancelled.
    pub fn report_cancellable(
        &self,
        password: &SecretString,
        token: &CancellationToken,
    ) -> Option<ValidationReport> {
        self.run_checks(password.expose_secret(), || token.is_cancelled())
    }

    /// Waits `debounce`, validates off the async runtime and sends the report through `tx`.
    ///
    /// Nothing is sent if `token` is cancelled before the report is complete.
    pub async fn validate_tx(
        &self,
        password: SecretString,
        debounce: Duration,
        token: CancellationToken,
        tx: mpsc::Sender<ValidationReport>,
    ) {
        #[cfg(feature = "tracing")]
        tracing::info!("Validation is about to start");

        if !debounce.is_zero() {
            tokio::time::sleep(debounce).await;
        }
        if token.is_cancelled() {
            return;
        }

        let validator = self.clone();
        let worker_token = token.clone();
        let report = tokio::task::spawn_blocking(move || {
            validator.report_cancellable(&password, &worker_token)
        })
        .await;

        match report {
            Ok(Some(report)) => {
                if let Err(_e) = tx.send(report).await {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Failed to send validation report: {}", _e);
                }
            }
            Ok(None) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Validation cancelled");
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Password validation task failed: {}", _e);
            }
        }
    }
}

fn ensure_in_range(kinds: CheckKinds) -> Result<()> {
    if kinds.is_in_range() {
        return Ok(());
    }
    #[cfg(feature = "tracing")]
    tracing::warn!("Rejected out of range check kinds: {:#b}", kinds.bits());
    Err(ValidatorError::out_of_range(kinds.bits()))
}
