use chrono::NaiveDate;
use datelevel_core::{
    DateLevelEntity, check_series_for_key, effective, effective_for_key, is_contiguous_with,
    overlapping, overlapping_for_key, rebuild_date_level_series, set_date_level, trim_end,
    trim_start, update_date_level_for, verify_each_series,
};
use datelevel_types::{DateLevelError, OverlayCommit, SeriesConfig, VerifyMode, ViolationKind};

/// An owned collection of date-level entries, holding any number of keyed
/// series side by side, plus the policy applied on every write.
#[derive(Debug, Clone)]
pub struct Series<E> {
    entries: Vec<E>,
    cfg: SeriesConfig,
}

/// Builder for constructing a [`Series`] with custom configuration.
#[derive(Debug)]
pub struct SeriesBuilder<E> {
    entries: Vec<E>,
    cfg: SeriesConfig,
}

impl<E> Default for SeriesBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> SeriesBuilder<E> {
    /// Create a builder with no entries and the default configuration.
    ///
    /// Behavior and trade-offs:
    /// - `set` keeps the engine's partial output when an overlay is rejected.
    /// - Writes are not verified.
    /// - Range updates normalize the touched key afterwards.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cfg: SeriesConfig::default(),
        }
    }

    /// Load existing entries. Keys may be mixed freely.
    #[must_use]
    pub fn entries(mut self, entries: impl IntoIterator<Item = E>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Load a single existing entry.
    #[must_use]
    pub fn entry(mut self, entry: E) -> Self {
        self.entries.push(entry);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: SeriesConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Select what `set` does when an overlay would break continuity.
    ///
    /// Behavior and trade-offs:
    /// - `BestEffort` keeps every corrected entry plus the rejected one, so the
    ///   series may hold a gap afterwards, but no work is thrown away.
    /// - `Atomic` runs a read-only pre-check first and leaves the series
    ///   untouched on rejection, at the cost of one extra pass.
    #[must_use]
    pub const fn commit(mut self, commit: OverlayCommit) -> Self {
        self.cfg.commit = commit;
        self
    }

    /// Select verification of the touched key after `set` and `update`.
    ///
    /// Behavior and trade-offs:
    /// - `Lenient` never fails a write. It logs violations when the `tracing`
    ///   feature is enabled and skips the check entirely otherwise.
    /// - `Strict` turns a violation into the write's error. The write itself has
    ///   already been applied by then.
    #[must_use]
    pub const fn verify_after_write(mut self, mode: VerifyMode) -> Self {
        self.cfg.verify_after_write = mode;
        self
    }

    /// Toggle normalization of the touched key after a range update.
    #[must_use]
    pub const fn rebuild_after_update(mut self, yes: bool) -> Self {
        self.cfg.rebuild_after_update = yes;
        self
    }

    /// Normalize every key once when building.
    #[must_use]
    pub const fn normalize_on_build(mut self, yes: bool) -> Self {
        self.cfg.normalize_on_build = yes;
        self
    }
}

impl<E: DateLevelEntity> SeriesBuilder<E> {
    /// Build the handle.
    ///
    /// # Errors
    /// Returns `InvariantViolation` with `InvertedBounds` if a loaded entry
    /// starts after it ends.
    pub fn build(self) -> Result<Series<E>, DateLevelError> {
        if let Some(bad) = self.entries.iter().find(|e| e.start() > e.end()) {
            return Err(DateLevelError::violation(
                ViolationKind::InvertedBounds,
                format!("{:?}", bad.key()),
                bad.start(),
                bad.end(),
            ));
        }
        let mut series = Series {
            entries: self.entries,
            cfg: self.cfg,
        };
        if series.cfg.normalize_on_build {
            series.rebuild();
        }
        Ok(series)
    }
}

impl<E: DateLevelEntity> Default for Series<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DateLevelEntity> Series<E> {
    /// An empty handle with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cfg: SeriesConfig::default(),
        }
    }

    /// Start building a new `Series`.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use datelevel::{DateLevel, OverlayCommit, Series};
    ///
    /// let jan1 = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    /// let series = Series::builder()
    ///     .entry(DateLevel::open_ended("EURUSD", jan1, 1.05))
    ///     .commit(OverlayCommit::Atomic)
    ///     .build()?;
    /// assert_eq!(series.len(), 1);
    /// # Ok::<(), datelevel::DateLevelError>(())
    /// ```
    #[must_use]
    pub fn builder() -> SeriesBuilder<E> {
        SeriesBuilder::new()
    }

    /// Overlay `src` onto the series of its key.
    ///
    /// Other keys are untouched. On success the key holds `src`'s value on
    /// every day of its range, merged with equal-value neighbours.
    ///
    /// # Errors
    /// - `InvalidRange` if `src` starts after it ends; nothing changes.
    /// - `Discontinuity` if the key already has entries and none of them
    ///   overlaps or touches `src`. Under `OverlayCommit::Atomic` nothing
    ///   changes; under `BestEffort` `src` has been appended anyway.
    /// - `InvariantViolation` under `VerifyMode::Strict` if the key is not a
    ///   valid series afterwards.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "datelevel::series::set",
            skip_all,
            fields(key = ?src.key(), start = %src.start(), end = %src.end()),
        )
    )]
    pub fn set(&mut self, src: E) -> Result<(), DateLevelError> {
        let (start, end) = (src.start(), src.end());
        // checked here so the entries are never moved out for a doomed call
        if start > end {
            return Err(DateLevelError::invalid_range(start, end));
        }
        if self.cfg.commit == OverlayCommit::Atomic
            && !is_contiguous_with(&self.entries, &src, |a: &E, b: &E| a.key() == b.key())
        {
            #[cfg(feature = "tracing")]
            tracing::warn!("atomic overlay rejected; series left unchanged");
            return Err(DateLevelError::discontinuity(start, end));
        }
        let key = src.key();
        let (entries, outcome) = set_date_level(std::mem::take(&mut self.entries), src)?
            .collect_partial();
        self.entries = entries;
        outcome?;
        self.verify_key(&key)
    }

    /// Apply `modify` to every day of `key`'s series within `[start, end]`,
    /// splitting entries at the range boundaries.
    ///
    /// Days the key does not cover stay uncovered. With `rebuild_after_update`
    /// the key is normalized afterwards.
    ///
    /// # Errors
    /// - `InvalidRange` if `start > end`; nothing changes.
    /// - `InvariantViolation` under `VerifyMode::Strict`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "datelevel::series::update",
            skip_all,
            fields(key = ?key, start = %start, end = %end),
        )
    )]
    pub fn update<M>(
        &mut self,
        key: &E::Key,
        start: NaiveDate,
        end: NaiveDate,
        modify: M,
    ) -> Result<(), DateLevelError>
    where
        M: FnMut(&mut E),
    {
        update_date_level_for(
            &mut self.entries,
            key,
            modify,
            start,
            end,
            self.cfg.rebuild_after_update,
        )?;
        self.verify_key(key)
    }

    /// Normalize every key. Returns the number of entries merged away.
    pub fn rebuild(&mut self) -> usize {
        rebuild_date_level_series(&mut self.entries)
    }

    /// Entries in effect on `date`, at most one per well-formed key.
    pub fn effective(&self, date: NaiveDate) -> impl Iterator<Item = &E> {
        effective(&self.entries, date)
    }

    /// The entry of `key` in effect on `date`.
    pub fn effective_for(&self, key: &E::Key, date: NaiveDate) -> Option<&E> {
        effective_for_key(&self.entries, key, date)
    }

    /// Entries of any key sharing at least one day with `[start, end]`.
    pub fn overlapping(&self, start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = &E> {
        overlapping(&self.entries, start, end)
    }

    /// Entries of `key` sharing at least one day with `[start, end]`.
    pub fn overlapping_for<'a>(
        &'a self,
        key: &'a E::Key,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &'a E> {
        overlapping_for_key(&self.entries, key, start, end)
    }

    /// Verify every key as its own series.
    ///
    /// # Errors
    /// With `throw_on_error`, returns the first violation instead of `Ok(false)`.
    pub fn verify(&self, throw_on_error: bool) -> Result<bool, DateLevelError> {
        verify_each_series(&self.entries, throw_on_error)
    }

    /// Cut every key off before `new_start`.
    pub fn trim_start(&mut self, new_start: NaiveDate) {
        self.entries = trim_start(std::mem::take(&mut self.entries), new_start).collect();
    }

    /// Cut every key off after `new_end`.
    pub fn trim_end(&mut self, new_end: NaiveDate) {
        self.entries = trim_end(std::mem::take(&mut self.entries), new_end).collect();
    }

    /// Entries of `key` in start order.
    pub fn series_for(&self, key: &E::Key) -> Vec<&E> {
        let mut out: Vec<&E> = self.entries.iter().filter(|e| &e.key() == key).collect();
        out.sort_by_key(|e| e.start());
        out
    }

    /// All entries, in no particular order across keys.
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }

    /// Give up the handle and keep the entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<E> {
        self.entries
    }

    /// Number of entries across all keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key has any entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The policy applied on writes.
    pub const fn config(&self) -> &SeriesConfig {
        &self.cfg
    }

    fn verify_key(&self, key: &E::Key) -> Result<(), DateLevelError> {
        match self.cfg.verify_after_write {
            VerifyMode::Strict => check_series_for_key(&self.entries, key),
            VerifyMode::Lenient => {
                // nothing to report to without a subscriber
                #[cfg(feature = "tracing")]
                if let Err(err) = check_series_for_key(&self.entries, key) {
                    tracing::warn!(error = %err, "series failed verification after write");
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl<'a, E> IntoIterator for &'a Series<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<E> IntoIterator for Series<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
