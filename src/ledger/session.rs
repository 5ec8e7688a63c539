//! Session ledger over a persisted store.
//!
//! The ledger is the only code that knows how a `DecisionRecord` is spread
//! across store keys. Each decision is persisted as three projections plus
//! counters and a pointer:
//!
//! - the ID is added to `smashedIDs` or `passedIDs` (set-like: an ID already
//!   present is not added twice)
//! - the ID is appended to `decisionIDs`
//! - the appraisal is appended to `appraisals`
//! - the joined type list is appended to `listOfTypes`
//! - `counter:<appraisal>:<type>` is incremented once per type
//! - `lastPokemonId` is set to the ID
//!
//! `decisionIDs`, `appraisals` and `listOfTypes` are always the same length
//! and index aligned, so undo knows exactly which ID it takes back even when
//! the same Pokémon was judged twice. Sessions stored without `decisionIDs`
//! are read by walking `appraisals` and drawing from the matching outcome
//! list.
//!
//! ## Usage
//!
//! ```
//! use smash_or_pass::core::{Appraisal, DecisionRecord, PokemonId, TypeName};
//! use smash_or_pass::ledger::SessionLedger;
//! use smash_or_pass::store::MemoryStore;
//!
//! let mut ledger = SessionLedger::new(MemoryStore::new());
//! ledger.record_decision(&DecisionRecord::new(PokemonId::new(1), Appraisal::Smashed, ["grass", "poison"])).unwrap();
//!
//! assert_eq!(ledger.last_id().unwrap(), Some(PokemonId::new(1)));
//! assert_eq!(ledger.counter(Appraisal::Smashed, &TypeName::from("poison")).unwrap(), 1);
//!
//! let undone = ledger.undo_last_decision().unwrap();
//! assert_eq!(undone.id, PokemonId::new(1));
//! assert!(ledger.is_empty().unwrap());
//! ```

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use super::summary::{ResultsSummary, TypeTally};
use crate::core::{Appraisal, DecisionRecord, PokemonId, TypeList, TypeName};
use crate::error::{GameError, Result};
use crate::store::{Store, StoreError, StoreExt, StoreKey, WriteBatch};

/// Ordered record of a player's decisions, kept in a `Store`.
#[derive(Debug)]
pub struct SessionLedger<S> {
    store: S,
}

impl<S: Store> SessionLedger<S> {
    /// Wrap a store. Existing session data in it is picked up as-is.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    // === Reads ===

    /// ID of the most recent decision, if any.
    pub fn last_id(&self) -> Result<Option<PokemonId>> {
        Ok(self.store.read(&StoreKey::LastPokemonId)?)
    }

    /// IDs with the given outcome, in decision order.
    pub fn ids(&self, appraisal: Appraisal) -> Result<Vec<PokemonId>> {
        Ok(self.store.read_or_default(&StoreKey::ids_for(appraisal))?)
    }

    /// Smashed IDs.
    pub fn accepted_ids(&self) -> Result<Vec<PokemonId>> {
        self.ids(Appraisal::Smashed)
    }

    /// Passed IDs.
    pub fn rejected_ids(&self) -> Result<Vec<PokemonId>> {
        self.ids(Appraisal::Passed)
    }

    /// Appraisal labels, oldest first.
    pub fn appraisals(&self) -> Result<Vec<Appraisal>> {
        Ok(self.store.read_or_default(&StoreKey::Appraisals)?)
    }

    /// Type lists, index-aligned with `appraisals()`.
    pub fn type_history(&self) -> Result<Vec<TypeList>> {
        Ok(self.store.read_or_default(&StoreKey::ListOfTypes)?)
    }

    /// Current value of one counter. Absent counters read as zero.
    pub fn counter(&self, appraisal: Appraisal, type_name: &TypeName) -> Result<u32> {
        Ok(self
            .store
            .read_or_default(&StoreKey::counter(appraisal, type_name))?)
    }

    /// Every stored counter, including ones that dropped back to zero.
    pub fn counters(&self) -> Result<BTreeMap<(Appraisal, TypeName), u32>> {
        let mut counters = BTreeMap::new();
        for key in self.store.typed_keys() {
            if let StoreKey::Counter(appraisal, type_name) = &key {
                let value: u32 = self.store.read_or_default(&key)?;
                counters.insert((*appraisal, type_name.clone()), value);
            }
        }
        Ok(counters)
    }

    /// Number of recorded decisions.
    pub fn len(&self) -> Result<usize> {
        Ok(self.appraisals()?.len())
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Rebuild the ordered decision history from the persisted projections.
    pub fn history(&self) -> Result<Vec<DecisionRecord>> {
        let appraisals = self.appraisals()?;
        let types = self.type_history()?;
        if appraisals.len() != types.len() {
            return Err(StoreError::Inconsistent(format!(
                "{} appraisals but {} type lists",
                appraisals.len(),
                types.len()
            ))
            .into());
        }

        let ids = self.decision_ids(&appraisals)?;
        Ok(ids
            .into_iter()
            .zip(appraisals)
            .zip(types)
            .map(|((id, appraisal), types)| DecisionRecord::with_types(id, appraisal, types))
            .collect())
    }

    /// Accepted and rejected IDs with the per-type tally.
    pub fn results_summary(&self) -> Result<ResultsSummary> {
        let mut tallies: FxHashMap<TypeName, TypeTally> = FxHashMap::default();
        for ((appraisal, type_name), count) in self.counters()? {
            if count == 0 {
                continue;
            }
            let tally = tallies.entry(type_name.clone()).or_insert_with(|| TypeTally {
                type_name,
                ..TypeTally::default()
            });
            match appraisal {
                Appraisal::Smashed => tally.smashed += count,
                Appraisal::Passed => tally.passed += count,
            }
        }
        let mut by_type: Vec<TypeTally> = tallies.into_values().collect();
        by_type.sort_by(|a, b| a.type_name.cmp(&b.type_name));

        Ok(ResultsSummary {
            smashed: self.accepted_ids()?,
            passed: self.rejected_ids()?,
            by_type,
        })
    }

    // === Writes ===

    /// Append a decision.
    ///
    /// All keys are written in one batch; on error nothing is recorded.
    pub fn record_decision(&mut self, decision: &DecisionRecord) -> Result<()> {
        let mut batch = WriteBatch::new();

        let ids_key = StoreKey::ids_for(decision.appraisal);
        let mut ids: Vec<PokemonId> = self.store.read_or_default(&ids_key)?;
        if !ids.contains(&decision.id) {
            ids.push(decision.id);
            batch.put(&ids_key, &ids)?;
        }

        let mut appraisals = self.appraisals()?;
        match self.decision_ids(&appraisals) {
            Ok(mut decision_ids) => {
                decision_ids.push(decision.id);
                batch.put(&StoreKey::DecisionIds, &decision_ids)?;
            }
            Err(GameError::Store(StoreError::Inconsistent(reason))) => {
                tracing::warn!("cannot align decision ids, dropping them: {reason}");
                batch.remove(&StoreKey::DecisionIds);
            }
            Err(e) => return Err(e),
        }
        appraisals.push(decision.appraisal);
        batch.put(&StoreKey::Appraisals, &appraisals)?;

        let mut types = self.type_history()?;
        types.push(decision.types.clone());
        batch.put(&StoreKey::ListOfTypes, &types)?;

        for (type_name, times) in occurrences(&decision.types) {
            let current = self.counter(decision.appraisal, type_name)?;
            batch.put(&StoreKey::counter(decision.appraisal, type_name), &(current + times))?;
        }

        batch.put(&StoreKey::LastPokemonId, &decision.id)?;

        self.store.apply(batch)?;
        tracing::debug!(
            id = decision.id.raw(),
            appraisal = %decision.appraisal,
            types = %decision.types.joined(),
            "recorded decision"
        );
        Ok(())
    }

    /// Pop the most recent decision and return it.
    ///
    /// The decision's ID leaves its outcome list only when no earlier
    /// decision with the same outcome still refers to it. Counters are
    /// decremented with a floor at zero. `lastPokemonId` moves back to the
    /// previous decision's ID, or is removed when none remain.
    pub fn undo_last_decision(&mut self) -> Result<DecisionRecord> {
        let mut appraisals = self.appraisals()?;
        let Some(&appraisal) = appraisals.last() else {
            return Err(GameError::EmptyHistory);
        };
        let decision_ids = match self.decision_ids(&appraisals) {
            Ok(ids) => Some(ids),
            Err(GameError::Store(StoreError::Inconsistent(reason))) => {
                tracing::warn!("cannot align decision ids, undoing from the outcome list: {reason}");
                None
            }
            Err(e) => return Err(e),
        };
        appraisals.pop();

        let mut types = self.type_history()?;
        let popped_types = types.pop().unwrap_or_else(|| {
            tracing::warn!("type history shorter than appraisal history");
            TypeList::new()
        });

        let ids_key = StoreKey::ids_for(appraisal);
        let mut ids: Vec<PokemonId> = self.store.read_or_default(&ids_key)?;
        let mut batch = WriteBatch::new();

        let (id, previous) = match decision_ids {
            Some(mut decision_ids) => {
                let id = decision_ids.pop().ok_or(GameError::EmptyHistory)?;
                let still_recorded = decision_ids
                    .iter()
                    .zip(&appraisals)
                    .any(|(other, other_appraisal)| *other == id && *other_appraisal == appraisal);
                if !still_recorded {
                    match ids.iter().rposition(|other| *other == id) {
                        Some(index) => {
                            ids.remove(index);
                        }
                        None => {
                            tracing::warn!(id = id.raw(), %appraisal, "undone id missing from its outcome list");
                        }
                    }
                }
                let previous = decision_ids.last().copied();
                batch.put(&StoreKey::DecisionIds, &decision_ids)?;
                (id, previous)
            }
            None => {
                let last = self.last_id()?;
                let id = match ids.pop().or(last) {
                    Some(id) => id,
                    None => {
                        return Err(StoreError::Inconsistent(format!(
                            "no {appraisal} id and no last id to undo"
                        ))
                        .into())
                    }
                };
                batch.remove(&StoreKey::DecisionIds);
                (id, self.previous_decision_id(&appraisals, appraisal, &ids, id)?)
            }
        };

        batch.put(&StoreKey::Appraisals, &appraisals)?;
        batch.put(&StoreKey::ListOfTypes, &types)?;
        batch.put(&ids_key, &ids)?;

        for (type_name, times) in occurrences(&popped_types) {
            let current = self.counter(appraisal, type_name)?;
            if current > 0 {
                batch.put(
                    &StoreKey::counter(appraisal, type_name),
                    &current.saturating_sub(times),
                )?;
            }
        }

        match previous {
            Some(previous) => batch.put(&StoreKey::LastPokemonId, &previous)?,
            None => batch.remove(&StoreKey::LastPokemonId),
        }

        self.store.apply(batch)?;
        tracing::debug!(
            id = id.raw(),
            %appraisal,
            types = %popped_types.joined(),
            "undid decision"
        );
        Ok(DecisionRecord::with_types(id, appraisal, popped_types))
    }

    /// Remove every key from the store.
    pub fn reset(&mut self) -> Result<()> {
        self.store.clear()?;
        tracing::debug!("cleared session ledger");
        Ok(())
    }

    /// ID of every decision, index-aligned with `appraisals`.
    ///
    /// Sessions written without `decisionIDs` are rebuilt by drawing from
    /// the outcome lists in appraisal order.
    fn decision_ids(&self, appraisals: &[Appraisal]) -> Result<Vec<PokemonId>> {
        if let Some(ids) = self.store.read::<Vec<PokemonId>>(&StoreKey::DecisionIds)? {
            if ids.len() == appraisals.len() {
                return Ok(ids);
            }
            tracing::warn!(
                ids = ids.len(),
                appraisals = appraisals.len(),
                "decision ids out of step with appraisals, rebuilding"
            );
        }

        let smashed = self.accepted_ids()?;
        let passed = self.rejected_ids()?;
        let mut smashed_ids = smashed.iter();
        let mut passed_ids = passed.iter();

        appraisals
            .iter()
            .map(|&appraisal| -> Result<PokemonId> {
                let next = match appraisal {
                    Appraisal::Smashed => smashed_ids.next(),
                    Appraisal::Passed => passed_ids.next(),
                };
                let id = next.copied().ok_or_else(|| {
                    StoreError::Inconsistent(format!("more {appraisal} appraisals than {appraisal} ids"))
                })?;
                Ok(id)
            })
            .collect()
    }

    /// Best guess at the now-last decision's ID when IDs are not aligned.
    ///
    /// `popped_list` is the already-popped list for `popped`; the other
    /// outcome's list is read from the store. An empty list means the
    /// previous decision repeated an ID, so the undone ID stands in.
    fn previous_decision_id(
        &self,
        remaining: &[Appraisal],
        popped: Appraisal,
        popped_list: &[PokemonId],
        undone: PokemonId,
    ) -> Result<Option<PokemonId>> {
        let Some(&previous) = remaining.last() else {
            return Ok(None);
        };
        let previous_id = if previous == popped {
            popped_list.last().copied()
        } else {
            self.ids(previous)?.last().copied()
        };
        Ok(Some(previous_id.unwrap_or_else(|| {
            tracing::warn!(appraisal = %previous, "appraisal history points at an empty id list");
            undone
        })))
    }
}

/// Each distinct type with how often it appears in `types`.
fn occurrences(types: &TypeList) -> Vec<(&TypeName, u32)> {
    let mut counted: Vec<(&TypeName, u32)> = Vec::with_capacity(types.len());
    for type_name in types.iter() {
        match counted.iter_mut().find(|(seen, _)| *seen == type_name) {
            Some((_, times)) => *times += 1,
            None => counted.push((type_name, 1)),
        }
    }
    counted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn ledger() -> SessionLedger<MemoryStore> {
        SessionLedger::new(MemoryStore::new())
    }

    fn grass() -> TypeName {
        TypeName::from("grass")
    }

    #[test]
    fn test_record_decision_writes_all_projections() {
        let mut ledger = ledger();
        ledger
            .record_decision(&DecisionRecord::new(PokemonId::new(2), Appraisal::Smashed, ["grass"]))
            .unwrap();

        assert_eq!(ledger.accepted_ids().unwrap(), vec![PokemonId::new(2)]);
        assert!(ledger.rejected_ids().unwrap().is_empty());
        assert_eq!(ledger.appraisals().unwrap(), vec![Appraisal::Smashed]);
        assert_eq!(ledger.type_history().unwrap()[0].joined(), "grass");
        assert_eq!(ledger.counter(Appraisal::Smashed, &grass()).unwrap(), 1);
        assert_eq!(ledger.last_id().unwrap(), Some(PokemonId::new(2)));
    }

    #[test]
    fn test_persisted_layout() {
        let mut ledger = ledger();
        ledger
            .record_decision(&DecisionRecord::new(PokemonId::new(1), Appraisal::Passed, ["grass", "poison"]))
            .unwrap();

        let store = ledger.store();
        assert_eq!(store.get_raw("passedIDs").as_deref(), Some("[1]"));
        assert_eq!(store.get_raw("appraisals").as_deref(), Some(r#"["passed"]"#));
        assert_eq!(store.get_raw("listOfTypes").as_deref(), Some(r#"["grass,poison"]"#));
        assert_eq!(store.get_raw("counter:passed:poison").as_deref(), Some("1"));
        assert_eq!(store.get_raw("lastPokemonId").as_deref(), Some("1"));
    }

    #[test]
    fn test_duplicate_id_not_added_twice() {
        let mut ledger = ledger();
        let decision = DecisionRecord::new(PokemonId::new(5), Appraisal::Smashed, ["fire"]);
        ledger.record_decision(&decision).unwrap();
        ledger.record_decision(&decision).unwrap();

        assert_eq!(ledger.accepted_ids().unwrap(), vec![PokemonId::new(5)]);
        assert_eq!(ledger.appraisals().unwrap().len(), 2);
        assert_eq!(ledger.counter(Appraisal::Smashed, &TypeName::from("fire")).unwrap(), 2);
    }

    #[test]
    fn test_undo_repeated_id_twice() {
        let mut ledger = ledger();
        let decision = DecisionRecord::new(PokemonId::new(5), Appraisal::Smashed, ["fire"]);
        ledger.record_decision(&decision).unwrap();
        ledger.record_decision(&decision).unwrap();

        assert_eq!(ledger.undo_last_decision().unwrap(), decision);
        assert_eq!(ledger.accepted_ids().unwrap(), vec![PokemonId::new(5)]);
        assert_eq!(ledger.last_id().unwrap(), Some(PokemonId::new(5)));

        assert_eq!(ledger.undo_last_decision().unwrap(), decision);
        assert!(ledger.is_empty().unwrap());
        assert!(ledger.accepted_ids().unwrap().is_empty());
        assert_eq!(ledger.last_id().unwrap(), None);
        assert_eq!(ledger.counter(Appraisal::Smashed, &TypeName::from("fire")).unwrap(), 0);
    }

    #[test]
    fn test_undo_rejudged_id_keeps_later_entry() {
        let mut ledger = ledger();
        ledger
            .record_decision(&DecisionRecord::new(PokemonId::new(1), Appraisal::Smashed, ["grass"]))
            .unwrap();
        ledger
            .record_decision(&DecisionRecord::new(PokemonId::new(2), Appraisal::Smashed, ["grass"]))
            .unwrap();
        ledger
            .record_decision(&DecisionRecord::new(PokemonId::new(1), Appraisal::Smashed, ["grass"]))
            .unwrap();

        let undone = ledger.undo_last_decision().unwrap();
        assert_eq!(undone.id, PokemonId::new(1));
        assert_eq!(ledger.accepted_ids().unwrap(), vec![PokemonId::new(1), PokemonId::new(2)]);
        assert_eq!(ledger.last_id().unwrap(), Some(PokemonId::new(2)));
        assert_eq!(
            ledger.history().unwrap().iter().map(|d| d.id.raw()).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_undo_repeated_id_without_decision_ids() {
        let mut store = MemoryStore::new();
        store.insert_raw("smashedIDs", "[5]");
        store.insert_raw("appraisals", r#"["smashed","smashed"]"#);
        store.insert_raw("listOfTypes", r#"["fire","fire"]"#);
        store.insert_raw("counter:smashed:fire", "2");
        store.insert_raw("lastPokemonId", "5");
        let mut ledger = SessionLedger::new(store);

        assert_eq!(ledger.undo_last_decision().unwrap().id, PokemonId::new(5));
        assert_eq!(ledger.last_id().unwrap(), Some(PokemonId::new(5)));
        assert_eq!(ledger.undo_last_decision().unwrap().id, PokemonId::new(5));

        assert!(ledger.is_empty().unwrap());
        assert_eq!(ledger.last_id().unwrap(), None);
        assert_eq!(ledger.counter(Appraisal::Smashed, &TypeName::from("fire")).unwrap(), 0);
        assert!(matches!(ledger.undo_last_decision(), Err(GameError::EmptyHistory)));
    }

    #[test]
    fn test_repeated_type_counts_twice() {
        let mut ledger = ledger();
        ledger
            .record_decision(&DecisionRecord::new(PokemonId::new(5), Appraisal::Passed, ["rock", "rock"]))
            .unwrap();
        assert_eq!(ledger.counter(Appraisal::Passed, &TypeName::from("rock")).unwrap(), 2);

        ledger.undo_last_decision().unwrap();
        assert_eq!(ledger.counter(Appraisal::Passed, &TypeName::from("rock")).unwrap(), 0);
    }

    #[test]
    fn test_undo_empty_history() {
        let mut ledger = ledger();
        assert!(matches!(ledger.undo_last_decision(), Err(GameError::EmptyHistory)));
    }

    #[test]
    fn test_undo_restores_previous_state() {
        let mut ledger = ledger();
        ledger
            .record_decision(&DecisionRecord::new(PokemonId::new(1), Appraisal::Passed, ["grass"]))
            .unwrap();
        ledger
            .record_decision(&DecisionRecord::new(PokemonId::new(2), Appraisal::Smashed, ["grass"]))
            .unwrap();

        let undone = ledger.undo_last_decision().unwrap();
        assert_eq!(undone, DecisionRecord::new(PokemonId::new(2), Appraisal::Smashed, ["grass"]));

        assert!(ledger.accepted_ids().unwrap().is_empty());
        assert_eq!(ledger.rejected_ids().unwrap(), vec![PokemonId::new(1)]);
        assert_eq!(ledger.appraisals().unwrap(), vec![Appraisal::Passed]);
        assert_eq!(ledger.counter(Appraisal::Smashed, &grass()).unwrap(), 0);
        assert_eq!(ledger.counter(Appraisal::Passed, &grass()).unwrap(), 1);
        assert_eq!(ledger.last_id().unwrap(), Some(PokemonId::new(1)));
    }

    #[test]
    fn test_undo_last_remaining_clears_pointer() {
        let mut ledger = ledger();
        ledger
            .record_decision(&DecisionRecord::new(PokemonId::new(1), Appraisal::Smashed, ["grass"]))
            .unwrap();
        ledger.undo_last_decision().unwrap();

        assert_eq!(ledger.last_id().unwrap(), None);
        assert!(ledger.is_empty().unwrap());
    }

    #[test]
    fn test_undo_across_gap_points_at_905() {
        let mut ledger = ledger();
        ledger
            .record_decision(&DecisionRecord::new(PokemonId::new(905), Appraisal::Passed, ["grass"]))
            .unwrap();
        ledger
            .record_decision(&DecisionRecord::new(PokemonId::new(10001), Appraisal::Passed, ["fire"]))
            .unwrap();

        ledger.undo_last_decision().unwrap();
        assert_eq!(ledger.last_id().unwrap(), Some(PokemonId::new(905)));
    }

    #[test]
    fn test_decrement_at_zero_is_noop() {
        let mut ledger = ledger();
        ledger
            .record_decision(&DecisionRecord::new(PokemonId::new(3), Appraisal::Smashed, ["ice"]))
            .unwrap();

        let mut batch = WriteBatch::new();
        batch.put(&StoreKey::counter(Appraisal::Smashed, &TypeName::from("ice")), &0u32).unwrap();
        let mut store = ledger.into_store();
        store.apply(batch).unwrap();
        let mut ledger = SessionLedger::new(store);

        ledger.undo_last_decision().unwrap();
        assert_eq!(ledger.counter(Appraisal::Smashed, &TypeName::from("ice")).unwrap(), 0);
    }

    #[test]
    fn test_history_rebuilds_order() {
        let mut ledger = ledger();
        let decisions = [
            DecisionRecord::new(PokemonId::new(1), Appraisal::Smashed, ["grass", "poison"]),
            DecisionRecord::new(PokemonId::new(2), Appraisal::Passed, ["grass", "poison"]),
            DecisionRecord::new(PokemonId::new(3), Appraisal::Smashed, ["grass", "poison"]),
            DecisionRecord::new(PokemonId::new(4), Appraisal::Passed, ["fire"]),
        ];
        for decision in &decisions {
            ledger.record_decision(decision).unwrap();
        }

        assert_eq!(ledger.history().unwrap(), decisions.to_vec());
    }

    #[test]
    fn test_history_detects_misalignment() {
        let mut store = MemoryStore::new();
        store.insert_raw("appraisals", r#"["smashed","smashed"]"#);
        store.insert_raw("listOfTypes", r#"["grass","fire"]"#);
        store.insert_raw("smashedIDs", "[1]");
        let ledger = SessionLedger::new(store);

        assert!(matches!(
            ledger.history(),
            Err(GameError::Store(StoreError::Inconsistent(_)))
        ));
    }

    #[test]
    fn test_reads_legacy_string_ids() {
        let mut store = MemoryStore::new();
        store.insert_raw("smashedIDs", r#"["2","3"]"#);
        store.insert_raw("appraisals", r#"["smashed","smashed"]"#);
        store.insert_raw("listOfTypes", r#"["grass","grass"]"#);
        store.insert_raw("counter:smashed:grass", "2");
        store.insert_raw("lastPokemonId", "3");
        let mut ledger = SessionLedger::new(store);

        assert_eq!(ledger.last_id().unwrap(), Some(PokemonId::new(3)));
        let undone = ledger.undo_last_decision().unwrap();
        assert_eq!(undone.id, PokemonId::new(3));
        assert_eq!(ledger.last_id().unwrap(), Some(PokemonId::new(2)));
        assert_eq!(ledger.counter(Appraisal::Smashed, &grass()).unwrap(), 1);
    }

    #[test]
    fn test_corrupt_value_is_reported() {
        let mut store = MemoryStore::new();
        store.insert_raw("appraisals", r#"["liked"]"#);
        let ledger = SessionLedger::new(store);

        assert!(matches!(
            ledger.appraisals(),
            Err(GameError::Store(StoreError::Corrupt { .. }))
        ));
    }

    #[test]
    fn test_results_summary() {
        let mut ledger = ledger();
        ledger
            .record_decision(&DecisionRecord::new(PokemonId::new(1), Appraisal::Smashed, ["grass", "poison"]))
            .unwrap();
        ledger
            .record_decision(&DecisionRecord::new(PokemonId::new(2), Appraisal::Passed, ["grass"]))
            .unwrap();

        let summary = ledger.results_summary().unwrap();
        assert_eq!(summary.smashed, vec![PokemonId::new(1)]);
        assert_eq!(summary.passed, vec![PokemonId::new(2)]);
        assert_eq!(summary.text(), "You smashed 1 and passed 1 Pokémon");

        let grass_tally = summary.tally_for(&grass()).unwrap();
        assert_eq!((grass_tally.smashed, grass_tally.passed), (1, 1));
        assert_eq!(summary.by_type.len(), 2);
        assert_eq!(summary.by_type[0].type_name, grass());
    }

    #[test]
    fn test_reset() {
        let mut ledger = ledger();
        ledger
            .record_decision(&DecisionRecord::new(PokemonId::new(1), Appraisal::Smashed, ["grass"]))
            .unwrap();
        ledger.reset().unwrap();

        assert!(ledger.is_empty().unwrap());
        assert_eq!(ledger.last_id().unwrap(), None);
        assert!(ledger.counters().unwrap().is_empty());
    }
}
