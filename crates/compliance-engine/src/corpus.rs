//! The rule corpus: per-jurisdiction rulesets behind a shared store.
//!
//! Built-in rulesets ship as JSON resources compiled into the binary, one
//! file per jurisdiction. The store is the single shared piece of state in
//! the engine; reads hand out snapshot clones so a document analysis always
//! sees one consistent rule version even if an administrative merge lands
//! mid-run.

use shared_types::{Jurisdiction, RuleSet};
use std::collections::BTreeMap;
use std::sync::RwLock;
use tracing::debug;

/// Built-in rulesets, keyed by jurisdiction code.
const BUILTIN_RULESETS: &[(&str, &str)] = &[
    ("CA", include_str!("../rules/ca.json")),
    ("CO", include_str!("../rules/co.json")),
    ("IL", include_str!("../rules/il.json")),
    ("NY", include_str!("../rules/ny.json")),
    ("TX", include_str!("../rules/tx.json")),
    ("WA", include_str!("../rules/wa.json")),
];

/// Two-level rule container: jurisdiction code to rule key to rule.
///
/// Lookups by unknown jurisdiction are not errors; callers treat a `None`
/// as "no rules apply". Merges from the authoring workflow go through
/// [`crate::authoring::merge_rule_batch`], which serializes writers behind
/// the interior lock.
pub struct RuleStore {
    sets: RwLock<BTreeMap<Jurisdiction, RuleSet>>,
}

impl RuleStore {
    /// A store with no rulesets at all. Mostly useful in tests and for
    /// deployments that author their entire corpus at runtime.
    pub fn empty() -> Self {
        Self {
            sets: RwLock::new(BTreeMap::new()),
        }
    }

    /// A store loaded with the shipped per-jurisdiction rulesets.
    pub fn with_builtin_rules() -> Self {
        let mut sets = BTreeMap::new();
        for (code, raw) in BUILTIN_RULESETS {
            let set: RuleSet = serde_json::from_str(raw)
                .expect("built-in ruleset resources are validated by tests");
            debug!(jurisdiction = %code, rules = set.rules.len(), "loaded built-in ruleset");
            sets.insert(Jurisdiction::new(code), set);
        }
        Self {
            sets: RwLock::new(sets),
        }
    }

    /// Snapshot of one jurisdiction's ruleset. `None` means no rules are on
    /// file for the code; analysis treats that as an empty ruleset.
    pub fn get(&self, jurisdiction: &Jurisdiction) -> Option<RuleSet> {
        self.sets
            .read()
            .expect("rule store lock poisoned")
            .get(jurisdiction)
            .cloned()
    }

    /// Jurisdiction codes currently loaded, in sorted order.
    pub fn jurisdictions(&self) -> Vec<Jurisdiction> {
        self.sets
            .read()
            .expect("rule store lock poisoned")
            .keys()
            .cloned()
            .collect()
    }

    /// Run a mutation against the full jurisdiction map under the write
    /// lock. Used by the authoring merge; keeps lock handling in one place.
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut BTreeMap<Jurisdiction, RuleSet>) -> R) -> R {
        let mut sets = self.sets.write().expect("rule store lock poisoned");
        f(&mut sets)
    }
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::with_builtin_rules()
    }
}
