//! Rule authoring: validation and merge of administrator-submitted rule
//! batches.
//!
//! A batch is a JSON object mapping rule keys to rule bodies. Validation
//! runs against the raw JSON so failures can name the offending rule key
//! and field; only a batch that passes every check is deserialized into
//! typed rules and merged. Validation failure leaves the corpus untouched.

use crate::corpus::RuleStore;
use crate::error::AuthoringError;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use shared_types::{Jurisdiction, Rule, RuleSet};
use std::collections::BTreeMap;
use tracing::info;

/// Source stamped on merged rules whose author did not name one.
pub const DEFAULT_SOURCE: &str = "Manual Entry";

/// Result of a successful merge, suitable for display to the author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeOutcome {
    pub jurisdiction: Jurisdiction,
    pub rules_added: usize,
}

/// Validate a candidate rule batch without touching the corpus.
///
/// Checks run in order and short-circuit at the first failure: the batch
/// must be an object; then per entry (in key order) the severity must be
/// one of the three closed values, the message must be a non-empty string,
/// and the trigger phrase list must be present and non-empty.
pub fn validate_rule_batch(candidate: &Value) -> Result<(), AuthoringError> {
    let Some(entries) = candidate.as_object() else {
        return Err(AuthoringError::NotAnObject);
    };

    for (key, body) in entries {
        let Some(body) = body.as_object() else {
            return Err(AuthoringError::RuleNotAnObject { key: key.clone() });
        };

        match body.get("severity") {
            None => {
                return Err(AuthoringError::MissingSeverity { key: key.clone() });
            }
            Some(Value::String(s)) if s == "error" || s == "warning" || s == "info" => {}
            Some(other) => {
                return Err(AuthoringError::InvalidSeverity {
                    key: key.clone(),
                    value: other.to_string(),
                });
            }
        }

        match body.get("message") {
            Some(Value::String(s)) if !s.is_empty() => {}
            _ => {
                return Err(AuthoringError::InvalidMessage { key: key.clone() });
            }
        }

        match body.get("flaggedPhrases") {
            Some(Value::Array(phrases)) if !phrases.is_empty() => {}
            _ => {
                return Err(AuthoringError::InvalidPhrases { key: key.clone() });
            }
        }
    }

    Ok(())
}

/// Parse and validate an author-submitted JSON payload into typed rules.
pub fn parse_rule_batch(payload: &str) -> Result<BTreeMap<String, Rule>, AuthoringError> {
    let candidate: Value = serde_json::from_str(payload)?;
    validate_rule_batch(&candidate)?;

    let Value::Object(entries) = candidate else {
        // validate_rule_batch already rejected non-objects
        return Err(AuthoringError::NotAnObject);
    };

    let mut batch = BTreeMap::new();
    for (key, body) in entries {
        let rule: Rule =
            serde_json::from_value(body).map_err(|err| AuthoringError::MalformedRule {
                key: key.clone(),
                detail: err.to_string(),
            })?;
        batch.insert(key, rule);
    }
    Ok(batch)
}

/// Merge a validated batch into the corpus for one jurisdiction.
///
/// Upsert per key: existing keys are fully replaced, new keys added, keys
/// absent from the batch left untouched. Each merged rule is stamped with a
/// `dateAdded` provenance timestamp, and `source` defaults to
/// [`DEFAULT_SOURCE`] when the author omitted it. A jurisdiction with no
/// ruleset on file gets a fresh one created before merging.
pub fn merge_rule_batch(
    store: &RuleStore,
    jurisdiction: &Jurisdiction,
    batch: BTreeMap<String, Rule>,
) -> MergeOutcome {
    let now = Utc::now();
    let today = now.date_naive();

    let rules_added = store.update(|sets| {
        let set = sets
            .entry(jurisdiction.clone())
            .or_insert_with(|| RuleSet::empty(jurisdiction.display_name(), today));
        set.last_updated = today;

        let mut added = 0;
        for (key, mut rule) in batch {
            rule.date_added = Some(now);
            if rule.source.is_none() {
                rule.source = Some(DEFAULT_SOURCE.to_string());
            }
            set.rules.insert(key, rule);
            added += 1;
        }
        added
    });

    info!(%jurisdiction, rules_added, "merged rule batch into corpus");
    MergeOutcome {
        jurisdiction: jurisdiction.clone(),
        rules_added,
    }
}
