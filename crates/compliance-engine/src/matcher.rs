//! Per-unit phrase matcher.
//!
//! Matching is literal, case-insensitive substring containment. Known
//! precision limitation: a short phrase can match inside an unrelated word
//! (e.g. "doe" inside "does"). Word-boundary guarding is deliberately not
//! applied; it would change which documents flag.

use shared_types::{Flag, RuleSet};

/// Evaluate every rule in `rule_set` against one text unit.
///
/// A rule fires when any of its trigger phrases occurs in the lowercased
/// unit, and fires at most once per unit regardless of how many phrases
/// match. Rules with no trigger phrases are advisory entries and never
/// fire. Total over its input: any unit, including the empty string, yields
/// a well-defined (possibly empty) flag list.
pub fn match_unit(unit_index: usize, text: &str, rule_set: &RuleSet) -> Vec<Flag> {
    let text_lower = text.to_lowercase();
    let mut flags = Vec::new();

    for (key, rule) in &rule_set.rules {
        if rule.flagged_phrases.is_empty() {
            continue;
        }
        let fired = rule
            .flagged_phrases
            .iter()
            .any(|phrase| text_lower.contains(&phrase.to_lowercase()));
        if fired {
            flags.push(Flag::for_rule(key, unit_index, rule));
        }
    }

    flags
}
