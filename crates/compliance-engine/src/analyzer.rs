//! Document-level aggregation: run the matcher over every text unit and
//! bucket the collected flags into a compliance report.

use crate::corpus::RuleStore;
use crate::matcher;
use shared_types::{ComplianceReport, Flag, FlagGroup, Jurisdiction, Severity};
use tracing::debug;

/// Analyze pre-segmented text units against one jurisdiction's rules.
///
/// The relevant ruleset is snapshotted once at the start of the run, so all
/// flags in one report reflect one consistent rule version even if a merge
/// lands concurrently. Flags keep unit order, then rule order within a
/// unit; no re-sorting by severity. An unknown jurisdiction yields an
/// empty, compliant report.
pub fn analyze_units<S: AsRef<str>>(
    units: &[S],
    jurisdiction: &Jurisdiction,
    store: &RuleStore,
) -> ComplianceReport {
    let Some(rule_set) = store.get(jurisdiction) else {
        debug!(%jurisdiction, "no ruleset on file, document is compliant by definition");
        return ComplianceReport::empty();
    };

    let mut critical: Vec<Flag> = Vec::new();
    let mut warnings: Vec<Flag> = Vec::new();
    let mut informational: Vec<Flag> = Vec::new();

    for (index, unit) in units.iter().enumerate() {
        for flag in matcher::match_unit(index, unit.as_ref(), &rule_set) {
            match flag.severity {
                Severity::Error => critical.push(flag),
                Severity::Warning => warnings.push(flag),
                Severity::Info => informational.push(flag),
            }
        }
    }

    debug!(
        %jurisdiction,
        units = units.len(),
        critical = critical.len(),
        warnings = warnings.len(),
        "document analysis complete"
    );

    let is_compliant = critical.is_empty();
    ComplianceReport {
        critical_issues: FlagGroup::from_items(critical),
        warnings: FlagGroup::from_items(warnings),
        informational: FlagGroup::from_items(informational),
        is_compliant,
    }
}

/// Analyze a whole document, segmenting it into units first.
pub fn analyze_document(
    text: &str,
    jurisdiction: &Jurisdiction,
    store: &RuleStore,
) -> ComplianceReport {
    let units = segment_units(text);
    analyze_units(&units, jurisdiction, store)
}

/// Split document text into sentence-sized units on terminal punctuation
/// and line breaks. Callers with their own segmentation can bypass this and
/// call [`analyze_units`] directly.
pub fn segment_units(text: &str) -> Vec<String> {
    let mut units = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?' | '\n') {
            let unit = current.trim();
            if !unit.is_empty() {
                units.push(unit.to_string());
            }
            current.clear();
        }
    }
    let unit = current.trim();
    if !unit.is_empty() {
        units.push(unit.to_string());
    }

    units
}
