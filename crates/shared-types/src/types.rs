//! Shared data model for the offer-letter compliance engine.
//!
//! Field names are a wire contract: the downstream report renderer depends
//! on the camelCase shape (`criticalIssues.count`, `criticalIssues.items`,
//! `warnings.count`, `warnings.items`, `isCompliant`) and rule authors
//! submit batches using the same camelCase rule fields.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Severity of a compliance rule. Closed set; any other wire value fails
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Critical/blocking issue. Any matched `error` rule makes the document
    /// non-compliant.
    Error,
    /// Needs review; does not affect the compliance verdict.
    Warning,
    /// Advisory only.
    Info,
}

/// One compliance check: trigger phrases plus the guidance shown when it
/// fires. Rules with no `flaggedPhrases` never fire from text scanning and
/// exist purely as advisory corpus entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub severity: Severity,
    pub message: String,
    #[serde(default)]
    pub flagged_phrases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub law_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_required: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_practice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<Vec<String>>,
    /// Provenance stamp written by the rule validator on merge, never
    /// supplied by the author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,
}

/// A citation backing a jurisdiction's ruleset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceCitation {
    pub url: String,
    pub title: String,
    pub access_date: NaiveDate,
}

/// The named collection of rules for one jurisdiction. Rule keys are unique
/// within a jurisdiction; the same key (e.g. `nonCompete`) may exist in
/// other jurisdictions with a different rule body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    pub name: String,
    pub last_updated: NaiveDate,
    #[serde(default)]
    pub sources: Vec<SourceCitation>,
    #[serde(default)]
    pub rules: BTreeMap<String, Rule>,
}

impl RuleSet {
    /// Empty ruleset for a jurisdiction with no rules on file.
    pub fn empty(name: &str, as_of: NaiveDate) -> Self {
        Self {
            name: name.to_string(),
            last_updated: as_of,
            sources: Vec::new(),
            rules: BTreeMap::new(),
        }
    }

    /// Advisory entries that carry no trigger phrases. These never appear in
    /// a compliance report; a presentation layer may surface them as
    /// jurisdiction best practices.
    pub fn best_practices(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules
            .iter()
            .filter(|(_, rule)| rule.flagged_phrases.is_empty())
            .map(|(key, rule)| (key.as_str(), rule))
    }
}

/// One fired rule against one text unit. Carries a snapshot of the rule's
/// guidance fields at match time, so later corpus edits never rewrite an
/// existing report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flag {
    pub rule_key: String,
    pub severity: Severity,
    pub message: String,
    /// Index of the offending text unit within the analyzed document.
    pub unit_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub law_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_required: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_practice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,
}

impl Flag {
    /// Build a flag from a rule at match time, copying all guidance fields.
    pub fn for_rule(rule_key: &str, unit_index: usize, rule: &Rule) -> Self {
        Self {
            rule_key: rule_key.to_string(),
            severity: rule.severity,
            message: rule.message.clone(),
            unit_index,
            law_reference: rule.law_reference.clone(),
            source: rule.source.clone(),
            detailed_explanation: rule.detailed_explanation.clone(),
            action_required: rule.action_required.clone(),
            suggestion: rule.suggestion.clone(),
            alternative_language: rule.alternative_language.clone(),
            requirement: rule.requirement.clone(),
            best_practice: rule.best_practice.clone(),
            process: rule.process.clone(),
            date_added: rule.date_added,
        }
    }
}

/// One severity bucket of a report: a count plus the ordered flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagGroup {
    pub count: usize,
    pub items: Vec<Flag>,
}

impl FlagGroup {
    pub fn empty() -> Self {
        Self {
            count: 0,
            items: Vec::new(),
        }
    }

    pub fn from_items(items: Vec<Flag>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

/// The severity-bucketed result of analyzing one document against one
/// jurisdiction. Created fresh per analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub critical_issues: FlagGroup,
    pub warnings: FlagGroup,
    /// Tracked for completeness; informational flags never drive the verdict.
    pub informational: FlagGroup,
    pub is_compliant: bool,
}

impl ComplianceReport {
    /// The report for a document where no rules matched, or for a
    /// jurisdiction with no rules on file. Compliant by definition.
    pub fn empty() -> Self {
        Self {
            critical_issues: FlagGroup::empty(),
            warnings: FlagGroup::empty(),
            informational: FlagGroup::empty(),
            is_compliant: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn minimal_rule(severity: Severity) -> Rule {
        Rule {
            severity,
            message: "test rule".to_string(),
            flagged_phrases: vec!["phrase".to_string()],
            law_reference: None,
            source: None,
            detailed_explanation: None,
            action_required: None,
            suggestion: None,
            alternative_language: None,
            requirement: None,
            best_practice: None,
            process: None,
            date_added: None,
        }
    }

    #[test]
    fn test_severity_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
        assert_eq!(
            serde_json::from_str::<Severity>("\"warning\"").unwrap(),
            Severity::Warning
        );
    }

    #[test]
    fn test_severity_rejects_values_outside_closed_set() {
        assert!(serde_json::from_str::<Severity>("\"critical\"").is_err());
        assert!(serde_json::from_str::<Severity>("\"Error\"").is_err());
    }

    #[test]
    fn test_rule_deserializes_from_camel_case_author_payload() {
        let rule: Rule = serde_json::from_str(
            r#"{
                "severity": "error",
                "message": "Remove salary history question",
                "flaggedPhrases": ["salary history"],
                "lawReference": "Labor Code 432.3"
            }"#,
        )
        .unwrap();
        assert_eq!(rule.severity, Severity::Error);
        assert_eq!(rule.law_reference.as_deref(), Some("Labor Code 432.3"));
        assert!(rule.date_added.is_none());
    }

    #[test]
    fn test_report_serializes_with_contract_field_names() {
        let mut report = ComplianceReport::empty();
        report.critical_issues =
            FlagGroup::from_items(vec![Flag::for_rule("x", 0, &minimal_rule(Severity::Error))]);
        report.is_compliant = false;

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["criticalIssues"]["count"], 1);
        assert_eq!(json["criticalIssues"]["items"][0]["ruleKey"], "x");
        assert_eq!(json["warnings"]["count"], 0);
        assert_eq!(json["isCompliant"], false);
    }

    #[test]
    fn test_flag_copies_guidance_fields_from_rule() {
        let mut rule = minimal_rule(Severity::Warning);
        rule.suggestion = Some("rephrase".to_string());
        rule.process = Some(vec!["step one".to_string()]);

        let flag = Flag::for_rule("payTransparency", 3, &rule);
        assert_eq!(flag.rule_key, "payTransparency");
        assert_eq!(flag.unit_index, 3);
        assert_eq!(flag.severity, Severity::Warning);
        assert_eq!(flag.suggestion.as_deref(), Some("rephrase"));
        assert_eq!(flag.process, rule.process);
    }

    #[test]
    fn test_best_practices_are_the_phrase_less_rules() {
        let mut set = RuleSet::empty("California", NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
        let mut advisory = minimal_rule(Severity::Info);
        advisory.flagged_phrases.clear();
        set.rules.insert("atWill".to_string(), advisory);
        set.rules
            .insert("nonCompete".to_string(), minimal_rule(Severity::Error));

        let keys: Vec<&str> = set.best_practices().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["atWill"]);
    }
}
