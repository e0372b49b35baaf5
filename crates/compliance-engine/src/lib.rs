pub mod analyzer;
pub mod authoring;
pub mod corpus;
pub mod error;
pub mod matcher;

pub use authoring::MergeOutcome;
pub use corpus::RuleStore;
pub use error::AuthoringError;
pub use shared_types::{ComplianceReport, Flag, Jurisdiction, Rule, RuleSet, Severity};

/// ComplianceEngine entry point: owns the rule store and exposes document
/// analysis plus the rule-authoring workflow.
pub struct ComplianceEngine {
    store: RuleStore,
}

impl ComplianceEngine {
    /// Engine loaded with the shipped per-jurisdiction rulesets.
    pub fn new() -> Self {
        Self {
            store: RuleStore::with_builtin_rules(),
        }
    }

    /// Engine over a caller-supplied store.
    pub fn with_store(store: RuleStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    /// Analyze raw document text against one jurisdiction's rules.
    pub fn analyze_document(&self, text: &str, jurisdiction: &Jurisdiction) -> ComplianceReport {
        analyzer::analyze_document(text, jurisdiction, &self.store)
    }

    /// Analyze pre-segmented text units (for callers that segment the
    /// document themselves).
    pub fn analyze_units<S: AsRef<str>>(
        &self,
        units: &[S],
        jurisdiction: &Jurisdiction,
    ) -> ComplianceReport {
        analyzer::analyze_units(units, jurisdiction, &self.store)
    }

    /// Snapshot of one jurisdiction's ruleset, if any rules are on file.
    pub fn rule_set(&self, jurisdiction: &Jurisdiction) -> Option<RuleSet> {
        self.store.get(jurisdiction)
    }

    /// Validate an author-submitted JSON rule batch and merge it into the
    /// corpus for the given jurisdiction. On validation failure the corpus
    /// is left unchanged and the error message is suitable for direct
    /// display to the author.
    pub fn import_rules(
        &self,
        jurisdiction: &Jurisdiction,
        payload: &str,
    ) -> Result<MergeOutcome, AuthoringError> {
        let batch = authoring::parse_rule_batch(payload)?;
        Ok(authoring::merge_rule_batch(&self.store, jurisdiction, batch))
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_flags_risky_offer_letter() {
        let engine = ComplianceEngine::new();
        let text = "We are pleased to offer you the role of Analyst. \
                    Compensation will be determined based on your salary history. \
                    You agree to a non-compete covering the state for two years. \
                    Final salary is DOE.";
        let report = engine.analyze_document(text, &Jurisdiction::new("CA"));

        assert!(!report.is_compliant);
        let critical_keys: Vec<&str> = report
            .critical_issues
            .items
            .iter()
            .map(|f| f.rule_key.as_str())
            .collect();
        assert!(critical_keys.contains(&"salaryHistory"));
        assert!(critical_keys.contains(&"nonCompete"));
        assert_eq!(report.warnings.items[0].rule_key, "payTransparency");
    }

    #[test]
    fn test_same_letter_reads_differently_across_jurisdictions() {
        let engine = ComplianceEngine::new();
        let text = "Please provide your salary history.";

        let ca = engine.analyze_document(text, &Jurisdiction::new("CA"));
        let tx = engine.analyze_document(text, &Jurisdiction::new("TX"));

        assert!(!ca.is_compliant);
        assert!(tx.is_compliant);
        assert_eq!(tx.critical_issues.count, 0);
        assert_eq!(tx.warnings.count, 0);
    }

    #[test]
    fn test_engine_accepts_clean_offer_letter() {
        let engine = ComplianceEngine::new();
        let text = "We are pleased to offer you the position of Staff Engineer \
                    at an annual salary of $180,000 to $210,000. Your employment \
                    is at-will. This offer is contingent on a background check.";
        let report = engine.analyze_document(text, &Jurisdiction::new("CA"));

        // Background check language draws a warning but nothing blocking.
        assert!(report.is_compliant);
        assert_eq!(report.critical_issues.count, 0);
    }

    #[test]
    fn test_authoring_round_trip_through_the_engine() {
        let engine = ComplianceEngine::new();
        let zz = Jurisdiction::new("ZZ");

        let outcome = engine
            .import_rules(
                &zz,
                r#"{"probationPeriod": {
                    "severity": "warning",
                    "message": "Probation language is restricted here",
                    "flaggedPhrases": ["probationary period"]
                }}"#,
            )
            .unwrap();
        assert_eq!(outcome.rules_added, 1);

        let report = engine.analyze_document(
            "There will be a probationary period of 90 days.",
            &zz,
        );
        assert_eq!(report.warnings.count, 1);
        assert!(report.is_compliant);
    }

    #[test]
    fn test_rejected_batch_reports_a_displayable_error() {
        let engine = ComplianceEngine::new();
        let err = engine
            .import_rules(
                &Jurisdiction::new("CA"),
                r#"{"x": {"severity": "critical", "message": "m", "flaggedPhrases": ["a"]}}"#,
            )
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("severity"));
        assert!(message.contains("'x'"));

        // Corpus unchanged: the CA ruleset still has its shipped rules.
        let set = engine.rule_set(&Jurisdiction::new("CA")).unwrap();
        assert!(!set.rules.contains_key("x"));
    }
}
