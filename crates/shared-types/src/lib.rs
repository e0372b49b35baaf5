pub mod jurisdiction;
pub mod types;

pub use jurisdiction::Jurisdiction;
pub use types::{ComplianceReport, Flag, FlagGroup, Rule, RuleSet, Severity, SourceCitation};
