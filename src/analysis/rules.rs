//! Fixed heuristic rule tables for entity and clause extraction
//!
//! Rules are ordered; extraction walks each table top to bottom so ids and
//! dedup behavior stay deterministic across runs.

use super::risk::{RiskFamily, RiskRules};
use crate::model::{ClauseKind, EntityKind};
use regex::Regex;

/// A keyword rule that contributes one entity when its pattern matches
pub(crate) struct EntityRule {
    pub pattern: Regex,
    pub name: &'static str,
    pub kind: EntityKind,
    pub role: &'static str,
    pub description: &'static str,
}

/// A keyword rule that contributes one clause when any keyword is present
pub(crate) struct ClauseRule {
    pub keywords: &'static [&'static str],
    pub title: &'static str,
    pub kind: ClauseKind,
    pub family: RiskFamily,
}

/// Ordered clause rule table
pub(crate) const CLAUSE_RULES: &[ClauseRule] = &[
    ClauseRule {
        keywords: &["rent", "payment", "monthly", "salary", "compensation", "fee"],
        title: "Payment Terms",
        kind: ClauseKind::Payment,
        family: RiskFamily::Payment,
    },
    ClauseRule {
        keywords: &["deposit", "security", "advance", "bond"],
        title: "Security Deposit",
        kind: ClauseKind::Security,
        family: RiskFamily::Deposit,
    },
    ClauseRule {
        keywords: &["terminate", "notice", "end", "expire", "cancel"],
        title: "Termination Notice",
        kind: ClauseKind::Termination,
        family: RiskFamily::Termination,
    },
    ClauseRule {
        keywords: &["maintenance", "repair", "upkeep", "damage"],
        title: "Maintenance Responsibility",
        kind: ClauseKind::Maintenance,
        family: RiskFamily::Maintenance,
    },
    ClauseRule {
        keywords: &["liability", "damage", "responsible", "indemnify"],
        title: "Liability and Damages",
        kind: ClauseKind::Liability,
        family: RiskFamily::Liability,
    },
    ClauseRule {
        keywords: &["confidential", "privacy", "non-disclosure", "proprietary"],
        title: "Confidentiality",
        kind: ClauseKind::Confidentiality,
        family: RiskFamily::Confidentiality,
    },
    ClauseRule {
        keywords: &["non-compete", "competing", "competition", "restrict"],
        title: "Non-Compete Clause",
        kind: ClauseKind::Other,
        family: RiskFamily::NonCompete,
    },
    ClauseRule {
        keywords: &["intellectual property", "ip", "patent", "copyright", "trademark"],
        title: "Intellectual Property",
        kind: ClauseKind::Other,
        family: RiskFamily::IntellectualProperty,
    },
    ClauseRule {
        keywords: &["force majeure", "act of god", "unforeseen", "circumstances"],
        title: "Force Majeure",
        kind: ClauseKind::Other,
        family: RiskFamily::ForceMajeure,
    },
    ClauseRule {
        keywords: &["governing law", "jurisdiction", "legal", "court"],
        title: "Governing Law",
        kind: ClauseKind::Other,
        family: RiskFamily::GoverningLaw,
    },
];

/// Compiled rule set built once per analyzer
pub(crate) struct RuleSet {
    /// Ordered entity keyword rules
    pub entity_rules: Vec<EntityRule>,
    /// Anchor phrases that may precede a literal party name
    pub anchors: Vec<Regex>,
    /// Crude looks-like-a-name filter for anchor captures
    pub name_shape: Regex,
    /// Numbered section heading, matched per line
    pub section_heading: Regex,
    /// Per-family risk decision tables
    pub risk: RiskRules,
}

impl RuleSet {
    pub fn new() -> Self {
        Self {
            entity_rules: vec![
                EntityRule {
                    pattern: Regex::new(r"(?i)landlord|lessor|owner").unwrap(),
                    name: "Landlord",
                    kind: EntityKind::Person,
                    role: "Lessor",
                    description: "The property owner who rents out the property",
                },
                EntityRule {
                    pattern: Regex::new(r"(?i)tenant|lessee|renter").unwrap(),
                    name: "Tenant",
                    kind: EntityKind::Person,
                    role: "Lessee",
                    description: "The party renting the property",
                },
                EntityRule {
                    pattern: Regex::new(r"(?i)employer|company|corporation|employing entity")
                        .unwrap(),
                    name: "Employer",
                    kind: EntityKind::Company,
                    role: "Employer",
                    description: "The company or organization providing employment",
                },
                EntityRule {
                    pattern: Regex::new(r"(?i)employee|worker|staff member").unwrap(),
                    name: "Employee",
                    kind: EntityKind::Person,
                    role: "Employee",
                    description: "The individual being employed",
                },
                EntityRule {
                    pattern: Regex::new(r"(?i)service provider|contractor|vendor").unwrap(),
                    name: "Service Provider",
                    kind: EntityKind::Company,
                    role: "Provider",
                    description: "The party providing services",
                },
                EntityRule {
                    pattern: Regex::new(r"(?i)client|customer|buyer").unwrap(),
                    name: "Client",
                    kind: EntityKind::Company,
                    role: "Client",
                    description: "The party receiving services",
                },
                EntityRule {
                    pattern: Regex::new(r"(?i)property management|management company").unwrap(),
                    name: "Property Management",
                    kind: EntityKind::Company,
                    role: "Agent",
                    description: "Third-party property management service",
                },
                EntityRule {
                    pattern: Regex::new(r"(?i)guarantor|surety").unwrap(),
                    name: "Guarantor",
                    kind: EntityKind::Person,
                    role: "Guarantor",
                    description: "Party providing financial guarantee",
                },
                EntityRule {
                    pattern: Regex::new(r"(?i)\bagent\b|representative").unwrap(),
                    name: "Agent",
                    kind: EntityKind::Person,
                    role: "Agent",
                    description: "Authorized representative acting on behalf of a party",
                },
            ],
            anchors: vec![
                Regex::new(r"(?i)(?:agreement between|between)\s+([A-Z][A-Za-z\s&.,]+?)(?:\s+and\b|\s*[(,\n]|$)").unwrap(),
                Regex::new(r"(?i)landlord:\s*([A-Z][A-Za-z\s&.,]+?)(?:\s*[(,\n]|$)").unwrap(),
                Regex::new(r"(?i)tenant:\s*([A-Z][A-Za-z\s&.,]+?)(?:\s*[(,\n]|$)").unwrap(),
                Regex::new(r"(?i)employer:\s*([A-Z][A-Za-z\s&.,]+?)(?:\s*[(,\n]|$)").unwrap(),
                Regex::new(r"(?i)employee:\s*([A-Z][A-Za-z\s&.,]+?)(?:\s*[(,\n]|$)").unwrap(),
            ],
            name_shape: Regex::new(r"^[A-Z][A-Za-z\s&.,]+$").unwrap(),
            section_heading: Regex::new(r"^\s*\d+\.?\s+([A-Z][^.]*?)\s*$").unwrap(),
            risk: RiskRules::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clause_rules_are_ordered_and_unique() {
        let titles: Vec<&str> = CLAUSE_RULES.iter().map(|r| r.title).collect();
        let mut deduped = titles.clone();
        deduped.dedup();
        assert_eq!(titles.len(), 10);
        assert_eq!(titles, deduped);
        assert_eq!(titles[0], "Payment Terms");
    }

    #[test]
    fn agent_rule_does_not_match_agreement() {
        let rules = RuleSet::new();
        let agent = rules
            .entity_rules
            .iter()
            .find(|r| r.name == "Agent")
            .unwrap();
        assert!(!agent.pattern.is_match("This Agreement is entered into"));
        assert!(agent.pattern.is_match("the authorized agent of the owner"));
    }

    #[test]
    fn section_heading_matches_numbered_lines_only() {
        let rules = RuleSet::new();
        let caps = rules.section_heading.captures("4. SECURITY DEPOSIT").unwrap();
        assert_eq!(&caps[1], "SECURITY DEPOSIT");
        assert!(rules.section_heading.captures("no numbering here").is_none());
        assert!(rules.section_heading.captures("4. lowercase title").is_none());
    }
}
