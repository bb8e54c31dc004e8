//! Clause extraction passes
//!
//! The keyword pass walks the fixed rule table and emits one clause per rule
//! with any keyword present in the text. The section pass then scans for
//! numbered headings ("4. SECURITY DEPOSIT") and emits a catch-all clause for
//! each heading not already covered by a keyword clause.

use super::risk::RiskFamily;
use super::rules::{RuleSet, CLAUSE_RULES};
use super::types::RiskScope;
use crate::model::{Clause, ClauseId, ClauseKind, Entity, EntityId};

/// Section headings shorter or longer than this are ignored
const TITLE_MIN_LEN: usize = 5;
const TITLE_MAX_LEN: usize = 99;

/// Clauses plus the keyword tokens each was matched from, kept parallel for
/// the related-clause linking pass.
pub(crate) struct ClauseExtraction {
    pub clauses: Vec<Clause>,
    pub keyword_sets: Vec<Vec<String>>,
}

impl ClauseExtraction {
    pub fn new() -> Self {
        Self {
            clauses: Vec::new(),
            keyword_sets: Vec::new(),
        }
    }
}

/// Keyword-rule pass over the full text
pub(crate) fn extract_keyword_clauses(
    text: &str,
    entities: &[Entity],
    rules: &RuleSet,
    scope: RiskScope,
    out: &mut ClauseExtraction,
) {
    let lower = text.to_lowercase();

    for rule in CLAUSE_RULES {
        if !rule.keywords.iter().any(|kw| lower.contains(kw)) {
            continue;
        }

        let content = excerpt(text, rule.keywords);
        let scan = scan_text(text, &content, scope);
        let clause = Clause {
            id: ClauseId::from_index(out.clauses.len() + 1),
            title: rule.title.to_string(),
            kind: rule.kind,
            risk_level: rules.risk.assess(rule.family, scan),
            explanation: rules.risk.explain(rule.family, scan, rule.title),
            entities: relevant_entities(entities, rule.keywords),
            related_clauses: Vec::new(),
            content,
        };

        out.clauses.push(clause);
        out.keyword_sets
            .push(rule.keywords.iter().map(|kw| kw.to_lowercase()).collect());
    }
}

/// Numbered-section pass over the full text
///
/// A heading similar to an existing clause title (first word contained in the
/// title, or vice versa) is considered already covered and skipped.
pub(crate) fn extract_section_clauses(
    text: &str,
    entities: &[Entity],
    rules: &RuleSet,
    scope: RiskScope,
    out: &mut ClauseExtraction,
) {
    for line in text.lines() {
        let Some(caps) = rules.section_heading.captures(line) else {
            continue;
        };
        let title = caps[1].trim().to_string();
        if title.len() < TITLE_MIN_LEN || title.len() > TITLE_MAX_LEN {
            continue;
        }
        if is_already_covered(&title, &out.clauses) {
            continue;
        }

        let title_words: Vec<String> = title
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .collect();
        let content_keys: Vec<&str> = title
            .split_whitespace()
            .take(3)
            .collect();
        let content = excerpt(text, &content_keys);
        let scan = scan_text(text, &content, scope);

        let clause = Clause {
            id: ClauseId::from_index(out.clauses.len() + 1),
            title: title.clone(),
            kind: ClauseKind::Other,
            risk_level: rules.risk.assess(RiskFamily::Section, scan),
            explanation: rules.risk.explain(RiskFamily::Section, scan, &title),
            entities: relevant_entities(entities, &title_words),
            related_clauses: Vec::new(),
            content,
        };

        out.clauses.push(clause);
        out.keyword_sets.push(title_words);
    }
}

fn is_already_covered(title: &str, clauses: &[Clause]) -> bool {
    let lower = title.to_lowercase();
    let first_word = lower.split_whitespace().next().unwrap_or("");

    clauses.iter().any(|clause| {
        let existing = clause.title.to_lowercase();
        let existing_first = existing.split_whitespace().next().unwrap_or("");
        (!first_word.is_empty() && existing.contains(first_word))
            || (!existing_first.is_empty() && lower.contains(existing_first))
    })
}

/// Scan text for risk assessment: the whole document or the clause excerpt
fn scan_text<'a>(text: &'a str, content: &'a str, scope: RiskScope) -> &'a str {
    match scope {
        RiskScope::Document => text,
        RiskScope::Clause => content,
    }
}

/// First two sentences containing any of the keywords, or a generic
/// placeholder when nothing matches verbatim.
pub(crate) fn excerpt<S: AsRef<str>>(text: &str, keywords: &[S]) -> String {
    let matching: Vec<&str> = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            keywords
                .iter()
                .any(|kw| lower.contains(&kw.as_ref().to_lowercase()))
        })
        .take(2)
        .collect();

    if matching.is_empty() {
        let keys: Vec<&str> = keywords.iter().map(|kw| kw.as_ref()).collect();
        return format!("Clause related to: {}", keys.join(", "));
    }
    format!("{}.", matching.join(". "))
}

/// Keyword families that pin a clause to specific parties
const ENTITY_FAMILIES: &[(&str, &[&str])] = &[
    ("Tenant", &["tenant", "lessee", "renter"]),
    ("Landlord", &["landlord", "lessor", "owner"]),
    ("Employer", &["employer", "company"]),
    ("Employee", &["employee", "worker"]),
];

/// Resolve which extracted entities a clause involves.
///
/// Family matches resolve against entities actually present in this run, so
/// clause entity lists never dangle; with no family member resolved, every
/// known entity is attached.
pub(crate) fn relevant_entities<S: AsRef<str>>(entities: &[Entity], keywords: &[S]) -> Vec<EntityId> {
    let mut relevant: Vec<EntityId> = Vec::new();

    for (name, family) in ENTITY_FAMILIES {
        let keyword_hit = keywords
            .iter()
            .any(|kw| family.contains(&kw.as_ref().to_lowercase().as_str()));
        if !keyword_hit {
            continue;
        }
        if let Some(entity) = entities.iter().find(|e| e.name == *name) {
            if !relevant.contains(&entity.id) {
                relevant.push(entity.id.clone());
            }
        }
    }

    if relevant.is_empty() {
        return entities.iter().map(|e| e.id.clone()).collect();
    }
    relevant
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::entities::extract_entities;
    use crate::model::RiskLevel;

    fn keyword_pass(text: &str, scope: RiskScope) -> ClauseExtraction {
        let rules = RuleSet::new();
        let entities = extract_entities(text, &rules);
        let mut out = ClauseExtraction::new();
        extract_keyword_clauses(text, &entities, &rules, scope, &mut out);
        out
    }

    fn full_pass(text: &str, scope: RiskScope) -> ClauseExtraction {
        let rules = RuleSet::new();
        let entities = extract_entities(text, &rules);
        let mut out = ClauseExtraction::new();
        extract_keyword_clauses(text, &entities, &rules, scope, &mut out);
        extract_section_clauses(text, &entities, &rules, scope, &mut out);
        out
    }

    #[test]
    fn keyword_pass_emits_one_clause_per_matching_rule() {
        let out = keyword_pass(
            "The tenant shall pay monthly rent. A security deposit of 2 months rent applies.",
            RiskScope::Document,
        );
        let titles: Vec<&str> = out.clauses.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Payment Terms", "Security Deposit"]);
        assert_eq!(out.clauses[0].id.as_str(), "clause-1");
        assert_eq!(out.clauses[1].id.as_str(), "clause-2");
    }

    #[test]
    fn excerpt_takes_first_two_matching_sentences() {
        let text = "The rent is due monthly. Pets are welcome. Late rent incurs interest. Rent rises yearly.";
        let excerpted = excerpt(text, &["rent"]);
        assert_eq!(
            excerpted,
            "The rent is due monthly. Late rent incurs interest."
        );
    }

    #[test]
    fn excerpt_falls_back_to_placeholder() {
        let excerpted = excerpt("Nothing relevant here.", &["deposit", "bond"]);
        assert_eq!(excerpted, "Clause related to: deposit, bond");
    }

    #[test]
    fn section_pass_skips_headings_covered_by_keyword_clauses() {
        let text = "1. SECURITY DEPOSIT\nA deposit of one month applies.\n2. SUBLETTING\nNo subletting without consent.";
        let out = full_pass(text, RiskScope::Document);
        let titles: Vec<&str> = out.clauses.iter().map(|c| c.title.as_str()).collect();
        // "SECURITY DEPOSIT" is covered by the keyword clause; "SUBLETTING" is not.
        assert!(titles.contains(&"Security Deposit"));
        assert!(titles.contains(&"SUBLETTING"));
        assert!(!titles.iter().any(|t| *t == "SECURITY DEPOSIT"));
    }

    #[test]
    fn section_clauses_use_the_catch_all_table() {
        let text = "1. ARBITRATION PROCESS\nDisputes go to arbitration at the sole discretion of the owner.";
        let out = full_pass(text, RiskScope::Document);
        let section = out
            .clauses
            .iter()
            .find(|c| c.title == "ARBITRATION PROCESS")
            .expect("section clause emitted");
        assert_eq!(section.kind, ClauseKind::Other);
        assert_eq!(section.risk_level, RiskLevel::Warning);
        assert!(section.explanation.contains("ARBITRATION PROCESS"));
    }

    #[test]
    fn clause_scope_confines_assessors_to_the_excerpt() {
        // The deposit figure sits outside any deposit-keyword sentence, so the
        // clause-scoped assessor never sees it.
        let text = "A security deposit is required. Unrelated: tenants owe four (4) months rent for painting.";
        let document = keyword_pass(text, RiskScope::Document);
        let clause_scoped = keyword_pass(text, RiskScope::Clause);

        let by_title = |out: &ClauseExtraction, title: &str| {
            out.clauses
                .iter()
                .find(|c| c.title == title)
                .map(|c| c.risk_level)
                .unwrap()
        };
        assert_eq!(by_title(&document, "Security Deposit"), RiskLevel::Danger);
        assert_eq!(by_title(&clause_scoped, "Security Deposit"), RiskLevel::Safe);
    }

    #[test]
    fn entity_families_resolve_against_extracted_entities() {
        let rules = RuleSet::new();
        let entities = extract_entities("The landlord and the tenant agree as follows.", &rules);
        let attached = relevant_entities(&entities, &["tenant"]);
        assert_eq!(attached.len(), 1);
        assert_eq!(attached[0], entities[1].id);

        // No family keyword: every entity attaches.
        let all = relevant_entities(&entities, &["deposit"]);
        assert_eq!(all.len(), entities.len());
    }
}
