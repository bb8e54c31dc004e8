//! Entity extraction pass
//!
//! Two stages: an ordered keyword-rule sweep that contributes canonical
//! parties (Landlord, Employer, ...), then an anchor-phrase capture that pulls
//! literal names out of the text ("EMPLOYER: TechCorp Solutions Pvt Ltd").
//! Downstream stages always see at least two parties: generic placeholders
//! fill in when fewer are recognized.

use super::rules::RuleSet;
use crate::model::{Entity, EntityKind};

/// Captured names shorter or longer than this are discarded
const NAME_MIN_LEN: usize = 3;
const NAME_MAX_LEN: usize = 99;

pub(crate) fn extract_entities(text: &str, rules: &RuleSet) -> Vec<Entity> {
    let mut entities: Vec<Entity> = Vec::new();

    for rule in &rules.entity_rules {
        if rule.pattern.is_match(text) && !entities.iter().any(|e| e.name == rule.name) {
            entities.push(Entity::new(
                entities.len() + 1,
                rule.name,
                rule.kind,
                rule.role,
                rule.description,
            ));
        }
    }

    for anchor in &rules.anchors {
        let Some(caps) = anchor.captures(text) else {
            continue;
        };
        let name = caps[1].trim();
        if name.len() < NAME_MIN_LEN || name.len() > NAME_MAX_LEN {
            continue;
        }
        if !rules.name_shape.is_match(name) {
            continue;
        }
        // Dedup by substring containment in either direction, so "Landlord"
        // does not suppress "John Smith" but "TechCorp" suppresses "TechCorp Ltd".
        if entities
            .iter()
            .any(|e| e.name.contains(name) || name.contains(&e.name))
        {
            continue;
        }
        let kind = company_or_person(name);
        entities.push(Entity::new(
            entities.len() + 1,
            name,
            kind,
            "Party",
            format!("Identified party: {}", name),
        ));
    }

    // Every contract has at least two sides; pad with generic placeholders so
    // downstream stages never see fewer than two parties.
    if entities.is_empty() {
        entities.push(Entity::new(
            1,
            "Party A",
            EntityKind::Person,
            "Contracting Party",
            "First contracting party",
        ));
    }
    if entities.len() == 1 {
        entities.push(Entity::new(
            2,
            "Party B",
            EntityKind::Person,
            "Contracting Party",
            "Second contracting party",
        ));
    }

    entities
}

fn company_or_person(name: &str) -> EntityKind {
    let lower = name.to_lowercase();
    if lower.contains("ltd") || lower.contains("inc") || lower.contains("corp") {
        EntityKind::Company
    } else {
        EntityKind::Person
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<Entity> {
        extract_entities(text, &RuleSet::new())
    }

    #[test]
    fn keyword_rules_emit_canonical_parties() {
        let entities = extract("The Landlord agrees to rent to the Tenant.");
        let names: Vec<&str> = entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Landlord", "Tenant"]);
        assert_eq!(entities[0].id.as_str(), "entity-1");
        assert_eq!(entities[1].id.as_str(), "entity-2");
        assert_eq!(entities[0].role, "Lessor");
    }

    #[test]
    fn duplicate_rule_matches_emit_one_entity_plus_counterparty() {
        let entities = extract("The landlord, as owner and lessor of the premises");
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].name, "Landlord");
        assert_eq!(entities[1].name, "Party B");
    }

    #[test]
    fn anchor_capture_pulls_literal_names() {
        let entities = extract("EMPLOYER: TechCorp Solutions Pvt Ltd, a company\nEMPLOYEE: works hard");
        let techcorp = entities
            .iter()
            .find(|e| e.name == "TechCorp Solutions Pvt Ltd")
            .expect("literal name extracted");
        assert_eq!(techcorp.kind, EntityKind::Company);
        assert_eq!(techcorp.role, "Party");
        assert!(techcorp.description.contains("TechCorp"));
    }

    #[test]
    fn anchor_capture_rejects_lowercase_and_short_names() {
        let entities = extract("agreement between the parties named below");
        // "the parties named below" fails the looks-like-a-name check, leaving
        // no anchor contribution; no keyword rule fires either.
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].name, "Party A");
    }

    #[test]
    fn placeholders_when_nothing_matches() {
        let entities = extract("Lorem ipsum dolor sit amet.");
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].name, "Party A");
        assert_eq!(entities[1].name, "Party B");
        assert_eq!(entities[0].role, "Contracting Party");
    }

    #[test]
    fn containment_dedup_skips_near_duplicates() {
        // "Tenant" from the keyword rule suppresses the anchored "Tenant
        // Services" capture; only the placeholder counterparty is added.
        let entities = extract("TENANT: Tenant Services");
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].name, "Tenant");
        assert_eq!(entities[1].name, "Party B");
    }
}
