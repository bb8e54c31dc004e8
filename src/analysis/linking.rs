//! Related-clause linking and relationship derivation
//!
//! Linking runs as a post-pass once every clause exists, so the result is
//! symmetric: if clause A lists B as related, B lists A. One dependency
//! relationship is derived per unordered related pair, plus one obligation
//! relationship per entity attached to a clause.

use crate::model::{Clause, Entity, RelationKind, Relationship};

/// Populate `related_clauses` on both sides of every overlapping pair.
///
/// `keyword_sets` is parallel to `clauses`: the rule keywords for keyword
/// clauses, lowercased title tokens for section clauses. Overlap is naive
/// substring containment between any two tokens.
pub(crate) fn link_related_clauses(clauses: &mut [Clause], keyword_sets: &[Vec<String>]) {
    for i in 0..clauses.len() {
        for j in (i + 1)..clauses.len() {
            if !tokens_overlap(&keyword_sets[i], &keyword_sets[j]) {
                continue;
            }
            let (a, b) = (clauses[i].id.clone(), clauses[j].id.clone());
            clauses[i].related_clauses.push(b);
            clauses[j].related_clauses.push(a);
        }
    }
}

fn tokens_overlap(a: &[String], b: &[String]) -> bool {
    a.iter()
        .any(|x| b.iter().any(|y| x.contains(y.as_str()) || y.contains(x.as_str())))
}

/// Derive the relationship set from entity attachments and related pairs
pub(crate) fn derive_relationships(entities: &[Entity], clauses: &[Clause]) -> Vec<Relationship> {
    let mut relationships = Vec::new();

    for clause in clauses {
        for entity_id in &clause.entities {
            let name = entities
                .iter()
                .find(|e| &e.id == entity_id)
                .map(|e| e.name.as_str())
                .unwrap_or("A party");
            relationships.push(Relationship::new(
                entity_id.as_str(),
                clause.id.as_str(),
                RelationKind::Obligation,
                format!("{} has obligations under {}", name, clause.title),
            ));
        }
    }

    // One dependency per unordered pair: emit from the lower-indexed side only.
    for (i, clause) in clauses.iter().enumerate() {
        for related_id in &clause.related_clauses {
            let Some(j) = clauses.iter().position(|c| &c.id == related_id) else {
                continue;
            };
            if j <= i {
                continue;
            }
            relationships.push(Relationship::new(
                clause.id.as_str(),
                related_id.as_str(),
                RelationKind::Dependency,
                format!("{} is related to {}", clause.title, clauses[j].title),
            ));
        }
    }

    relationships
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClauseId, ClauseKind, EntityId, EntityKind, RiskLevel};

    fn clause(index: usize, title: &str) -> Clause {
        Clause {
            id: ClauseId::from_index(index),
            title: title.to_string(),
            kind: ClauseKind::Other,
            content: String::new(),
            risk_level: RiskLevel::Safe,
            explanation: String::new(),
            entities: Vec::new(),
            related_clauses: Vec::new(),
        }
    }

    #[test]
    fn linking_is_symmetric() {
        let mut clauses = vec![clause(1, "Maintenance Responsibility"), clause(2, "Liability and Damages")];
        let sets = vec![
            vec!["maintenance".into(), "damage".into()],
            vec!["liability".into(), "damages".into()],
        ];
        link_related_clauses(&mut clauses, &sets);

        assert_eq!(clauses[0].related_clauses, vec![ClauseId::from_index(2)]);
        assert_eq!(clauses[1].related_clauses, vec![ClauseId::from_index(1)]);
    }

    #[test]
    fn disjoint_token_sets_stay_unlinked() {
        let mut clauses = vec![clause(1, "Payment Terms"), clause(2, "Confidentiality")];
        let sets = vec![
            vec!["rent".into(), "payment".into()],
            vec!["confidential".into(), "privacy".into()],
        ];
        link_related_clauses(&mut clauses, &sets);

        assert!(clauses[0].related_clauses.is_empty());
        assert!(clauses[1].related_clauses.is_empty());
    }

    #[test]
    fn one_dependency_per_unordered_pair() {
        let mut clauses = vec![clause(1, "Maintenance"), clause(2, "Liability")];
        let sets = vec![vec!["damage".into()], vec!["damages".into()]];
        link_related_clauses(&mut clauses, &sets);

        let relationships = derive_relationships(&[], &clauses);
        let dependencies: Vec<_> = relationships
            .iter()
            .filter(|r| r.kind == RelationKind::Dependency)
            .collect();
        assert_eq!(dependencies.len(), 1);
        assert_eq!(dependencies[0].from, "clause-1");
        assert_eq!(dependencies[0].to, "clause-2");
    }

    #[test]
    fn obligations_name_the_attached_entity() {
        let entity = Entity::new(1, "Tenant", EntityKind::Person, "Lessee", "");
        let mut c = clause(1, "Payment Terms");
        c.entities.push(EntityId::from_index(1));

        let relationships = derive_relationships(std::slice::from_ref(&entity), &[c]);
        assert_eq!(relationships.len(), 1);
        assert_eq!(relationships[0].kind, RelationKind::Obligation);
        assert_eq!(relationships[0].from, "entity-1");
        assert_eq!(relationships[0].to, "clause-1");
        assert!(relationships[0].description.contains("Tenant"));
        assert!(relationships[0].description.contains("Payment Terms"));
    }
}
