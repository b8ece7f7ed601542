//! Static corpus access.
//!
//! The catalog owns both tables (interests and question templates) and is
//! built once. Membership tests go through an id-indexed map instead of
//! repeated linear scans; template iteration stays in row order because
//! that order is the engine's tie-break.

mod seeds;

use std::collections::{HashMap, HashSet};

use crate::domain::interest::{Interest, InterestId};
use crate::domain::question::{QuestionId, QuestionTemplate};
use crate::errors::DomainError;

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    interests: Vec<Interest>,
    templates: Vec<QuestionTemplate>,
    interest_index: HashMap<InterestId, usize>,
}

impl Catalog {
    pub fn new(interests: Vec<Interest>, templates: Vec<QuestionTemplate>) -> Self {
        let interest_index = interests
            .iter()
            .enumerate()
            .map(|(position, interest)| (interest.id.clone(), position))
            .collect();

        Self { interests, templates, interest_index }
    }

    /// The embedded corpus shipped with the application.
    pub fn builtin() -> Self {
        let interests = seeds::INTEREST_SEEDS
            .iter()
            .map(|seed| Interest {
                id: InterestId::from(seed.id),
                label: seed.label.to_owned(),
                emoji: seed.emoji.to_owned(),
                category: seed.category,
            })
            .collect();

        let templates = seeds::QUESTION_SEEDS
            .iter()
            .map(|seed| QuestionTemplate {
                id: QuestionId::from(seed.id),
                text: seed.text.to_owned(),
                depth: seed.depth,
                situation: seed.situation,
                interests: seed.interests.iter().map(|id| InterestId::from(*id)).collect(),
                follow_ups: seed.follow_ups.iter().map(|text| (*text).to_owned()).collect(),
            })
            .collect();

        Self::new(interests, templates)
    }

    pub fn interests(&self) -> &[Interest] {
        &self.interests
    }

    /// Templates in catalog order.
    pub fn templates(&self) -> &[QuestionTemplate] {
        &self.templates
    }

    pub fn interest(&self, id: &InterestId) -> Option<&Interest> {
        self.interest_index.get(id).map(|position| &self.interests[*position])
    }

    pub fn contains_interest(&self, id: &InterestId) -> bool {
        self.interest_index.contains_key(id)
    }

    /// Sweeps the full corpus and reports every integrity violation.
    ///
    /// An empty result means the catalog honors the invariants the engine
    /// relies on: unique ids, resolvable interest references, at most two
    /// distinct interests per template, non-empty question text.
    pub fn integrity_violations(&self) -> Vec<DomainError> {
        let mut violations = Vec::new();

        let mut seen_interests = HashSet::new();
        for interest in &self.interests {
            if !seen_interests.insert(&interest.id) {
                violations.push(DomainError::DuplicateInterest(interest.id.clone()));
            }
        }

        let mut seen_templates = HashSet::new();
        for template in &self.templates {
            if !seen_templates.insert(&template.id) {
                violations.push(DomainError::DuplicateTemplate(template.id.clone()));
            }

            if template.text.trim().is_empty() {
                violations.push(DomainError::EmptyQuestionText(template.id.clone()));
            }

            if template.interests.len() > 2 {
                violations.push(DomainError::TooManyInterestReferences(template.id.clone()));
            }

            if let Some((first, second)) = template.interest_pair() {
                if first == second {
                    violations.push(DomainError::MalformedCrossReference(template.id.clone()));
                }
            }

            for interest in &template.interests {
                if !self.contains_interest(interest) {
                    violations.push(DomainError::UnknownInterestReference {
                        template: template.id.clone(),
                        interest: interest.clone(),
                    });
                }
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interest::InterestCategory;
    use crate::domain::question::DepthTier;

    fn interest(id: &str) -> Interest {
        Interest {
            id: InterestId::from(id),
            label: id.to_owned(),
            emoji: "\u{2615}".to_owned(),
            category: InterestCategory::FoodAndDrink,
        }
    }

    fn template(id: &str, interests: &[&str]) -> QuestionTemplate {
        QuestionTemplate {
            id: QuestionId::from(id),
            text: "Ask away?".to_owned(),
            depth: Some(DepthTier::Casual),
            situation: None,
            interests: interests.iter().map(|value| InterestId::from(*value)).collect(),
            follow_ups: Vec::new(),
        }
    }

    #[test]
    fn builtin_corpus_is_internally_consistent() {
        let catalog = Catalog::builtin();

        assert!(catalog.integrity_violations().is_empty());
        assert!(catalog.interests().len() >= 10);
        assert!(catalog.templates().len() >= 50);
    }

    #[test]
    fn interest_lookup_hits_and_misses() {
        let catalog = Catalog::builtin();

        assert!(catalog.contains_interest(&InterestId::from("coffee")));
        assert_eq!(
            catalog.interest(&InterestId::from("hiking")).map(|i| i.label.as_str()),
            Some("Hiking")
        );
        assert!(catalog.interest(&InterestId::from("__nonexistent__")).is_none());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let catalog = Catalog::new(
            vec![interest("coffee"), interest("coffee")],
            vec![template("q_a", &["coffee"]), template("q_a", &["coffee"])],
        );

        let violations = catalog.integrity_violations();
        assert!(violations.contains(&DomainError::DuplicateInterest(InterestId::from("coffee"))));
        assert!(violations.contains(&DomainError::DuplicateTemplate(QuestionId::from("q_a"))));
    }

    #[test]
    fn dangling_interest_reference_is_reported() {
        let catalog =
            Catalog::new(vec![interest("coffee")], vec![template("q_a", &["hiking"])]);

        assert_eq!(
            catalog.integrity_violations(),
            vec![DomainError::UnknownInterestReference {
                template: QuestionId::from("q_a"),
                interest: InterestId::from("hiking"),
            }]
        );
    }

    #[test]
    fn self_paired_cross_template_is_reported() {
        let catalog =
            Catalog::new(vec![interest("coffee")], vec![template("x_a", &["coffee", "coffee"])]);

        assert_eq!(
            catalog.integrity_violations(),
            vec![DomainError::MalformedCrossReference(QuestionId::from("x_a"))]
        );
    }

    #[test]
    fn blank_text_is_reported() {
        let mut bad = template("q_blank", &["coffee"]);
        bad.text = "   ".to_owned();
        let catalog = Catalog::new(vec![interest("coffee")], vec![bad]);

        assert_eq!(
            catalog.integrity_violations(),
            vec![DomainError::EmptyQuestionText(QuestionId::from("q_blank"))]
        );
    }
}
