//! Recommendation engine implementation

use std::collections::HashSet;

use chrono::Utc;

use super::sampling;
use super::types::{
    GeneratedQuestion, QuestionBucket, RecommendationRequest, RecommendationResult,
};
use crate::catalog::Catalog;
use crate::domain::interest::InterestId;
use crate::domain::question::{DepthTier, QuestionTemplate, SituationTag};

/// Pure, synchronous selector over the static question corpus. Holds the
/// immutable catalog and nothing else; concurrent calls share no state.
#[derive(Clone, Debug)]
pub struct QuestionEngine {
    catalog: Catalog,
}

impl Default for QuestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionEngine {
    /// Engine over the embedded corpus.
    pub fn new() -> Self {
        Self { catalog: Catalog::builtin() }
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Produces the four ranked buckets for a pair of interest profiles.
    ///
    /// Total over its input domain: unknown interest ids match nothing,
    /// empty inputs produce an empty result, and no input can fail.
    pub fn generate(&self, request: &RecommendationRequest) -> RecommendationResult {
        let mine = self.known_ids(&request.my_interests);
        let theirs = self.known_ids(&request.their_interests);

        let shared: HashSet<&InterestId> = mine.intersection(&theirs).copied().collect();
        let theirs_only: HashSet<&InterestId> = theirs.difference(&mine).copied().collect();
        let union: HashSet<&InterestId> = mine.union(&theirs).copied().collect();

        let mut common_questions = Vec::new();
        let mut their_questions = Vec::new();
        let mut cross_questions = Vec::new();
        let mut situation_questions = Vec::new();

        // Buckets fill in priority order so earlier buckets win contested
        // template ids; presentation order is fixed by the result fields.
        let mut emitted: HashSet<&str> = HashSet::new();
        for bucket in QuestionBucket::DEDUP_PRIORITY {
            let eligible: Vec<&QuestionTemplate> = self
                .catalog
                .templates()
                .iter()
                .filter(|template| !emitted.contains(template.id.as_str()))
                .filter(|template| depth_allows(request.depth, template))
                .filter(|template| situation_allows(request.situation, template))
                .filter(|template| {
                    bucket_membership(template, bucket, &shared, &theirs_only, &union)
                })
                .collect();

            let selected = select_subset(eligible, bucket, request);
            emitted.extend(selected.iter().map(|template| template.id.as_str()));

            let generated = selected
                .into_iter()
                .map(|template| GeneratedQuestion::from_template(template, bucket))
                .collect();

            match bucket {
                QuestionBucket::Shared => common_questions = generated,
                QuestionBucket::Cross => cross_questions = generated,
                QuestionBucket::TheirsOnly => their_questions = generated,
                QuestionBucket::Situation => situation_questions = generated,
            }
        }

        let total_count = common_questions.len()
            + their_questions.len()
            + cross_questions.len()
            + situation_questions.len();

        RecommendationResult {
            common_questions,
            their_questions,
            cross_questions,
            situation_questions,
            total_count,
            generated_at: Utc::now(),
        }
    }

    /// Treats the input list as a set and drops ids the catalog does not
    /// know; unknown ids are normal input, not an error.
    fn known_ids<'a>(&self, interests: &'a [InterestId]) -> HashSet<&'a InterestId> {
        interests.iter().filter(|id| self.catalog.contains_interest(id)).collect()
    }
}

fn depth_allows(filter: Option<DepthTier>, template: &QuestionTemplate) -> bool {
    match filter {
        None => true,
        // An active depth filter excludes unclassified templates.
        Some(wanted) => template.depth == Some(wanted),
    }
}

/// A supplied situation filter must hold in every bucket: a template tagged
/// with a *different* situation is out everywhere, while untagged templates
/// stay eligible for the interest buckets.
fn situation_allows(filter: Option<SituationTag>, template: &QuestionTemplate) -> bool {
    match (filter, template.situation) {
        (Some(wanted), Some(tag)) => wanted == tag,
        _ => true,
    }
}

fn bucket_membership(
    template: &QuestionTemplate,
    bucket: QuestionBucket,
    shared: &HashSet<&InterestId>,
    theirs_only: &HashSet<&InterestId>,
    union: &HashSet<&InterestId>,
) -> bool {
    match bucket {
        QuestionBucket::Shared => {
            template.single_interest().is_some_and(|id| shared.contains(id))
        }
        QuestionBucket::TheirsOnly => {
            template.single_interest().is_some_and(|id| theirs_only.contains(id))
        }
        QuestionBucket::Cross => template.interest_pair().is_some_and(|(first, second)| {
            first != second && union.contains(first) && union.contains(second)
        }),
        QuestionBucket::Situation => template.situation.is_some(),
    }
}

/// Applies the per-bucket cap. Without a refresh token the first N in
/// catalog order win; with one, a token-seeded subset is chosen and then
/// put back into catalog order.
fn select_subset<'a>(
    eligible: Vec<&'a QuestionTemplate>,
    bucket: QuestionBucket,
    request: &RecommendationRequest,
) -> Vec<&'a QuestionTemplate> {
    let Some(cap) = request.max_per_bucket else {
        return eligible;
    };

    if eligible.len() <= cap {
        return eligible;
    }

    match request.refresh_token.as_deref() {
        None => eligible.into_iter().take(cap).collect(),
        Some(token) => {
            let seed = sampling::refresh_seed(token) ^ bucket.sampling_salt();
            sampling::sample_in_order(eligible.len(), cap, seed)
                .into_iter()
                .map(|index| eligible[index])
                .collect()
        }
    }
}
