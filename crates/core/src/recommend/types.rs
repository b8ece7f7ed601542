//! Types for the recommendation engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::interest::InterestId;
use crate::domain::question::{DepthTier, QuestionId, QuestionTemplate, SituationTag};

/// One generation request: the caller's interests, the counterpart's, and
/// the optional narrowing/variety knobs.
#[derive(Debug, Clone, Default)]
pub struct RecommendationRequest {
    pub my_interests: Vec<InterestId>,
    pub their_interests: Vec<InterestId>,
    /// Restrict every bucket to a single depth tier.
    pub depth: Option<DepthTier>,
    /// Restrict the situation bucket to a single tag; templates carrying a
    /// different tag drop out of every bucket.
    pub situation: Option<SituationTag>,
    /// Opaque variety token; present means "give me a different subset".
    pub refresh_token: Option<String>,
    /// Cap applied to each bucket independently. `None` surfaces everything
    /// eligible and leaves pagination to the caller.
    pub max_per_bucket: Option<usize>,
}

impl RecommendationRequest {
    pub fn new(my_interests: Vec<InterestId>, their_interests: Vec<InterestId>) -> Self {
        Self { my_interests, their_interests, ..Self::default() }
    }

    pub fn with_depth(mut self, depth: DepthTier) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_situation(mut self, situation: SituationTag) -> Self {
        self.situation = Some(situation);
        self
    }

    pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    pub fn with_max_per_bucket(mut self, max: usize) -> Self {
        self.max_per_bucket = Some(max);
        self
    }
}

/// Output category of a generated question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionBucket {
    /// Interests present on both profiles.
    Shared,
    /// Combinations drawn from the union of both profiles.
    Cross,
    /// Interests only the counterpart has.
    TheirsOnly,
    /// Context-tagged questions, independent of interest matching.
    Situation,
}

impl QuestionBucket {
    /// De-duplication order: a template id emitted by an earlier bucket is
    /// skipped by every later one.
    pub const DEDUP_PRIORITY: [QuestionBucket; 4] =
        [Self::Shared, Self::Cross, Self::TheirsOnly, Self::Situation];

    pub fn description(&self) -> &'static str {
        match self {
            Self::Shared => "You both share this interest",
            Self::Cross => "Bridges two of your interests",
            Self::TheirsOnly => "Ask them about their thing",
            Self::Situation => "Fits the moment",
        }
    }

    /// Per-bucket salt mixed into the refresh seed so buckets do not
    /// sample in lock-step.
    pub(crate) fn sampling_salt(&self) -> u64 {
        match self {
            Self::Shared => 0x7368_6172,
            Self::Cross => 0x6372_6f73,
            Self::TheirsOnly => 0x7468_6569,
            Self::Situation => 0x7369_7475,
        }
    }
}

/// A question instance handed to the caller. Built fresh per call from its
/// source template; never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    pub id: QuestionId,
    pub text: String,
    pub depth: Option<DepthTier>,
    pub situation: Option<SituationTag>,
    pub interests: Vec<InterestId>,
    pub follow_ups: Vec<String>,
    pub bucket: QuestionBucket,
}

impl GeneratedQuestion {
    pub fn from_template(template: &QuestionTemplate, bucket: QuestionBucket) -> Self {
        Self {
            id: template.id.clone(),
            text: template.text.clone(),
            depth: template.depth,
            situation: template.situation,
            interests: template.interests.clone(),
            follow_ups: template.follow_ups.clone(),
            bucket,
        }
    }
}

/// Aggregate output of one recommendation call. Immutable once returned.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub common_questions: Vec<GeneratedQuestion>,
    pub their_questions: Vec<GeneratedQuestion>,
    pub cross_questions: Vec<GeneratedQuestion>,
    pub situation_questions: Vec<GeneratedQuestion>,
    pub total_count: usize,
    pub generated_at: DateTime<Utc>,
}

impl RecommendationResult {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// All buckets flattened, presentation order.
    pub fn all_questions(&self) -> impl Iterator<Item = &GeneratedQuestion> {
        self.common_questions
            .iter()
            .chain(&self.their_questions)
            .chain(&self.cross_questions)
            .chain(&self.situation_questions)
    }
}
