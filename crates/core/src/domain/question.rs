use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::interest::InterestId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How personal a question is allowed to get. Ordered shallow to deep.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DepthTier {
    Icebreaker,
    Casual,
    Deep,
}

impl DepthTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Icebreaker => "Icebreaker",
            Self::Casual => "Casual",
            Self::Deep => "Deep",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown value `{value}` (expected {expected})")]
pub struct ParseTagError {
    value: String,
    expected: &'static str,
}

impl std::str::FromStr for DepthTier {
    type Err = ParseTagError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "icebreaker" => Ok(Self::Icebreaker),
            "casual" => Ok(Self::Casual),
            "deep" => Ok(Self::Deep),
            other => Err(ParseTagError {
                value: other.to_owned(),
                expected: "icebreaker|casual|deep",
            }),
        }
    }
}

/// Social context a question suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SituationTag {
    FirstMeeting,
    GroupSetting,
    Networking,
}

impl SituationTag {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstMeeting => "First meeting",
            Self::GroupSetting => "Group setting",
            Self::Networking => "Networking",
        }
    }
}

impl std::str::FromStr for SituationTag {
    type Err = ParseTagError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "first_meeting" | "first-meeting" => Ok(Self::FirstMeeting),
            "group_setting" | "group-setting" => Ok(Self::GroupSetting),
            "networking" => Ok(Self::Networking),
            other => Err(ParseTagError {
                value: other.to_owned(),
                expected: "first_meeting|group_setting|networking",
            }),
        }
    }
}

/// Arity of a template's interest references.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateKind {
    /// No interest references; matched by situation only.
    Agnostic,
    /// One interest reference.
    SingleInterest,
    /// Two distinct interest references combined in one question.
    CrossInterest,
}

/// An entry in the static question corpus. Read-only at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionTemplate {
    pub id: QuestionId,
    pub text: String,
    pub depth: Option<DepthTier>,
    pub situation: Option<SituationTag>,
    pub interests: Vec<InterestId>,
    pub follow_ups: Vec<String>,
}

impl QuestionTemplate {
    pub fn kind(&self) -> TemplateKind {
        match self.interests.len() {
            0 => TemplateKind::Agnostic,
            1 => TemplateKind::SingleInterest,
            _ => TemplateKind::CrossInterest,
        }
    }

    /// The single interest id for single-interest templates.
    pub fn single_interest(&self) -> Option<&InterestId> {
        match self.interests.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// The interest pair for cross-interest templates.
    pub fn interest_pair(&self) -> Option<(&InterestId, &InterestId)> {
        match self.interests.as_slice() {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(interests: &[&str]) -> QuestionTemplate {
        QuestionTemplate {
            id: QuestionId::from("q_test"),
            text: "What got you into it?".to_owned(),
            depth: Some(DepthTier::Casual),
            situation: None,
            interests: interests.iter().map(|id| InterestId::from(*id)).collect(),
            follow_ups: Vec::new(),
        }
    }

    #[test]
    fn kind_follows_interest_arity() {
        assert_eq!(template(&[]).kind(), TemplateKind::Agnostic);
        assert_eq!(template(&["coffee"]).kind(), TemplateKind::SingleInterest);
        assert_eq!(template(&["coffee", "hiking"]).kind(), TemplateKind::CrossInterest);
    }

    #[test]
    fn single_interest_only_for_arity_one() {
        assert!(template(&[]).single_interest().is_none());
        assert_eq!(
            template(&["coffee"]).single_interest(),
            Some(&InterestId::from("coffee"))
        );
        assert!(template(&["coffee", "hiking"]).single_interest().is_none());
    }

    #[test]
    fn depth_tiers_parse_case_insensitively() {
        assert_eq!("Icebreaker".parse::<DepthTier>(), Ok(DepthTier::Icebreaker));
        assert_eq!("deep".parse::<DepthTier>(), Ok(DepthTier::Deep));
        assert!("probing".parse::<DepthTier>().is_err());
    }

    #[test]
    fn situation_tags_accept_both_separators() {
        assert_eq!("first_meeting".parse::<SituationTag>(), Ok(SituationTag::FirstMeeting));
        assert_eq!("group-setting".parse::<SituationTag>(), Ok(SituationTag::GroupSetting));
        assert!("brunch".parse::<SituationTag>().is_err());
    }

    #[test]
    fn depth_tiers_order_shallow_to_deep() {
        assert!(DepthTier::Icebreaker < DepthTier::Casual);
        assert!(DepthTier::Casual < DepthTier::Deep);
    }
}
