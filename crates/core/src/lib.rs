pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod recommend;

pub use catalog::Catalog;
pub use domain::interest::{Interest, InterestCategory, InterestId};
pub use domain::question::{
    DepthTier, QuestionId, QuestionTemplate, SituationTag, TemplateKind,
};
pub use errors::{ApplicationError, DomainError};
pub use recommend::{
    GeneratedQuestion, QuestionBucket, QuestionEngine, RecommendationRequest,
    RecommendationResult,
};
