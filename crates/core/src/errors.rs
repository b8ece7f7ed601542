use thiserror::Error;

use crate::domain::interest::InterestId;
use crate::domain::question::QuestionId;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("duplicate question template id `{0}`")]
    DuplicateTemplate(QuestionId),
    #[error("duplicate interest id `{0}`")]
    DuplicateInterest(InterestId),
    #[error("template `{template}` references unknown interest `{interest}`")]
    UnknownInterestReference { template: QuestionId, interest: InterestId },
    #[error("template `{0}` has empty question text")]
    EmptyQuestionText(QuestionId),
    #[error("cross template `{0}` pairs an interest with itself")]
    MalformedCrossReference(QuestionId),
    #[error("template `{0}` references more than two interests")]
    TooManyInterestReferences(QuestionId),
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Stable class string surfaced in structured command output.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Domain(_) => "catalog_integrity",
            Self::Configuration(_) => "config_validation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_classify_as_catalog_integrity() {
        let error = ApplicationError::from(DomainError::DuplicateTemplate(QuestionId::from(
            "q_coffee_order",
        )));

        assert_eq!(error.error_class(), "catalog_integrity");
        assert_eq!(error.to_string(), "duplicate question template id `q_coffee_order`");
    }

    #[test]
    fn configuration_errors_classify_as_config_validation() {
        let error = ApplicationError::Configuration("bad cap".to_owned());

        assert_eq!(error.error_class(), "config_validation");
    }
}
