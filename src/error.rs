use thiserror::Error;

/// Errors raised by the scaling engine and the unit registry
///
/// Every variant is a caller-input error; the engine performs no I/O.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScalingError {
    #[error("{0} servings must be positive")]
    InvalidServings(&'static str),

    #[error("Unknown scaling rule type: {0}")]
    UnknownScalingRule(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Base amount must be a positive finite number, got {0}")]
    InvalidAmount(f64),

    #[error("Scaling produced a negative amount ({amount}) at ratio {ratio}")]
    NegativeAmount { amount: f64, ratio: f64 },

    #[error("Scaled time of {0:.0} minutes does not fit in a minute count")]
    TimeOverflow(f64),

    #[error(transparent)]
    InvalidRule(#[from] RuleShapeError),
}

/// Why an untrusted rule object was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleShapeError {
    #[error("Scaling rule must be an object")]
    NotAnObject,

    #[error("Scaling rule is missing field `{0}`")]
    MissingField(&'static str),

    #[error("Field `{0}` must be a number")]
    NotANumber(&'static str),

    #[error("Field `{0}` must be a whole number")]
    NotAnInteger(&'static str),

    #[error("Field `{0}` must be positive")]
    NonPositive(&'static str),

    #[error("Unknown scaling rule type: {0}")]
    UnknownType(String),
}
