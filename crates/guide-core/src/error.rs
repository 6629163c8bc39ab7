/// Errors raised while turning a keyword into a guide record.
///
/// Category lookups are exhaustive matches over `ProblemCategory`, so a missing
/// template, persona or CTA cannot reach this type. What remains are bad caller input
/// and template text that does not line up with the variables bound for it.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown placeholder {{{name}}} in template {template:?}")]
    UnknownPlaceholder { name: String, template: String },

    #[error("malformed template {template:?}: {message}")]
    MalformedTemplate { template: String, message: String },
}
