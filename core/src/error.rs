// Error types for configuration checks and enum parsing.

// Errors reported by [`NoiseConfig::validate`](crate::NoiseConfig::validate)
// and by the `FromStr` impls of the configuration enums.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NoiseError {
    // A numeric field is outside the domain the kernels accept.
    #[error("invalid value {value} for `{field}`: {reason}")]
    InvalidParameter {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    // A name did not match any variant of the named enum.
    #[error("unknown {kind} `{name}`")]
    UnknownVariant { kind: &'static str, name: String },
}

impl NoiseError {
    pub(crate) fn invalid(field: &'static str, value: impl ToString, reason: &'static str) -> Self {
        NoiseError::InvalidParameter {
            field,
            value: value.to_string(),
            reason,
        }
    }
}
