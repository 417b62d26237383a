//! Error type for endorsement checks.

/// The only failure an endorsement check can report.
///
/// `InvalidArgument` marks a caller defect (for example, a verified credential
/// handed over without any endorsement collection at all). It is not a
/// rejection: a claim that is merely unendorsed yields `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndorsementError {
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },
}

impl EndorsementError {
    /// Name of the offending argument.
    pub fn argument(&self) -> &'static str {
        match self {
            EndorsementError::InvalidArgument { argument, .. } => argument,
        }
    }
}
