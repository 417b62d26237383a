//! Endorsement policy: the authorization surface handed to the request
//! pipeline once a token has been verified.

use crate::config::EndorsementConfig;
use crate::endorsements::{validate, Endorsements};
use crate::error::EndorsementError;

/// Decides whether a credential may speak for the channel an activity claims.
pub trait ChannelAuthorizer: Send + Sync {
    fn authorize(
        &self,
        channel_id: Option<&str>,
        endorsements: Option<&Endorsements>,
    ) -> Result<bool, EndorsementError>;
}

/// Stateless [`ChannelAuthorizer`] backed by [`validate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EndorsementPolicy {
    allow_unendorsed_channels: bool,
}

impl EndorsementPolicy {
    /// Unendorsed channels are rejected.
    pub fn strict() -> Self {
        EndorsementPolicy {
            allow_unendorsed_channels: false,
        }
    }

    pub fn from_config(config: &EndorsementConfig) -> Self {
        if config.allow_unendorsed_channels {
            tracing::warn!(
                "Endorsement checking disabled: unendorsed channels will be accepted (debug only)"
            );
        }
        EndorsementPolicy {
            allow_unendorsed_channels: config.allow_unendorsed_channels,
        }
    }

    pub fn allows_unendorsed_channels(&self) -> bool {
        self.allow_unendorsed_channels
    }
}

impl ChannelAuthorizer for EndorsementPolicy {
    fn authorize(
        &self,
        channel_id: Option<&str>,
        endorsements: Option<&Endorsements>,
    ) -> Result<bool, EndorsementError> {
        let endorsed = validate(
            channel_id,
            endorsements.map(Endorsements::as_slice),
            self.allow_unendorsed_channels,
        )?;
        if !endorsed {
            tracing::debug!(
                channel_id = channel_id.unwrap_or_default(),
                endorsed_for = ?endorsements.map(Endorsements::as_slice),
                "Channel not endorsed by credential"
            );
        }
        Ok(endorsed)
    }
}
