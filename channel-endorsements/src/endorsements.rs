//! Endorsement checking.
//!
//! A verified credential carries the list of channels its issuer vouches for.
//! An inbound activity names the channel it claims to come from. The claim is
//! accepted only if that channel appears in the credential's endorsements.
//!
//! Channel ids are compared with exact byte equality: no case folding, no
//! trimming, no normalization.

use crate::error::EndorsementError;
use serde::{Deserialize, Serialize};

/// Key-metadata member holding the endorsed channel ids.
pub const ENDORSEMENTS_MEMBER: &str = "endorsements";

/// Check whether `channel_id` is endorsed.
///
/// Evaluation short-circuits in this order:
/// 1. No claimed channel (`None` or empty): nothing to endorse, `Ok(true)`.
/// 2. `allow_unendorsed_channels` set: checking is bypassed, `Ok(true)`.
///    Only meant for channels under development that cannot sign yet.
/// 3. `endorsements` is `None`: caller defect, `Err(InvalidArgument)`.
///    An empty slice is not absent and simply rejects every claim.
/// 4. `Ok(true)` iff `channel_id` is an exact member of `endorsements`.
///
/// A bare `None` leaves the element type open, so name it:
///
/// ```
/// use channel_endorsements::validate;
///
/// assert!(validate::<&str>(Some("webchat"), None, false).is_err());
/// assert_eq!(validate(Some("webchat"), Some(&["webchat"][..]), false), Ok(true));
/// ```
pub fn validate<S: AsRef<str>>(
    channel_id: Option<&str>,
    endorsements: Option<&[S]>,
    allow_unendorsed_channels: bool,
) -> Result<bool, EndorsementError> {
    let channel_id = match channel_id {
        Some(id) if !id.is_empty() => id,
        _ => return Ok(true),
    };

    if allow_unendorsed_channels {
        return Ok(true);
    }

    let endorsements = endorsements.ok_or(EndorsementError::InvalidArgument {
        argument: "endorsements",
        reason: "endorsement set must be present when a channel is claimed",
    })?;

    Ok(endorses(endorsements, channel_id))
}

fn endorses<S: AsRef<str>>(endorsements: &[S], channel_id: &str) -> bool {
    endorsements.iter().any(|e| e.as_ref() == channel_id)
}

/// Channel ids a verified credential is endorsed to act for.
///
/// Order and duplicates carry no meaning; only membership is queried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Endorsements(Vec<String>);

impl Endorsements {
    pub fn new<I, S>(channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Endorsements(channels.into_iter().map(Into::into).collect())
    }

    /// Extract the endorsement set from verified signing-key metadata.
    ///
    /// A missing or `null` member means the key carries no endorsement data
    /// (`Ok(None)`), which is different from an empty array.
    pub fn from_key_metadata(
        metadata: &serde_json::Value,
    ) -> Result<Option<Self>, EndorsementError> {
        let malformed = EndorsementError::InvalidArgument {
            argument: "endorsements",
            reason: "expected an array of channel id strings",
        };

        let member = match metadata.get(ENDORSEMENTS_MEMBER) {
            None | Some(serde_json::Value::Null) => return Ok(None),
            Some(member) => member,
        };

        let entries = member.as_array().ok_or_else(|| malformed.clone())?;
        let channels = entries
            .iter()
            .map(|entry| entry.as_str().map(str::to_owned))
            .collect::<Option<Vec<_>>>()
            .ok_or(malformed)?;

        Ok(Some(Endorsements(channels)))
    }

    pub fn contains(&self, channel_id: &str) -> bool {
        endorses(self.as_slice(), channel_id)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<S: Into<String>> FromIterator<S> for Endorsements {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Endorsements::new(iter)
    }
}

impl<'a> IntoIterator for &'a Endorsements {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
