//! Channel endorsement validation.
//!
//! Decides whether the channel an inbound activity claims to come from is one
//! its verified credential is endorsed to speak for. Token parsing, signature
//! verification and key fetching happen upstream; this crate only consumes
//! their output.
//!
//! - `endorsements`: the check itself and the `Endorsements` set
//! - `policy`: `ChannelAuthorizer` trait and the stateless `EndorsementPolicy`
//! - `config`: operator switch for accepting unendorsed channels
//! - `error`: `EndorsementError`

pub mod config;
pub mod endorsements;
pub mod error;
pub mod policy;

pub use config::EndorsementConfig;
pub use endorsements::{validate, Endorsements};
pub use error::EndorsementError;
pub use policy::{ChannelAuthorizer, EndorsementPolicy};
