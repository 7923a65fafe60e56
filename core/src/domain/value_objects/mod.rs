//! Value objects representing immutable domain concepts.

pub mod delivery_channel;
pub mod verification_outcome;

pub use delivery_channel::{canonical_identifier, DeliveryChannel};
pub use verification_outcome::VerificationOutcome;
