//! Locator trait: the capability of resolving a participant to an endpoint.
//!
//! Strategies are independent implementations of [`Locator`]. A service
//! picks one at configuration time and holds it for its lifetime, typically
//! as `Arc<dyn Locator>`.

use std::sync::Arc;

use peppol_common::ParticipantIdentifier;

use crate::endpoint::Endpoint;
use crate::error::Result;

/// Resolves a participant identifier to the endpoint of its receiving service.
///
/// # Contract
///
/// - `lookup` is a function of the identifier and the locator's immutable
///   state. No hidden mutation, and no caching unless a strategy documents it.
/// - Strategies that do I/O may fail with `NotFound`, `NetworkError` or
///   `Timeout`, and must document their own timeout behavior.
/// - Implementations must be thread-safe (Send + Sync).
pub trait Locator: Send + Sync {
    /// Resolve the endpoint for a participant.
    fn lookup(&self, participant: &ParticipantIdentifier) -> Result<Endpoint>;
}

impl<L: Locator + ?Sized> Locator for &L {
    fn lookup(&self, participant: &ParticipantIdentifier) -> Result<Endpoint> {
        (**self).lookup(participant)
    }
}

impl<L: Locator + ?Sized> Locator for Box<L> {
    fn lookup(&self, participant: &ParticipantIdentifier) -> Result<Endpoint> {
        (**self).lookup(participant)
    }
}

impl<L: Locator + ?Sized> Locator for Arc<L> {
    fn lookup(&self, participant: &ParticipantIdentifier) -> Result<Endpoint> {
        (**self).lookup(participant)
    }
}
