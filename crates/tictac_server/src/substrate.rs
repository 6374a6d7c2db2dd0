//! The outbound seam between the game authority and the connection layer.

use crate::protocol::ServerEvent;

/// Opaque handle for one connected party.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    derive_more::From,
)]
#[display("party#{_0}")]
pub struct PartyId(u64);

/// Delivery primitives the authority needs from the transport.
///
/// Both calls are fire-and-forget: delivery failures are the
/// implementation's concern and are never reported back.
pub trait Substrate: Send + Sync {
    /// Sends an event to a single party.
    fn emit_to(&self, party: PartyId, event: &ServerEvent);

    /// Sends an event to every currently connected party.
    fn emit_all(&self, event: &ServerEvent);
}

impl<S: Substrate + ?Sized> Substrate for std::sync::Arc<S> {
    fn emit_to(&self, party: PartyId, event: &ServerEvent) {
        (**self).emit_to(party, event)
    }

    fn emit_all(&self, event: &ServerEvent) {
        (**self).emit_all(event)
    }
}
