//! Registry of connected parties.

use crate::protocol::ServerEvent;
use crate::substrate::{PartyId, Substrate};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, info, instrument, trace, warn};

type Outbox = mpsc::Sender<ServerEvent>;

/// Events a party may have queued before it is considered stalled.
pub const OUTBOX_CAPACITY: usize = 64;

/// Tracks every live connection and fans events out to them.
///
/// Each party gets its own bounded channel. Snapshots and broadcasts for
/// one party travel through the same channel, so they arrive in the order
/// they were emitted. A party that stops reading until its outbox fills is
/// dropped from the registry, which ends its writer and closes its socket.
/// Cloning the hub shares the same registry.
#[derive(Debug, Clone)]
pub struct ConnectionHub {
    parties: Arc<Mutex<HashMap<PartyId, Outbox>>>,
    next_id: Arc<AtomicU64>,
    capacity: usize,
}

impl Default for ConnectionHub {
    fn default() -> Self {
        Self::with_capacity(OUTBOX_CAPACITY)
    }
}

impl ConnectionHub {
    /// Creates an empty hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty hub with a custom per-party outbox size (at least 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parties: Arc::default(),
            next_id: Arc::default(),
            capacity: capacity.max(1),
        }
    }

    /// Adds a party and returns its id with the receiving end of its outbox.
    #[instrument(skip(self))]
    pub fn register(&self) -> (PartyId, mpsc::Receiver<ServerEvent>) {
        let party = PartyId::from(self.next_id.fetch_add(1, Ordering::Relaxed));
        let (tx, rx) = mpsc::channel(self.capacity);
        let mut parties = self.lock();
        parties.insert(party, tx);
        info!(%party, connected = parties.len(), "Party registered");
        (party, rx)
    }

    /// Removes a party. Unknown ids are ignored.
    #[instrument(skip(self))]
    pub fn unregister(&self, party: PartyId) {
        let mut parties = self.lock();
        if parties.remove(&party).is_some() {
            info!(%party, connected = parties.len(), "Party unregistered");
        }
    }

    /// Number of connected parties.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when nobody is connected.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<PartyId, Outbox>> {
        self.parties.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Queues an event, returning false when the party should be pruned.
fn deliver(party: PartyId, tx: &Outbox, event: &ServerEvent) -> bool {
    match tx.try_send(event.clone()) {
        Ok(()) => true,
        Err(TrySendError::Full(_)) => {
            warn!(%party, "Outbox full; pruning stalled party");
            false
        }
        Err(TrySendError::Closed(_)) => {
            debug!(%party, "Pruning party with closed outbox");
            false
        }
    }
}

impl Substrate for ConnectionHub {
    fn emit_to(&self, party: PartyId, event: &ServerEvent) {
        let mut parties = self.lock();
        let keep = match parties.get(&party) {
            Some(tx) => deliver(party, tx, event),
            None => {
                debug!(%party, "Unknown party; event dropped");
                true
            }
        };
        if !keep {
            parties.remove(&party);
        }
    }

    fn emit_all(&self, event: &ServerEvent) {
        let mut parties = self.lock();
        parties.retain(|party, tx| deliver(*party, tx, event));
        trace!(recipients = parties.len(), "Broadcast sent");
    }
}
