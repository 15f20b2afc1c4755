//! Keyed notification channels for the transition lifecycle.
//!
//! Each of the six transition kinds has a start and a complete channel,
//! twelve in all. Rather than twelve distinct signal fields, the channels
//! live in one registry keyed by `(TransitionKind, TransitionPhase)`; the
//! subscription surface per channel is the same either way.
//!
//! # Delivery
//!
//! `notify` invokes a channel's slots synchronously, in registration order.
//! A channel with zero slots is skipped silently. Slots are cloned out of
//! the registry before invocation, so a slot may connect, disconnect, or
//! start another transition re-entrantly without deadlocking.
//!
//! # Example
//!
//! ```
//! use panel_motion::{TransitionEvents, TransitionKind, TransitionPhase};
//!
//! let events = TransitionEvents::new();
//! let id = events.connect(TransitionKind::Show, TransitionPhase::Start, || {
//!     println!("panel is on its way in");
//! });
//! events.notify(TransitionKind::Show, TransitionPhase::Start);
//! events.disconnect(id);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::kind::{TransitionKind, TransitionPhase};

new_key_type! {
    /// A unique identifier for a connected slot.
    ///
    /// Returned by [`TransitionEvents::connect`]; valid until the slot is
    /// disconnected.
    pub struct ConnectionId;
}

type Slot = Arc<dyn Fn() + Send + Sync>;

/// Internal storage for a single connection.
struct Connection {
    /// Channel the slot is subscribed to.
    channel: usize,
    /// The slot function to invoke.
    slot: Slot,
}

const CHANNEL_COUNT: usize = TransitionKind::ALL.len() * 2;

#[inline]
fn channel_index(kind: TransitionKind, phase: TransitionPhase) -> usize {
    kind as usize * 2 + phase as usize
}

struct Registry {
    /// All active connections.
    slots: SlotMap<ConnectionId, Connection>,
    /// Per-channel connection IDs in registration order.
    ///
    /// `SlotMap` iteration order is unspecified, and delivery order is part
    /// of the channel contract, so the order is tracked separately.
    order: [Vec<ConnectionId>; CHANNEL_COUNT],
}

/// The twelve transition notification channels.
///
/// Cloneable; clones share the same registry, which is how completion
/// callbacks handed to the tweening engine reach the same subscribers as
/// the controller that spawned them.
#[derive(Clone)]
pub struct TransitionEvents {
    registry: Arc<Mutex<Registry>>,
}

impl TransitionEvents {
    /// Create an event hub with no connections.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                slots: SlotMap::with_key(),
                order: std::array::from_fn(|_| Vec::new()),
            })),
        }
    }

    /// Connect a slot (closure) to one channel.
    ///
    /// Any number of slots may be connected to a channel; they are invoked
    /// in registration order. Returns a `ConnectionId` that can be used to
    /// disconnect the slot later.
    pub fn connect<F>(&self, kind: TransitionKind, phase: TransitionPhase, slot: F) -> ConnectionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let channel = channel_index(kind, phase);
        let mut registry = self.registry.lock();
        let id = registry.slots.insert(Connection {
            channel,
            slot: Arc::new(slot),
        });
        registry.order[channel].push(id);
        id
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        let mut registry = self.registry.lock();
        match registry.slots.remove(id) {
            Some(connection) => {
                registry.order[connection.channel].retain(|other| *other != id);
                true
            }
            None => false,
        }
    }

    /// Disconnect every slot on every channel.
    pub fn disconnect_all(&self) {
        let mut registry = self.registry.lock();
        registry.slots.clear();
        for channel in &mut registry.order {
            channel.clear();
        }
    }

    /// Get the number of slots connected to one channel.
    pub fn connection_count(&self, kind: TransitionKind, phase: TransitionPhase) -> usize {
        self.registry.lock().order[channel_index(kind, phase)].len()
    }

    /// Invoke all slots connected to one channel, in registration order.
    ///
    /// A channel with zero slots is a silent no-op.
    #[tracing::instrument(skip(self), target = "panel_motion::events", level = "trace")]
    pub fn notify(&self, kind: TransitionKind, phase: TransitionPhase) {
        let slots: Vec<Slot> = {
            let registry = self.registry.lock();
            let order = &registry.order[channel_index(kind, phase)];
            if order.is_empty() {
                return;
            }
            order
                .iter()
                .filter_map(|id| registry.slots.get(*id))
                .map(|connection| connection.slot.clone())
                .collect()
        };

        tracing::trace!(
            target: "panel_motion::events",
            %kind,
            %phase,
            slot_count = slots.len(),
            "notifying channel"
        );

        for slot in slots {
            slot();
        }
    }
}

impl Default for TransitionEvents {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(TransitionEvents: Send, Sync);
