use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, in-memory counters for store activity on this thread.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventState {
    pub ops: EventOps,
    pub owners: BTreeMap<String, OwnerCounters>,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventOps {
    // Store lifecycle
    pub stores_created: u64,

    // Writes
    pub notifications: u64,
    /// Listener calls, cascaded dispatches included.
    pub deliveries: u64,
    pub cascades: u64,
    pub suppressed_writes: u64,

    // Subscriptions
    pub listeners_added: u64,
    pub listeners_removed: u64,
}

///
/// OwnerCounters
/// per owner type path
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct OwnerCounters {
    pub stores_created: u64,
    pub notifications: u64,
    pub cascades: u64,
    pub suppressed_writes: u64,
    pub listeners_added: u64,
    pub listeners_removed: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub fn reset() {
    with_state_mut(|m| *m = EventState::default());
}
