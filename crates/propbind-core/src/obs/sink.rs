//! Event sink boundary.
//!
//! Store, relay and setter code MUST NOT touch `obs::metrics` directly.
//! Every event goes through `record`, which forwards to the scoped override
//! if one is installed and to the global counters otherwise.
use crate::obs::metrics;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn EventSink>>> = RefCell::new(None);
}

///
/// BindingEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum BindingEvent {
    Cascaded { owner: &'static str, listeners: usize },
    ListenerAdded { owner: &'static str },
    ListenerRemoved { owner: &'static str },
    Notified { owner: &'static str, listeners: usize },
    StoreCreated { owner: &'static str },
    Suppressed { owner: &'static str },
}

impl BindingEvent {
    #[must_use]
    pub const fn owner(self) -> &'static str {
        match self {
            Self::Cascaded { owner, .. }
            | Self::ListenerAdded { owner }
            | Self::ListenerRemoved { owner }
            | Self::Notified { owner, .. }
            | Self::StoreCreated { owner }
            | Self::Suppressed { owner } => owner,
        }
    }
}

///
/// EventSink
///

pub trait EventSink {
    fn record(&self, event: BindingEvent);
}

/// GlobalEventSink
/// Default thread-local sink that writes into the global counters.

pub(crate) struct GlobalEventSink;

impl EventSink for GlobalEventSink {
    fn record(&self, event: BindingEvent) {
        metrics::with_state_mut(|m| {
            let owner = m.owners.entry(event.owner().to_string()).or_default();

            match event {
                BindingEvent::Cascaded { listeners, .. } => {
                    let listeners = u64::try_from(listeners).unwrap_or(u64::MAX);
                    m.ops.cascades = m.ops.cascades.saturating_add(1);
                    m.ops.deliveries = m.ops.deliveries.saturating_add(listeners);
                    owner.cascades = owner.cascades.saturating_add(1);
                }
                BindingEvent::ListenerAdded { .. } => {
                    m.ops.listeners_added = m.ops.listeners_added.saturating_add(1);
                    owner.listeners_added = owner.listeners_added.saturating_add(1);
                }
                BindingEvent::ListenerRemoved { .. } => {
                    m.ops.listeners_removed = m.ops.listeners_removed.saturating_add(1);
                    owner.listeners_removed = owner.listeners_removed.saturating_add(1);
                }
                BindingEvent::Notified { listeners, .. } => {
                    let listeners = u64::try_from(listeners).unwrap_or(u64::MAX);
                    m.ops.notifications = m.ops.notifications.saturating_add(1);
                    m.ops.deliveries = m.ops.deliveries.saturating_add(listeners);
                    owner.notifications = owner.notifications.saturating_add(1);
                }
                BindingEvent::StoreCreated { .. } => {
                    m.ops.stores_created = m.ops.stores_created.saturating_add(1);
                    owner.stores_created = owner.stores_created.saturating_add(1);
                }
                BindingEvent::Suppressed { .. } => {
                    m.ops.suppressed_writes = m.ops.suppressed_writes.saturating_add(1);
                    owner.suppressed_writes = owner.suppressed_writes.saturating_add(1);
                }
            }
        });
    }
}

pub(crate) fn record(event: BindingEvent) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match sink {
        Some(sink) => sink.record(event),
        None => GlobalEventSink.record(event),
    }
}

/// Snapshot the current counters.
#[must_use]
pub fn metrics_report() -> metrics::EventState {
    metrics::with_state(Clone::clone)
}

/// Reset all counters.
pub fn metrics_reset_all() {
    metrics::reset();
}

/// Run a closure with a temporary sink override on this thread.
///
/// The previous sink is restored on every exit, including unwinding.
pub fn with_event_sink<R>(sink: Rc<dyn EventSink>, f: impl FnOnce() -> R) -> R {
    struct Guard(Option<Rc<dyn EventSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}
