//! Per-instance property store and the slot that lazily holds it.

use crate::{
    bindings::Bindings,
    key::dependents_of,
    obs::sink::{BindingEvent, record},
    relay::Relay,
    traits::BindableObject,
};
use std::{cell::OnceCell, fmt};

///
/// CascadeDispatcher
///
/// Wired into a store only when the owner type has dependency edges.
/// Forwards one notification per direct dependent and nothing more.
///

#[derive(Clone, Copy, Debug)]
pub struct CascadeDispatcher {
    table: &'static [crate::key::Cascade],
}

impl CascadeDispatcher {
    #[must_use]
    pub fn dependents(&self, key: &str) -> &'static [&'static str] {
        dependents_of(self.table, key)
    }
}

///
/// PropertyStore
///
/// Owns the relay and, if present, the cascade dispatcher for one owner
/// instance. Never outlives the owner it lives in.
///

pub struct PropertyStore<T> {
    relay: Relay<T>,
    dispatcher: Option<CascadeDispatcher>,
}

impl<T: BindableObject> PropertyStore<T> {
    fn new() -> Self {
        record(BindingEvent::StoreCreated { owner: T::PATH });

        Self {
            relay: Relay::new(),
            dispatcher: (!T::CASCADES.is_empty()).then_some(CascadeDispatcher {
                table: T::CASCADES,
            }),
        }
    }

    #[must_use]
    pub const fn relay(&self) -> &Relay<T> {
        &self.relay
    }

    #[must_use]
    pub const fn dispatcher(&self) -> Option<&CascadeDispatcher> {
        self.dispatcher.as_ref()
    }

    /// Fire `key`, then one notification per direct dependent of `key`.
    ///
    /// Dependents go straight to the relay, so a dependent that is itself
    /// listed as a source does not fan out again.
    pub(crate) fn notify(&self, owner: &T, key: &str) {
        let bindings = Bindings::new(owner, self);

        record(BindingEvent::Notified {
            owner: T::PATH,
            listeners: self.relay.len(),
        });
        self.relay.dispatch(&bindings, key);

        if let Some(dispatcher) = &self.dispatcher {
            for dependent in dispatcher.dependents(key) {
                record(BindingEvent::Cascaded {
                    owner: T::PATH,
                    listeners: self.relay.len(),
                });
                self.relay.dispatch(&bindings, dependent);
            }
        }
    }
}

impl<T> fmt::Debug for PropertyStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyStore")
            .field("relay", &self.relay)
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}

///
/// StoreCell
///
/// The field a bindable type embeds to hold its store. Empty until the first
/// `bindings()` call; setters only notify once it is filled.
///
/// A clone is a new identity, so cloning yields an empty cell. Equality
/// ignores the cell entirely.
///

pub struct StoreCell<T> {
    inner: OnceCell<PropertyStore<T>>,
}

impl<T> StoreCell<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn get(&self) -> Option<&PropertyStore<T>> {
        self.inner.get()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.inner.get().is_some()
    }
}

impl<T: BindableObject> StoreCell<T> {
    pub fn get_or_init(&self) -> &PropertyStore<T> {
        self.inner.get_or_init(PropertyStore::new)
    }
}

impl<T> Default for StoreCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for StoreCell<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> PartialEq for StoreCell<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T> Eq for StoreCell<T> {}

impl<T> fmt::Debug for StoreCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.get() {
            Some(store) => f.debug_tuple("StoreCell").field(store).finish(),
            None => f.write_str("StoreCell(<uninitialized>)"),
        }
    }
}

/// Record a write that was dropped because the value did not change.
pub fn record_suppressed<T: BindableObject>() {
    record(BindingEvent::Suppressed { owner: T::PATH });
}
