use crate::bindings::Bindings;
use derive_more::Display;
use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

///
/// ListenerId
///
/// Handle returned by registration; the only way to unregister.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("listener#{_0}")]
pub struct ListenerId(u64);

impl ListenerId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

type Listener<T> = Rc<dyn Fn(&Bindings<'_, T>, &str)>;

///
/// Relay
///
/// Synchronous pub/sub channel carrying property keys. Listeners run in
/// registration order on the dispatching thread. The list is snapshotted
/// per dispatch, so listeners may register or unregister while running;
/// the change applies from the next dispatch.
///

pub struct Relay<T> {
    listeners: RefCell<Vec<(ListenerId, Listener<T>)>>,
    next_id: Cell<u64>,
}

impl<T> Relay<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn register(&self, listener: impl Fn(&Bindings<'_, T>, &str) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0.wrapping_add(1));
        self.listeners.borrow_mut().push((id, Rc::new(listener)));

        id
    }

    /// Remove a listener. Unknown or already removed ids are a no-op.
    pub fn unregister(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);

        listeners.len() != before
    }

    /// Deliver `key` to every listener registered before this call.
    pub fn dispatch(&self, bindings: &Bindings<'_, T>, key: &str) {
        let snapshot = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect::<Vec<_>>();

        for listener in snapshot {
            listener(bindings, key);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }
}

impl<T> Default for Relay<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Relay<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relay")
            .field("listeners", &self.len())
            .field("next_id", &self.next_id.get())
            .finish()
    }
}
