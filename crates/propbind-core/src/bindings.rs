use crate::{
    TypeCategory,
    key::{KeyInfo, find_key},
    obs::sink::{BindingEvent, record},
    relay::ListenerId,
    store::PropertyStore,
    traits::BindableObject,
};
use std::{any::Any, fmt};

///
/// Bindings
///
/// Borrowed view pairing an owner with its store. Lookups never fail loudly:
/// an unknown key or a type mismatch is `None`, because callers routinely
/// probe several candidate types.
///

pub struct Bindings<'a, T> {
    owner: &'a T,
    store: &'a PropertyStore<T>,
}

impl<'a, T: BindableObject> Bindings<'a, T> {
    pub(crate) const fn new(owner: &'a T, store: &'a PropertyStore<T>) -> Self {
        Self { owner, store }
    }

    #[must_use]
    pub const fn owner(&self) -> &'a T {
        self.owner
    }

    #[must_use]
    pub const fn store(&self) -> &'a PropertyStore<T> {
        self.store
    }

    /// Look up `key` as a `V`.
    ///
    /// Scalars take their category's fast path. A miss there, or any
    /// non-scalar `V`, goes to the generic lookup, which only answers when
    /// the member's declared type is exactly `V`.
    #[must_use]
    pub fn get<V: Any + Clone>(&self, key: &str) -> Option<V> {
        let fast = match TypeCategory::of::<V>() {
            TypeCategory::Int => self.owner.get_int(key).and_then(cast),
            TypeCategory::Text => self
                .owner
                .get_text(key)
                .and_then(|text| cast(text.into_owned())),
            TypeCategory::Bool => self.owner.get_bool(key).and_then(cast),
            TypeCategory::Float32 => self.owner.get_f32(key).and_then(cast),
            TypeCategory::Float64 => self.owner.get_f64(key).and_then(cast),
            TypeCategory::Generic => None,
        };

        fast.or_else(|| self.get_generic(key))
    }

    fn get_generic<V: Any + Clone>(&self, key: &str) -> Option<V> {
        let mut found = None;
        self.owner.visit_generic(key, &mut |value: &dyn Any| {
            found = value.downcast_ref::<V>().cloned();
        });

        found
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        T::KEYS.contains(&key)
    }

    #[must_use]
    pub const fn keys(&self) -> &'static [&'static str] {
        T::KEYS
    }

    #[must_use]
    pub fn key_info(&self, key: &str) -> Option<&'static KeyInfo> {
        find_key(T::KEY_INFO, key)
    }

    /// Subscribe to change notifications. The callback receives this view
    /// and the changed key; it re-queries with `get` for the value.
    pub fn register_listener(
        &self,
        listener: impl Fn(&Bindings<'_, T>, &str) + 'static,
    ) -> ListenerId {
        record(BindingEvent::ListenerAdded { owner: T::PATH });

        self.store.relay().register(listener)
    }

    /// Unsubscribe. Returns false for ids that are not registered.
    pub fn unregister_listener(&self, id: ListenerId) -> bool {
        let removed = self.store.relay().unregister(id);
        if removed {
            record(BindingEvent::ListenerRemoved { owner: T::PATH });
        }

        removed
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.store.relay().len()
    }
}

impl<T> Clone for Bindings<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Bindings<'_, T> {}

impl<T: BindableObject> fmt::Debug for Bindings<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bindings")
            .field("owner", &T::PATH)
            .field("keys", &T::KEYS)
            .field("store", self.store)
            .finish()
    }
}

// Move `value` into a `V` when they are the same type.
fn cast<S: Any, V: Any>(value: S) -> Option<V> {
    let mut slot = Some(value);

    (&mut slot as &mut dyn Any)
        .downcast_mut::<Option<V>>()
        .and_then(Option::take)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        MemberKind,
        test_fixtures::{Order, Person, Tagged},
    };
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn typed_lookups_hit_declared_type_only() {
        let person = Person::new("Ann", 30);
        let bindings = person.bindings();

        assert_eq!(bindings.get::<String>("Name").as_deref(), Some("Ann"));
        assert_eq!(bindings.get::<i32>("Age"), Some(30));
        assert_eq!(bindings.get::<i32>("Name"), None);
        assert_eq!(bindings.get::<String>("Age"), None);
        assert_eq!(bindings.get::<i64>("Age"), None);
        assert_eq!(bindings.get::<i32>("Missing"), None);
    }

    #[test]
    fn generic_lookup_requires_exact_type() {
        let tagged = Tagged::new(vec!["a".into(), "b".into()]);
        let bindings = tagged.bindings();

        assert_eq!(
            bindings.get::<Vec<String>>("Tags"),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(bindings.get::<Vec<&str>>("Tags"), None);
        assert_eq!(bindings.get::<String>("Tags"), None);
    }

    #[test]
    fn scalar_miss_falls_through_to_generic() {
        let tagged = Tagged::new(Vec::new());
        let bindings = tagged.bindings();

        // declared as `std::string::String`, so it lives in the generic slot
        assert_eq!(bindings.get::<String>("Label").as_deref(), Some("untagged"));
    }

    #[test]
    fn computed_properties_are_readable() {
        let order = Order::new(2.5, 4);

        assert_eq!(order.bindings().get::<f64>("Total"), Some(10.0));
    }

    #[test]
    fn key_registry_is_exposed() {
        let person = Person::new("Ann", 30);
        let bindings = person.bindings();

        assert_eq!(bindings.keys(), ["Name", "Age"]);
        assert!(bindings.contains_key("Age"));
        assert!(!bindings.contains_key("age"));

        let info = bindings.key_info("Age").unwrap();
        assert_eq!(info.kind, MemberKind::Field);
        assert_eq!(info.category, TypeCategory::Int);
    }

    #[test]
    fn listeners_requery_through_the_view() {
        let mut person = Person::new("Ann", 30);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        person.bindings().register_listener(move |bindings, key| {
            sink.borrow_mut()
                .push((key.to_string(), bindings.get::<i32>(key)));
        });
        person.set_age(31);

        assert_eq!(*seen.borrow(), [("Age".to_string(), Some(31))]);
    }

    #[test]
    fn unregister_unknown_is_noop() {
        let person = Person::new("Ann", 30);
        let bindings = person.bindings();
        let id = bindings.register_listener(|_, _| {});

        assert_eq!(bindings.listener_count(), 1);
        assert!(bindings.unregister_listener(id));
        assert!(!bindings.unregister_listener(id));
        assert_eq!(bindings.listener_count(), 0);
    }

    #[test]
    fn cast_moves_matching_types_only() {
        assert_eq!(cast::<i32, i32>(5), Some(5));
        assert_eq!(cast::<i32, i64>(5), None);
        assert_eq!(cast::<String, String>("x".into()).as_deref(), Some("x"));
    }
}
