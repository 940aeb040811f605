use crate::{
    bindings::Bindings,
    key::{Cascade, KeyInfo},
    store::StoreCell,
};
use std::{any::Any, borrow::Cow};

///
/// BindableObject
///
/// Implemented by `#[derive(Bindable)]`. The typed lookups default to "not
/// found", so a type only carries the fast paths for categories it uses.
///

pub trait BindableObject: Sized + 'static {
    /// Fully qualified type path, used to label observability events.
    const PATH: &'static str;

    /// Binding keys in declaration order.
    const KEYS: &'static [&'static str];

    /// Per-key metadata, same order as `KEYS`.
    const KEY_INFO: &'static [KeyInfo];

    /// Field key -> direct dependents. Empty means no dispatcher is wired.
    const CASCADES: &'static [Cascade] = &[];

    /// The slot holding this instance's lazily created store.
    fn store_cell(&self) -> &StoreCell<Self>;

    fn get_int(&self, _key: &str) -> Option<i32> {
        None
    }

    fn get_text(&self, _key: &str) -> Option<Cow<'_, str>> {
        None
    }

    fn get_bool(&self, _key: &str) -> Option<bool> {
        None
    }

    fn get_f32(&self, _key: &str) -> Option<f32> {
        None
    }

    fn get_f64(&self, _key: &str) -> Option<f64> {
        None
    }

    /// Hand the value behind a non-scalar key to `visitor`.
    ///
    /// Returns whether the key named a generic member. The visitor decides
    /// whether the declared type matches what it wants.
    fn visit_generic(&self, _key: &str, _visitor: &mut dyn FnMut(&dyn Any)) -> bool {
        false
    }

    //
    // provided
    //

    /// Typed view over this instance, creating the store on first use.
    fn bindings(&self) -> Bindings<'_, Self> {
        Bindings::new(self, self.store_cell().get_or_init())
    }

    /// Notify listeners that `key` changed. No-op until a store exists.
    fn notify_property_changed(&self, key: &str) {
        if let Some(store) = self.store_cell().get() {
            store.notify(self, key);
        }
    }
}
