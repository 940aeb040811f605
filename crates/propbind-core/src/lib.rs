//! Runtime for bindable types: the lazily created property store, the
//! change relay, the typed `Bindings` view and the key registry metadata.
//!
//! Everything here is single-threaded. A store lives inside its owner and
//! notifications run synchronously on the thread that called the setter.
#![warn(unreachable_pub)]

pub mod bindings;
pub mod key;
pub mod obs;
pub mod relay;
pub mod store;
pub mod traits;

pub use propbind_primitives::{MemberKind, TypeCategory};

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Domain vocabulary only; no sinks or metrics helpers.
///

pub mod prelude {
    pub use crate::{
        bindings::Bindings,
        key::{Cascade, KeyInfo},
        relay::ListenerId,
        store::StoreCell,
        traits::BindableObject,
    };
}
