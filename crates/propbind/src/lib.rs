//! propbind: string-keyed observable properties for plain structs.
//!
//! This is the public meta-crate. Downstream users depend on **propbind**
//! only.
//!
//! It re-exports the stable public API from:
//!   - `propbind-core`       (runtime store, relay, bindings view, metrics)
//!   - `propbind-derive`     (the `Bindable` derive)
//!   - `propbind-primitives` (type categories shared by both phases)
//!   - `propbind-schema`     (build-time analysis, for tooling)
//!
//! # Rejected input
//!
//! Setters take exactly the declared type.
//!
//! ```compile_fail
//! use propbind::prelude::*;
//!
//! #[derive(Bindable)]
//! struct Person {
//!     #[bind]
//!     _age: i32,
//!     store: StoreCell<Self>,
//! }
//!
//! fn main() {
//!     let mut person = Person { _age: 1, store: StoreCell::new() };
//!     person.set_age("old");
//! }
//! ```
//!
//! Only structs with named fields can be bindable.
//!
//! ```compile_fail
//! use propbind::prelude::*;
//!
//! #[derive(Bindable)]
//! struct Point(i32, i32);
//!
//! fn main() {}
//! ```
//!
//! A bound field without the leading `_` is dropped with a PB001 warning,
//! which `deny(deprecated)` turns into an error.
//!
//! ```compile_fail
//! #![deny(deprecated)]
//! use propbind::prelude::*;
//!
//! #[derive(Bindable, Default)]
//! struct Counter {
//!     #[bind]
//!     count: i32,
//!     #[bind]
//!     _step: i32,
//!     store: StoreCell<Self>,
//! }
//!
//! fn main() {}
//! ```
//!
//! The same type with the warning allowed still builds, so the failure
//! above is the warning and nothing else.
//!
//! ```
//! #![allow(deprecated)]
//! use propbind::prelude::*;
//!
//! #[derive(Bindable, Default)]
//! struct Counter {
//!     #[bind]
//!     count: i32,
//!     #[bind]
//!     _step: i32,
//!     store: StoreCell<Self>,
//! }
//!
//! fn main() {
//!     assert_eq!(Counter::binding_keys(), ["Step"]);
//! }
//! ```

pub use propbind_core as core;
pub use propbind_primitives as primitives;
pub use propbind_schema as schema;

//
// Macros
//

pub use propbind_derive::Bindable;

//
// Prelude
//

pub mod prelude {
    pub use crate::Bindable;
    pub use propbind_core::prelude::*;
}
