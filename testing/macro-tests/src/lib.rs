//! Bindable types expanded by the real derive, shared by the integration
//! tests under `tests/`.

pub mod model;

pub use model::*;

use propbind::prelude::*;

///
/// Badge
///
/// Declared at the crate root so crate-scoped accessors have no parent
/// module to fall back on.
///

#[derive(Bindable, Debug, Default)]
pub struct Badge {
    #[bind(accessibility = "protected")]
    _rank: i32,
    #[bind(accessibility = 1)]
    _title: String,
    store: StoreCell<Self>,
}

impl Badge {
    pub fn raise(&mut self, title: &str) {
        let rank = *self.rank();
        self.set_rank(rank + 1);
        self.set_title(title.to_string());
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} #{}", self.title(), self.rank())
    }
}
