#![allow(unused)]
use propbind::prelude::*;

#[derive(Bindable)]
#[bindable(computed(name = "total", ty = "f64", body = "self._total * 2.0"))]
struct Order {
    #[bind]
    _total: f64,
    store: StoreCell<Self>,
}

fn main() {}
