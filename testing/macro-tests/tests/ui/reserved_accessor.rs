#![allow(unused)]
use propbind::prelude::*;

#[derive(Bindable)]
struct Panel {
    #[bind]
    _bindings: i32,
    store: StoreCell<Self>,
}

fn main() {}
