#![deny(deprecated)]
#![allow(unused)]
use propbind::prelude::*;

#[derive(Bindable)]
struct Counter {
    #[bind]
    count: i32,
    #[bind]
    _step: i32,
    store: StoreCell<Self>,
}

fn main() {}
