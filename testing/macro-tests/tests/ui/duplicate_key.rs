#![allow(unused, non_snake_case)]
use propbind::prelude::*;

#[derive(Bindable)]
struct Person {
    #[bind]
    _name: String,
    #[bind]
    _Name: String,
    store: StoreCell<Self>,
}

fn main() {}
