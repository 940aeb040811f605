#![allow(unused)]
use propbind::prelude::*;

#[derive(Bindable)]
struct Person {
    #[bind(accessibility = "friends")]
    _name: String,
    #[bind(accessibility = 7)]
    _age: i32,
    store: StoreCell<Self>,
}

fn main() {}
