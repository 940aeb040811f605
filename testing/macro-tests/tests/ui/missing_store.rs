#![allow(unused)]
use propbind::prelude::*;

#[derive(Bindable)]
struct Person {
    #[bind]
    _name: String,
}

fn main() {}
