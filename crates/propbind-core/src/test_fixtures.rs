//! Hand-written equivalents of derive output, so the runtime can be tested
//! without the proc macro.

use crate::{
    MemberKind, TypeCategory,
    key::{Cascade, KeyInfo},
    store::{StoreCell, record_suppressed},
    traits::BindableObject,
};
use std::{any::Any, borrow::Cow};

///
/// Person
///

#[derive(Debug)]
pub(crate) struct Person {
    _name: String,
    _age: i32,
    store: StoreCell<Self>,
}

impl Person {
    pub(crate) fn new(name: &str, age: i32) -> Self {
        Self {
            _name: name.to_string(),
            _age: age,
            store: StoreCell::new(),
        }
    }

    pub(crate) fn set_name(&mut self, value: String) {
        if self._name == value {
            record_suppressed::<Self>();
            return;
        }
        self._name = value;
        self.notify_property_changed("Name");
    }

    pub(crate) fn set_age(&mut self, value: i32) {
        if self._age == value {
            record_suppressed::<Self>();
            return;
        }
        self._age = value;
        self.notify_property_changed("Age");
    }
}

impl BindableObject for Person {
    const PATH: &'static str = "test_fixtures::Person";
    const KEYS: &'static [&'static str] = &["Name", "Age"];
    const KEY_INFO: &'static [KeyInfo] = &[
        KeyInfo::new("Name", "_name", MemberKind::Field, TypeCategory::Text, "String"),
        KeyInfo::new("Age", "_age", MemberKind::Field, TypeCategory::Int, "i32"),
    ];

    fn store_cell(&self) -> &StoreCell<Self> {
        &self.store
    }

    fn get_int(&self, key: &str) -> Option<i32> {
        match key {
            "Age" => Some(self._age),
            _ => None,
        }
    }

    fn get_text(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "Name" => Some(Cow::Borrowed(self._name.as_str())),
            _ => None,
        }
    }
}

///
/// Order
/// total = price * qty
///

#[derive(Debug)]
pub(crate) struct Order {
    _price: f64,
    _qty: i32,
    store: StoreCell<Self>,
}

impl Order {
    pub(crate) fn new(price: f64, qty: i32) -> Self {
        Self {
            _price: price,
            _qty: qty,
            store: StoreCell::new(),
        }
    }

    pub(crate) fn total(&self) -> f64 {
        self._price * f64::from(self._qty)
    }

    #[allow(clippy::float_cmp)]
    pub(crate) fn set_price(&mut self, value: f64) {
        if self._price == value {
            record_suppressed::<Self>();
            return;
        }
        self._price = value;
        self.notify_property_changed("Price");
    }
}

impl BindableObject for Order {
    const PATH: &'static str = "test_fixtures::Order";
    const KEYS: &'static [&'static str] = &["Price", "Qty", "Total"];
    const KEY_INFO: &'static [KeyInfo] = &[
        KeyInfo::new("Price", "_price", MemberKind::Field, TypeCategory::Float64, "f64"),
        KeyInfo::new("Qty", "_qty", MemberKind::Field, TypeCategory::Int, "i32"),
        KeyInfo::new(
            "Total",
            "total",
            MemberKind::ComputedProperty,
            TypeCategory::Float64,
            "f64",
        ),
    ];
    const CASCADES: &'static [Cascade] = &[
        Cascade::new("Price", &["Total"]),
        Cascade::new("Qty", &["Total"]),
    ];

    fn store_cell(&self) -> &StoreCell<Self> {
        &self.store
    }

    fn get_int(&self, key: &str) -> Option<i32> {
        match key {
            "Qty" => Some(self._qty),
            _ => None,
        }
    }

    fn get_f64(&self, key: &str) -> Option<f64> {
        match key {
            "Price" => Some(self._price),
            "Total" => Some(self.total()),
            _ => None,
        }
    }
}

///
/// Tagged
/// generic members only
///

#[derive(Debug)]
pub(crate) struct Tagged {
    _tags: Vec<String>,
    _label: std::string::String,
    store: StoreCell<Self>,
}

impl Tagged {
    pub(crate) fn new(tags: Vec<String>) -> Self {
        Self {
            _tags: tags,
            _label: "untagged".to_string(),
            store: StoreCell::new(),
        }
    }
}

impl BindableObject for Tagged {
    const PATH: &'static str = "test_fixtures::Tagged";
    const KEYS: &'static [&'static str] = &["Tags", "Label"];
    const KEY_INFO: &'static [KeyInfo] = &[
        KeyInfo::new(
            "Tags",
            "_tags",
            MemberKind::Field,
            TypeCategory::Generic,
            "Vec<String>",
        ),
        KeyInfo::new(
            "Label",
            "_label",
            MemberKind::Field,
            TypeCategory::Generic,
            "std::string::String",
        ),
    ];

    fn store_cell(&self) -> &StoreCell<Self> {
        &self.store
    }

    fn visit_generic(&self, key: &str, visitor: &mut dyn FnMut(&dyn Any)) -> bool {
        match key {
            "Tags" => visitor(&self._tags),
            "Label" => visitor(&self._label),
            _ => return false,
        }

        true
    }
}
