use propbind::prelude::*;

///
/// Person
///

#[derive(Bindable, Debug, Default)]
pub struct Person {
    #[bind]
    _name: String,
    #[bind]
    _age: i32,
    store: StoreCell<Self>,
}

impl Person {
    #[must_use]
    pub fn new(name: &str, age: i32) -> Self {
        Self {
            _name: name.to_string(),
            _age: age,
            store: StoreCell::new(),
        }
    }
}

///
/// Counter
///
/// `count` lacks the marker, so it compiles with a PB001 warning and stays
/// out of the bindings.
///

#[derive(Bindable, Debug, Default)]
pub struct Counter {
    #[bind]
    count: i32,
    #[bind]
    _step: i32,
    store: StoreCell<Self>,
}

impl Counter {
    #[must_use]
    pub const fn raw_count(&self) -> i32 {
        self.count
    }

    pub const fn bump(&mut self) {
        self.count += 1;
    }
}

///
/// Order
///
/// `summary` reads `total()`, not `_price`, so a price change reaches it
/// only through the second hop, which never happens.
///

#[derive(Bindable, Debug)]
#[bindable(computed(name = "total", ty = "f64", body = "self._price * f64::from(self._qty)"))]
#[bindable(computed(
    name = "summary",
    ty = "String",
    body = "format!(\"{} x {:.2}\", self._qty, self.total())"
))]
pub struct Order {
    #[bind]
    _price: f64,
    #[bind]
    _qty: i32,
    store: StoreCell<Self>,
}

impl Order {
    #[must_use]
    pub const fn new(price: f64, qty: i32) -> Self {
        Self {
            _price: price,
            _qty: qty,
            store: StoreCell::new(),
        }
    }
}

///
/// Gauge
///
/// One member per scalar category plus non-scalar ones.
///

#[derive(Bindable, Clone, Debug, Default, PartialEq)]
#[bindable(computed(name = "ratio", ty = "f32", body = "self._level / 100.0"))]
pub struct Gauge {
    #[bind]
    _label: String,
    #[bind]
    _enabled: bool,
    #[bind]
    _level: f32,
    #[bind]
    _reading: f64,
    #[bind]
    _ticks: i32,
    #[bind]
    _history: Vec<i32>,
    #[bind]
    _total_ticks: i64,
    #[bind]
    _owner: std::string::String,
    store: StoreCell<Self>,
}

///
/// Wrapper
///

#[derive(Bindable, Debug, Default)]
pub struct Wrapper<T: Clone + Default + PartialEq> {
    #[bind]
    _value: T,
    store: StoreCell<Self>,
}

impl<T: Clone + Default + PartialEq + 'static> Wrapper<T> {
    pub fn new(value: T) -> Self {
        Self {
            _value: value,
            store: StoreCell::new(),
        }
    }
}

///
/// restricted
///
/// Accessors narrowed through `accessibility`.
///

pub mod restricted {
    use propbind::prelude::*;

    #[derive(Bindable, Debug, Default)]
    #[bindable(computed(name = "masked", ty = "String", body = "\"*\".repeat(self._secret.len())"))]
    pub struct Account {
        #[bind(accessibility = "internal")]
        _secret: String,
        #[bind(accessibility = 2)]
        _pin: i32,
        #[bind(accessibility = "protected")]
        _tier: i32,
        store: StoreCell<Self>,
    }

    impl Account {
        // private accessors are reachable from the defining module only
        pub fn rotate_pin(&mut self, pin: i32) -> i32 {
            let old = *self.pin();
            self.set_pin(pin);
            old
        }

        pub fn promote(&mut self) {
            let tier = *self.tier();
            self.set_tier(tier + 1);
        }

        pub fn replace_secret(&mut self, secret: &str) -> bool {
            let changed = self.secret() != secret;
            self.set_secret(secret.to_string());
            changed
        }

        #[must_use]
        pub fn current_tier(&self) -> i32 {
            *self.tier()
        }
    }
}
