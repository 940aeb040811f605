use proc_macro::TokenStream;

mod bindable;
mod diagnostic;
mod imp;
mod implementor;
mod scan;
mod util;

/// Generate a property store, mutators and a key registry for a struct.
///
/// ```ignore
/// #[derive(Bindable)]
/// #[bindable(computed(name = "total", ty = "f64", body = "self._price * 2.0"))]
/// pub struct Order {
///     #[bind]
///     _price: f64,
///     #[bind(accessibility = "internal")]
///     _qty: i32,
///     store: StoreCell<Self>,
/// }
/// ```
#[proc_macro_derive(Bindable, attributes(bindable, bind))]
pub fn derive_bindable(input: TokenStream) -> TokenStream {
    bindable::derive_bindable(input.into()).into()
}
