#[macro_export]
macro_rules! category_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (Int, i32, type_name = "i32"),
            (Text, String, type_name = "String"),
            (Bool, bool, type_name = "bool"),
            (Float32, f32, type_name = "f32"),
            (Float64, f64, type_name = "f64"),
        }
    };
}

#[macro_export]
macro_rules! category_registry {
    ($macro:ident) => {
        $crate::category_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::category_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! classify_from_registry {
    ( @args $name:expr; @entries $( ($category:ident, $ty:ty, type_name = $type_name:literal) ),* $(,)? ) => {
        match $name {
            $(
                $type_name => $crate::TypeCategory::$category,
            )*
            _ => $crate::TypeCategory::Generic,
        }
    };
}

macro_rules! of_from_registry {
    ( @args $id:expr; @entries $( ($category:ident, $ty:ty, type_name = $type_name:literal) ),* $(,)? ) => {{
        let id = $id;
        $(
            if id == ::std::any::TypeId::of::<$ty>() {
                return $crate::TypeCategory::$category;
            }
        )*

        $crate::TypeCategory::Generic
    }};
}

macro_rules! type_name_from_registry {
    ( @args $category:expr; @entries $( ($variant:ident, $ty:ty, type_name = $type_name:literal) ),* $(,)? ) => {
        match $category {
            $(
                $crate::TypeCategory::$variant => Some($type_name),
            )*
            $crate::TypeCategory::Generic => None,
        }
    };
}

macro_rules! fast_categories_from_registry {
    ( @entries $( ($category:ident, $ty:ty, type_name = $type_name:literal) ),* $(,)? ) => {
        [ $( $crate::TypeCategory::$category ),* ]
    };
}
