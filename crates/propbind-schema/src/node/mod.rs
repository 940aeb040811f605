mod member;

pub use self::member::*;
