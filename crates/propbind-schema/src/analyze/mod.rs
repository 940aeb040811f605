mod dependency;

pub use self::dependency::*;
