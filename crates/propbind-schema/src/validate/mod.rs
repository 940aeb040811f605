//! Naming and key validation for bound members.

pub mod keys;
pub mod naming;
pub mod reserved;
