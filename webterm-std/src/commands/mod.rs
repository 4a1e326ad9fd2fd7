//! Built-in commands

mod clear;
mod kvstore;

pub use clear::Clear;
pub use kvstore::Kvstore;
