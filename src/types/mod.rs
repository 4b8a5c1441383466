//! Domain Reputation API types

pub mod reputation;

pub use reputation::*;
