//! Operations over insertion-ordered key-value mappings.
//!
//! Everything here works on [`IndexMap`](indexmap::IndexMap), so entry order is part of the
//! contract: producing operations keep the original entry order and later sources override
//! earlier ones on key collision without moving the key.

mod mapping;


pub use mapping::*;
