#![doc = include_str!("../README.md")]

mod index;
mod record;
mod table;

pub use table::{NameTable, ScopedTable};
