//! Data types for notr
//!
//! Entries are not persisted objects with identity: they are rebuilt from
//! their text line on every read.

mod entry;

pub use entry::{
    encode, encode_edit, Entry, Note, DATE_INPUT_FORMAT, EDIT_MARKER, TIME_FORMAT,
};
