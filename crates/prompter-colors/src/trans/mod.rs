//! State and algorithms for translating colors between representations.

mod cascade;
mod translator;

pub(crate) use cascade::{find_entry, ANSI_CASCADE, XTERM_CASCADE};
pub use translator::Translator;
