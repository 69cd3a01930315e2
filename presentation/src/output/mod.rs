//! Answer and history formatting

pub mod console;
