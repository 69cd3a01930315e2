//! Progress and startup diagnostics shown on stderr

pub mod reporter;
