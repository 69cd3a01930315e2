//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`LookupParams`]: search/summary request sizes used by the resolver

pub mod lookup_params;

pub use lookup_params::LookupParams;
