//! Shellvars Application - Substitution engine and ports
//!
//! This crate holds the placeholder substitution engine and the ports (traits)
//! it consumes. Concrete placeholder definitions, shells and persistence live
//! in the infrastructure layer.

pub mod error;
pub mod ports;
pub mod registry;
pub mod substitution;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use registry::{PlaceholderEntry, PlaceholderRegistry, PlaceholderSet};
pub use substitution::{SubstitutionEngine, find_used};
