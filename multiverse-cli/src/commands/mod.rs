//! CLI command implementations.

pub mod build;
pub mod expand;
pub mod modes;

pub use build::build_document;
pub use expand::expand_address;
pub use modes::list_modes;
