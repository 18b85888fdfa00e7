//! # multiverse-core
//!
//! Core library for multiverse.
//!
//! This crate resolves pointers between fragments of a content tree and
//! assembles the fragments named by a compilation sequence into a single
//! markup document.

pub mod assemble;
pub mod attributes;
pub mod classify;
pub mod config;
pub mod error;
pub mod expand;
pub mod loader;
pub mod pointer;
pub mod resolve;

pub use assemble::Assembler;
pub use attributes::{expand_attributes, Attributes};
pub use classify::is_literal;
pub use config::{Config, ExpandConfig, PathPolicy};
pub use error::ExpandError;
pub use expand::Expander;
pub use loader::{load_document, output_file_name, output_path, LoadError};
pub use pointer::{parse_fragment, Fragment};
pub use resolve::Resolver;

pub use multiverse_types::{ContentTree, Metadata, Node, SourceDocument, POINTER_MARKER};
