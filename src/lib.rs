//! `mjml-xsd` — the schema and diagnostics bridge between MJML components
//! and an XML-Schema validator.
//!
//! The crate has two independent halves:
//!
//! - [`xsd`] renders one XSD fragment per registered component, describing
//!   the child tags and attributes that component accepts.
//! - [`diagnostics`] turns raw validator error records into stable,
//!   human-readable messages.
//!
//! Assembling fragments into a complete schema document and running the
//! validator are left to the caller.

/// Validator error records and their translation into diagnostics.
pub mod diagnostics;
/// Crate-wide error type.
pub mod error;
/// Component descriptors and the registry they are looked up in.
pub mod registry;
/// Per-component XSD fragment generation.
pub mod xsd;

pub use error::SchemaError;
