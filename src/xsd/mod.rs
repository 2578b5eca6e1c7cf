//! XSD fragment generation for registered components.
//!
//! Each component contributes a fragment made of two complexType
//! declarations (or one, for self-closing text tags) and a top-level
//! element declaration. Fragments are meant to be concatenated inside a
//! caller-supplied `xs:schema` root.

mod generate;

pub use generate::{ContentModel, SchemaGenerator, generate_schema, render_fragment};
