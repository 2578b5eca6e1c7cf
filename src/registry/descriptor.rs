//! Component descriptors as supplied by the component registry.

use indexmap::IndexMap;
use serde::Deserialize;

use super::name::TagName;

/// Describes one MJML tag: its name, content-model flags, accepted
/// attributes and the parents it may appear under.
///
/// Descriptors deserialize from camelCase keys so they can be written
/// the same way the component definitions are:
///
///     use mjml_xsd::registry::ComponentDescriptor;
///
///     let yaml = r#"
///     tagName: mj-divider
///     selfClosingTag: true
///     attributes:
///       color: color
///       width: unit(px,%)
///     parentTag: [mj-column]
///     "#;
///     let divider: ComponentDescriptor = serde_saphyr::from_str(yaml).unwrap();
///     assert_eq!(divider.attributes.len(), 2);
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ComponentDescriptor {
    /// Unique tag name within the registry.
    pub tag_name: TagName,

    /// The tag takes neither children nor text.
    #[serde(default)]
    pub self_closing_tag: bool,

    /// The tag's body is raw or mixed text rather than structured
    /// children.
    #[serde(default)]
    pub ending_tag: bool,

    /// Accepted attributes mapped to their declared type expression.
    /// Only the keys are used for schema generation; iteration order is
    /// declaration order.
    #[serde(default)]
    pub attributes: IndexMap<String, String>,

    /// Tags this component may legally appear under.
    #[serde(default)]
    pub parent_tag: Vec<TagName>,
}

impl ComponentDescriptor {
    /// Creates a descriptor with no attributes, no parents and both
    /// content-model flags cleared.
    #[must_use]
    pub fn new(tag_name: TagName) -> Self {
        Self {
            tag_name,
            self_closing_tag: false,
            ending_tag: false,
            attributes: IndexMap::new(),
            parent_tag: Vec::new(),
        }
    }

    /// Marks the tag as self-closing.
    #[must_use]
    pub const fn self_closing(mut self) -> Self {
        self.self_closing_tag = true;
        self
    }

    /// Marks the tag as carrying raw or mixed text content.
    #[must_use]
    pub const fn ending(mut self) -> Self {
        self.ending_tag = true;
        self
    }

    /// Adds an accepted attribute with its declared type expression.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), ty.into());
        self
    }

    /// Adds a tag this component may appear under.
    #[must_use]
    pub fn with_parent(mut self, parent: TagName) -> Self {
        self.parent_tag.push(parent);
        self
    }

    /// Returns `true` if `tag` is one of this component's legal parents.
    #[must_use]
    pub fn allows_parent(&self, tag: &str) -> bool {
        self.parent_tag.iter().any(|parent| parent.as_str() == tag)
    }
}
