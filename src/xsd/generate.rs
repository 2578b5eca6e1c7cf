//! Fragment rendering and deferred generators.

use tracing::trace;

use crate::registry::{ComponentDescriptor, ComponentRegistry, SharedRegistry, read_registry};

const INDENT: &str = "  ";

/// How a component's body is described in its fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentModel {
    /// A sequence of optional, repeatable child element references drawn
    /// from the registry.
    Structural,
    /// Free text interleaved with arbitrary elements.
    Mixed,
    /// Attributes only; no `-elements` type is emitted at all.
    AttributesOnly,
}

impl ContentModel {
    /// Selects the content model for a descriptor.
    ///
    /// `selfClosingTag` only matters for ending tags; a self-closing
    /// structural tag still gets an (empty-by-registry) child sequence.
    #[must_use]
    pub const fn of(component: &ComponentDescriptor) -> Self {
        match (component.ending_tag, component.self_closing_tag) {
            (false, _) => Self::Structural,
            (true, false) => Self::Mixed,
            (true, true) => Self::AttributesOnly,
        }
    }
}

/// Renders the XSD fragment for `component` against the current contents
/// of `registry`.
///
/// # Examples
///
///     use mjml_xsd::registry::{ComponentDescriptor, ComponentRegistry, TagName};
///     use mjml_xsd::xsd::render_fragment;
///
///     let column = TagName::new("mj-column").unwrap();
///     let registry: ComponentRegistry = [
///         ComponentDescriptor::new(TagName::new("mj-text").unwrap())
///             .ending()
///             .with_parent(column.clone()),
///     ]
///     .into_iter()
///     .collect();
///
///     let fragment = render_fragment(&ComponentDescriptor::new(column), &registry);
///     assert!(fragment.contains(r#"<xs:element name="mj-text" type="mj-text""#));
#[must_use]
pub fn render_fragment(component: &ComponentDescriptor, registry: &ComponentRegistry) -> String {
    let tag = component.tag_name.as_str();
    let model = ContentModel::of(component);
    let mut out = String::new();

    match model {
        ContentModel::Structural => {
            let children = registry.children_of(tag);
            trace!(tag, children = children.len(), "rendering structural fragment");
            push_line(&mut out, 0, &format!(r#"<xs:complexType name="{tag}-elements">"#));
            push_line(&mut out, 1, "<xs:sequence>");
            for child in children {
                push_line(
                    &mut out,
                    2,
                    &format!(
                        r#"<xs:element name="{child}" type="{child}" minOccurs="0" maxOccurs="unbounded"/>"#
                    ),
                );
            }
            push_line(&mut out, 1, "</xs:sequence>");
            push_line(&mut out, 0, "</xs:complexType>");
            push_extending_type(&mut out, component);
        }
        ContentModel::Mixed => {
            trace!(tag, "rendering mixed-content fragment");
            push_line(
                &mut out,
                0,
                &format!(r#"<xs:complexType name="{tag}-elements" mixed="true">"#),
            );
            push_line(&mut out, 1, "<xs:sequence>");
            push_line(
                &mut out,
                2,
                r#"<xs:any processContents="skip" minOccurs="0" maxOccurs="unbounded"/>"#,
            );
            push_line(&mut out, 1, "</xs:sequence>");
            push_line(&mut out, 0, "</xs:complexType>");
            push_extending_type(&mut out, component);
        }
        ContentModel::AttributesOnly => {
            trace!(tag, "rendering attribute-only fragment");
            push_line(&mut out, 0, &format!(r#"<xs:complexType name="{tag}">"#));
            push_attributes(&mut out, 1, component);
            push_line(&mut out, 0, "</xs:complexType>");
        }
    }

    push_line(
        &mut out,
        0,
        &format!(r#"<xs:element name="{tag}" type="{tag}" />"#),
    );
    out
}

/// `<tag>` as an extension of `<tag>-elements` carrying the attributes.
fn push_extending_type(out: &mut String, component: &ComponentDescriptor) {
    let tag = component.tag_name.as_str();
    push_line(out, 0, &format!(r#"<xs:complexType name="{tag}">"#));
    push_line(out, 1, "<xs:complexContent>");
    push_line(out, 2, &format!(r#"<xs:extension base="{tag}-elements">"#));
    push_attributes(out, 3, component);
    push_line(out, 2, "</xs:extension>");
    push_line(out, 1, "</xs:complexContent>");
    push_line(out, 0, "</xs:complexType>");
}

fn push_attributes(out: &mut String, depth: usize, component: &ComponentDescriptor) {
    for attribute in component.attributes.keys() {
        push_line(
            out,
            depth,
            &format!(r#"<xs:attribute type="xs:string" name="{attribute}" />"#),
        );
    }
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(line);
    out.push('\n');
}

/// Deferred fragment producer for one component.
///
/// The registry is read when [`generate`](Self::generate) runs, not when
/// the generator is built, so components registered in between show up
/// as children.
#[derive(Debug, Clone)]
pub struct SchemaGenerator {
    component: ComponentDescriptor,
    registry: SharedRegistry,
}

impl SchemaGenerator {
    /// Creates a generator for `component` that will consult `registry`.
    #[must_use]
    pub const fn new(component: ComponentDescriptor, registry: SharedRegistry) -> Self {
        Self {
            component,
            registry,
        }
    }

    /// The component this generator describes.
    #[must_use]
    pub const fn component(&self) -> &ComponentDescriptor {
        &self.component
    }

    /// Renders the fragment against the registry as it is now.
    #[must_use]
    pub fn generate(&self) -> String {
        let registry = read_registry(&self.registry);
        render_fragment(&self.component, &registry)
    }
}

/// Returns a zero-argument producer of `component`'s fragment.
///
/// Equivalent to building a [`SchemaGenerator`] and calling
/// [`SchemaGenerator::generate`] on demand.
#[must_use]
pub fn generate_schema(
    component: ComponentDescriptor,
    registry: SharedRegistry,
) -> impl Fn() -> String {
    let generator = SchemaGenerator::new(component, registry);
    move || generator.generate()
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
