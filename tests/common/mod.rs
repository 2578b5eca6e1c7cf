//! Shared test helpers for integration tests.

use mjml_xsd::registry::{ComponentDescriptor, ComponentRegistry};

/// Loads a fixture file from the `tests/fixtures/` directory.
///
/// # Panics
///
/// Panics if the file cannot be read.
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{name}"))
        .unwrap_or_else(|e| panic!("failed to read fixture {name}: {e}"))
}

/// Builds a registry from a YAML list of component descriptors in
/// `tests/fixtures/`.
///
/// # Panics
///
/// Panics if the file cannot be read or does not describe components.
pub fn load_registry(name: &str) -> ComponentRegistry {
    let yaml = load_fixture(name);
    let components: Vec<ComponentDescriptor> = serde_saphyr::from_str(&yaml)
        .unwrap_or_else(|e| panic!("fixture {name} should describe components: {e}"));
    components.into_iter().collect()
}
