//! The component registry: the catalog of components and their
//! attribute sets. The only business rule here is the one guarding
//! `insert_component` — uniqueness of `(name, attribute-set)` and the
//! mandatory `region` attribute — everything else is plain CRUD handled
//! directly by [`crate::store::EventStore`].
use crate::error::{CoreError, CoreResult};
use crate::store::EventStore;
use crate::types::{Attribute, Component};

fn validate_attributes(attributes: &[Attribute]) -> CoreResult<()> {
    if !attributes.iter().any(|a| a.name == "region") {
        return Err(CoreError::Validation(
                "component attributes must include a 'region' attribute".to_string(),
        ));
    }
    let mut seen = std::collections::HashSet::new();
    for attribute in attributes {
        if !seen.insert(attribute.name.as_str()) {
            return Err(CoreError::Validation(format!(
                        "duplicate attribute name: {}",
                        attribute.name
            )));
        }
    }
    Ok(())
}

/// Register a new component, enforcing the `(name, attribute-set)`
/// uniqueness invariant and the mandatory `region` attribute.
pub async fn create_component<S: EventStore>(
    store: &S,
    name: String,
    attributes: Vec<Attribute>,
) -> CoreResult<Component> {
    validate_attributes(&attributes)?;
    if store
    .find_component_by_identity(&name, &attributes)
    .await?
    .is_some()
    {
        return Err(CoreError::Validation(format!(
                    "component already exists: {name}"
        )));
    }
    Ok(store.insert_component(name, attributes).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn region(value: &str) -> Vec<Attribute> {
        vec![Attribute {
                name: "region".into(),
                value: value.into(),
        }]
    }

    #[tokio::test]
    async fn rejects_missing_region_attribute() {
        let store = InMemoryStore::new();
        let result = create_component(&store, "Cache".to_string(), vec![]).await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn rejects_duplicate_identity() {
        let store = InMemoryStore::new();
        create_component(&store, "Cache".to_string(), region("EU-NL"))
        .await
        .unwrap();
        let result = create_component(&store, "Cache".to_string(), region("EU-NL")).await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn same_name_different_region_is_a_distinct_component() {
        let store = InMemoryStore::new();
        let a = create_component(&store, "Cache".to_string(), region("EU-NL"))
        .await
        .unwrap();
        let b = create_component(&store, "Cache".to_string(), region("US-EAST"))
        .await
        .unwrap();
        assert_ne!(a.id, b.id);
    }
}
