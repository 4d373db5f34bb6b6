use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::variant::{Category, EntityVariant};

/// Display name used when an entity carries none.
pub const DEFAULT_NAME: &str = "Unknown";

/// Shared shape for every domain object in a battle scene.
///
/// Every map may be absent or partially populated; accessors return the
/// documented fallbacks (`0` for numeric stats, [`DEFAULT_NAME`] for names,
/// empty slices for collections) instead of failing. Variant dispatch goes
/// through `meta.category`, never through structural shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable identity, unique within a snapshot.
    #[serde(default)]
    pub uid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Numeric attributes; semantics vary by variant.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub stats: HashMap<String, f64>,

    /// String attributes. Carries the `category` discriminant and the
    /// `prototype_id` of the template this instance was created from.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub meta: HashMap<String, String>,

    /// Singular nested entities (e.g. `active_creature`).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub entities: HashMap<String, Entity>,

    /// Ordered nested sequences (e.g. `creatures`, `skills`). Insertion
    /// order is the display/selection order.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub collections: HashMap<String, Vec<Entity>>,
}

impl Entity {
    pub const META_CATEGORY: &'static str = "category";
    pub const META_PROTOTYPE_ID: &'static str = "prototype_id";

    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Self::default()
        }
    }

    /// Create an entity already tagged with a category.
    pub fn with_category(uid: impl Into<String>, category: Category) -> Self {
        let mut entity = Self::new(uid);
        entity
            .meta
            .insert(Self::META_CATEGORY.to_owned(), category.to_string());
        entity
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_stat(mut self, key: impl Into<String>, value: f64) -> Self {
        self.stats.insert(key.into(), value);
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn with_entity(mut self, key: impl Into<String>, child: Entity) -> Self {
        self.entities.insert(key.into(), child);
        self
    }

    pub fn with_collection(
        mut self,
        key: impl Into<String>,
        children: impl IntoIterator<Item = Entity>,
    ) -> Self {
        self.collections
            .insert(key.into(), children.into_iter().collect());
        self
    }

    /// Presentation name, falling back to [`DEFAULT_NAME`].
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    /// Numeric stat lookup with the documented `0` fallback.
    pub fn stat(&self, key: &str) -> f64 {
        self.stats.get(key).copied().unwrap_or(0.0)
    }

    pub fn stat_opt(&self, key: &str) -> Option<f64> {
        self.stats.get(key).copied()
    }

    pub fn meta_value(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }

    pub fn entity(&self, key: &str) -> Option<&Entity> {
        self.entities.get(key)
    }

    /// Ordered nested sequence, empty when absent.
    pub fn collection(&self, key: &str) -> &[Entity] {
        self.collections.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The `meta.category` discriminant, if tagged.
    pub fn category(&self) -> Option<Category> {
        self.meta_value(Self::META_CATEGORY)
            .and_then(|raw| raw.parse().ok())
    }

    /// Classify into the tagged union used at interpretation boundaries.
    pub fn classify(&self) -> EntityVariant<'_> {
        EntityVariant::of(self)
    }

    /// Depth-first walk over this entity and everything nested below it.
    pub fn walk(&self) -> impl Iterator<Item = &Entity> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.entities.values());
            for children in next.collections.values() {
                stack.extend(children.iter());
            }
            Some(next)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_fall_back() {
        let entity = Entity::new("e-1");
        assert_eq!(entity.name(), DEFAULT_NAME);
        assert_eq!(entity.stat("hp"), 0.0);
        assert!(entity.collection("skills").is_empty());
        assert!(entity.entity("active_creature").is_none());
        assert!(entity.category().is_none());
    }

    #[test]
    fn deserializes_with_every_map_missing() {
        let entity: Entity = serde_json::from_str(r#"{"uid":"bare"}"#).unwrap();
        assert_eq!(entity.uid, "bare");
        assert!(entity.stats.is_empty());
        assert!(entity.meta.is_empty());
    }

    #[test]
    fn category_round_trips_through_meta() {
        let creature = Entity::with_category("c-1", Category::Creature);
        assert_eq!(creature.category(), Some(Category::Creature));

        let scene = Entity::with_category("s-1", Category::Scene("MainGameScene".into()));
        assert_eq!(
            scene.category(),
            Some(Category::Scene("MainGameScene".into()))
        );
    }

    #[test]
    fn walk_visits_nested_entities() {
        let root = Entity::new("root")
            .with_entity("player", Entity::new("p-1"))
            .with_collection("log", vec![Entity::new("l-1"), Entity::new("l-2")]);

        let mut uids: Vec<&str> = root.walk().map(|e| e.uid.as_str()).collect();
        uids.sort_unstable();
        assert_eq!(uids, ["l-1", "l-2", "p-1", "root"]);
    }
}
