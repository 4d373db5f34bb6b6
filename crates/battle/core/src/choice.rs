//! Coarse action legality: the slug registry.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Fixed engine-action names that stay meaningful after a battle ends.
pub const NAVIGATION_SLUGS: [&str; 4] = ["play", "quit", "return-to-main-menu", "rematch"];

/// True for slugs that navigate between scenes rather than act in combat.
pub fn is_navigation_slug(slug: &str) -> bool {
    NAVIGATION_SLUGS.contains(&slug)
}

/// The set of action slugs currently legal for the player.
///
/// Ordered for display, but membership alone determines legality. The
/// registry is replaced wholesale with each new frame; there is no in-place
/// mutation API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ChoiceRegistry {
    slugs: Vec<String>,
    index: HashSet<String>,
}

impl ChoiceRegistry {
    /// Build from slugs in display order. Duplicates collapse onto their
    /// first occurrence.
    pub fn from_slugs<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::default();
        for slug in slugs {
            let slug = slug.into();
            if registry.index.insert(slug.clone()) {
                registry.slugs.push(slug);
            }
        }
        registry
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Membership is the legality check; order never matters here.
    pub fn contains(&self, slug: &str) -> bool {
        self.index.contains(slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slugs.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    /// Slugs that are not navigation actions (illegal once a battle ends).
    pub fn combat_slugs(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|slug| !is_navigation_slug(slug))
    }
}

impl From<Vec<String>> for ChoiceRegistry {
    fn from(slugs: Vec<String>) -> Self {
        Self::from_slugs(slugs)
    }
}

impl From<ChoiceRegistry> for Vec<String> {
    fn from(registry: ChoiceRegistry) -> Self {
        registry.slugs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_order_and_drops_duplicates() {
        let registry = ChoiceRegistry::from_slugs(["tackle", "lick", "tackle", "quit"]);
        assert_eq!(
            registry.iter().collect::<Vec<_>>(),
            ["tackle", "lick", "quit"]
        );
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn membership_decides_legality() {
        let registry = ChoiceRegistry::from_slugs(["play"]);
        assert!(registry.contains("play"));
        assert!(!registry.contains("quit"));
        assert!(ChoiceRegistry::empty().is_empty());
    }

    #[test]
    fn combat_slugs_exclude_navigation() {
        let registry = ChoiceRegistry::from_slugs(["tackle", "return-to-main-menu", "rematch"]);
        assert_eq!(registry.combat_slugs().collect::<Vec<_>>(), ["tackle"]);
    }

    #[test]
    fn serde_round_trips_as_a_sequence() {
        let registry = ChoiceRegistry::from_slugs(["tackle", "quit"]);
        let json = serde_json::to_string(&registry).unwrap();
        assert_eq!(json, r#"["tackle","quit"]"#);
        let back: ChoiceRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, registry);
    }
}
