//! RON catalog loader.
//!
//! RON format:
//!
//! ```ron
//! (
//!     skills: [
//!         (id: "tackle", display_name: "Tackle", damage: 10.0),
//!     ],
//!     creatures: [
//!         (
//!             id: "bubwool", display_name: "Bubwool",
//!             max_hp: 30.0, attack: 10.0, defense: 8.0, speed: 12.0,
//!             skills: ["tackle"],
//!         ),
//!     ],
//! )
//! ```
use serde::Deserialize;

use crate::prototypes::{CreaturePrototype, PrototypeCatalog, SkillPrototype};

pub type LoadResult<T> = anyhow::Result<T>;

#[derive(Deserialize)]
struct CatalogSpec {
    #[serde(default)]
    skills: Vec<SkillPrototype>,
    #[serde(default)]
    creatures: Vec<CreaturePrototype>,
}

/// Parse a RON catalog, checking that every creature's skill references
/// resolve.
pub fn load_catalog_ron(content: &str) -> LoadResult<PrototypeCatalog> {
    let spec: CatalogSpec =
        ron::from_str(content).map_err(|e| anyhow::anyhow!("failed to parse catalog RON: {e}"))?;

    for proto in &spec.creatures {
        for skill_id in &proto.skills {
            if !spec.skills.iter().any(|skill| &skill.id == skill_id) {
                anyhow::bail!(
                    "creature '{}' references unknown skill '{skill_id}'",
                    proto.id
                );
            }
        }
    }
    Ok(PrototypeCatalog::new(spec.creatures, spec.skills))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"(
        skills: [
            (id: "tackle", display_name: "Tackle", damage: 10.0, is_physical: true),
        ],
        creatures: [
            (
                id: "bubwool", display_name: "Bubwool",
                max_hp: 30.0, attack: 10.0, defense: 8.0, speed: 12.0,
                skills: ["tackle"],
            ),
        ],
    )"#;

    #[test]
    fn loads_a_catalog_from_ron() {
        let catalog = load_catalog_ron(CATALOG).unwrap();
        assert!(catalog.creature("bubwool").is_some());
        assert_eq!(catalog.skill("tackle").unwrap().damage, 10.0);
    }

    #[test]
    fn rejects_dangling_skill_references() {
        let broken = r#"(
            creatures: [
                (
                    id: "bubwool", display_name: "Bubwool",
                    max_hp: 30.0, attack: 10.0, defense: 8.0, speed: 12.0,
                    skills: ["tackle"],
                ),
            ],
        )"#;
        assert!(load_catalog_ron(broken).is_err());
    }
}
