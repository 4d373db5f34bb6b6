//! Fine-grained legality and the engine-bound intent value.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Entity uids currently clickable.
///
/// Additive to the [`ChoiceRegistry`](crate::ChoiceRegistry): a coarse
/// action can be legal while only a subset of entities (individual skills,
/// roster slots) accept interaction. Replaced wholesale with each frame.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct InteractiveSet {
    uids: Vec<String>,
    index: HashSet<String>,
}

impl InteractiveSet {
    pub fn from_uids<I, S>(uids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for uid in uids {
            let uid = uid.into();
            if set.index.insert(uid.clone()) {
                set.uids.push(uid);
            }
        }
        set
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, uid: &str) -> bool {
        self.index.contains(uid)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.uids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.uids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uids.is_empty()
    }
}

impl From<Vec<String>> for InteractiveSet {
    fn from(uids: Vec<String>) -> Self {
        Self::from_uids(uids)
    }
}

impl From<InteractiveSet> for Vec<String> {
    fn from(set: InteractiveSet) -> Self {
        set.uids
    }
}

/// Player intent crossing the UI→engine boundary.
///
/// Fire-and-forget from the UI's perspective; the engine alone decides
/// legality and answers with the next frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ActionRequest {
    /// A coarse action by slug, with an optional free-form payload whose
    /// shape is agreed per action type.
    Slug {
        slug: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<serde_json::Value>,
    },
    /// A click on one interactive entity.
    Thing { uid: String },
}

impl ActionRequest {
    pub fn slug(slug: impl Into<String>) -> Self {
        Self::Slug {
            slug: slug.into(),
            payload: None,
        }
    }

    pub fn slug_with_payload(slug: impl Into<String>, payload: serde_json::Value) -> Self {
        Self::Slug {
            slug: slug.into(),
            payload: Some(payload),
        }
    }

    pub fn thing(uid: impl Into<String>) -> Self {
        Self::Thing { uid: uid.into() }
    }

    /// The identifier checked against the frame's legality sets.
    pub fn key(&self) -> &str {
        match self {
            Self::Slug { slug, .. } => slug,
            Self::Thing { uid } => uid,
        }
    }
}
