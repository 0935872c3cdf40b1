//! Player Entity
//!
//! One roster entry as the remote collection stores it.

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned by the remote service
pub type PlayerId = u32;

/// A player on the roster (matches the service payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub breed: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            breed: breed.into(),
            image_url: None,
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// `null` and missing both read as empty text
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Unsaved input for a new player, sent as the create request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDraft {
    pub name: String,
    pub breed: String,
}

impl PlayerDraft {
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
        }
    }

    /// Move the draft out, leaving an empty one behind
    pub fn take(&mut self) -> PlayerDraft {
        std::mem::take(self)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.breed.is_empty()
    }
}
