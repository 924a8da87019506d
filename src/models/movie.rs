//! Movie Models
//!
//! The movie record exchanged with clients and kept by the movie store.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A movie record
///
/// `id` stays `None` until the store assigns one on insert; from then on it
/// identifies the record and is the key for updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Movie {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Required"))]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1888, max = 2100))]
    pub release_year: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000))]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 1000))]
    pub runtime_mins: Option<i32>,
}

impl Movie {
    /// Unsaved movie with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
