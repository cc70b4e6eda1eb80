use crate::config::{Config, TouchPolicy};
use crate::error::{EntityError, Result};
use crate::services::guard::{assign_if_empty, assign_if_present};
use crate::services::slug::{generate_slug, validate_slug};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The field an effective write landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Id,
    Title,
    Slug,
}

/// Base content entity: identifier, title, slug and last-modified time.
///
/// Richer content types embed one of these. The id is write-once, the title
/// can be replaced by any non-blank value, and the slug is derived from the
/// title until an explicit one is given.
///
/// Deserializing checks the stored fields first, so a stored entity obeys the
/// same title and slug rules as one built with [`Entity::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntityRecord")]
pub struct Entity {
    #[serde(skip_serializing_if = "String::is_empty")]
    id: String,
    title: String,
    slug: String,
    last_modified: DateTime<Utc>,
    touch_on: TouchPolicy,
}

/// Stored form of an [`Entity`], checked before it becomes one.
#[derive(Debug, Deserialize)]
struct EntityRecord {
    #[serde(default)]
    id: String,
    title: String,
    #[serde(default)]
    slug: String,
    last_modified: DateTime<Utc>,
    #[serde(default)]
    touch_on: TouchPolicy,
}

impl TryFrom<EntityRecord> for Entity {
    type Error = EntityError;

    fn try_from(record: EntityRecord) -> Result<Self> {
        if record.title.trim().is_empty() {
            return Err(EntityError::EmptyTitle);
        }
        if !record.slug.is_empty() && !validate_slug(&record.slug) {
            return Err(EntityError::InvalidSlug(record.slug));
        }
        Ok(Self {
            id: record.id,
            title: record.title,
            slug: record.slug,
            last_modified: record.last_modified,
            touch_on: record.touch_on,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEntity {
    pub title: String,
    pub slug: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct EntityPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub id: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
}

impl Entity {
    pub fn new(title: &str, slug: Option<&str>, id: Option<&str>) -> Result<Self> {
        Self::with_config(title, slug, id, &Config::default())
    }

    pub fn with_config(
        title: &str,
        slug: Option<&str>,
        id: Option<&str>,
        config: &Config,
    ) -> Result<Self> {
        if title.trim().is_empty() {
            return Err(EntityError::EmptyTitle);
        }

        let mut entity = Self {
            id: String::new(),
            title: title.to_string(),
            slug: String::new(),
            last_modified: Utc::now(),
            touch_on: config.entity.touch_on,
        };
        entity.set_slug(slug);
        if let Some(id) = id {
            entity.set_id(id);
        }
        entity.touch();

        tracing::debug!(id = ?entity.id(), slug = %entity.slug, "Created entity");
        Ok(entity)
    }

    pub fn create(new: NewEntity) -> Result<Self> {
        Self::new(&new.title, new.slug.as_deref(), new.id.as_deref())
    }

    pub fn id(&self) -> Option<&str> {
        if self.id.is_empty() {
            None
        } else {
            Some(&self.id)
        }
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Assigns `id` unless one is already set. Empty ids are ignored.
    pub fn set_id(&mut self, id: &str) -> bool {
        if !assign_if_empty(&mut self.id, id) {
            tracing::trace!(current = %self.id, ignored = id, "Id write ignored");
            return false;
        }
        tracing::debug!(id = %self.id, "Assigned entity id");
        self.record(Change::Id);
        true
    }

    /// Assigns a random UUID if the entity has no id yet.
    pub fn assign_generated_id(&mut self) -> &str {
        if !self.has_id() {
            self.set_id(&Uuid::new_v4().to_string());
        }
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) -> bool {
        if title.trim().is_empty() || !assign_if_present(&mut self.title, title) {
            return false;
        }
        self.record(Change::Title);
        true
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Sets the slug from an explicit value, or derives it from the title.
    ///
    /// An explicit non-empty slug always replaces the current one (after
    /// derivation). Without one, the title is only used while the slug is
    /// still empty.
    pub fn set_slug(&mut self, slug: Option<&str>) -> bool {
        let changed = match slug.filter(|s| !s.is_empty()) {
            Some(explicit) => assign_if_present(&mut self.slug, &generate_slug(explicit)),
            None if self.slug.is_empty() => {
                assign_if_empty(&mut self.slug, &generate_slug(&self.title))
            }
            None => false,
        };
        if changed {
            tracing::debug!(slug = %self.slug, "Updated entity slug");
            self.record(Change::Slug);
        }
        changed
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    pub fn set_last_modified(&mut self, at: DateTime<Utc>) {
        self.last_modified = at;
    }

    pub fn touch(&mut self) {
        self.last_modified = Utc::now();
    }

    pub fn touch_policy(&self) -> TouchPolicy {
        self.touch_on
    }

    /// Applies every field present in `patch` through the write accessors.
    ///
    /// An explicit `last_modified` is applied last and wins over any touch.
    pub fn apply(&mut self, patch: EntityPatch) -> bool {
        let mut changed = false;
        if let Some(title) = patch.title.as_deref() {
            changed |= self.set_title(title);
        }
        if let Some(slug) = patch.slug.as_deref() {
            changed |= self.set_slug(Some(slug));
        }
        if let Some(id) = patch.id.as_deref() {
            changed |= self.set_id(id);
        }
        if let Some(at) = patch.last_modified.filter(|at| *at != self.last_modified) {
            self.set_last_modified(at);
            changed = true;
        }
        changed
    }

    fn record(&mut self, change: Change) {
        if self.touch_on.covers(change) {
            self.touch();
        }
    }
}
