//! Category domain models and form validation.

use serde::{Deserialize, Serialize};

use super::slug::{is_valid_slug, slugify};
use crate::constants::MIN_CATEGORY_FIELD_LEN;
use crate::{errors::ValidationError, Error, Result};

/// A category as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl Category {
    /// Builds the update payload for this category from edited form values.
    pub fn apply(&self, input: NewCategory) -> CategoryUpdate {
        CategoryUpdate {
            id: Some(self.id),
            name: input.name,
            slug: input.slug,
        }
    }
}

/// Input model for creating a new category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
}

impl NewCategory {
    /// Form values with the slug derived from the name.
    pub fn from_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: slugify(name),
        }
    }

    /// Replaces the slug with one generated from the current name.
    pub fn generate_slug(&mut self) {
        self.slug = slugify(&self.name);
    }

    /// Validates the new category data.
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.name, &self.slug)
    }
}

/// Input model for updating an existing category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub id: Option<i64>,
    pub name: String,
    pub slug: String,
}

impl CategoryUpdate {
    /// Validates the category update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        validate_fields(&self.name, &self.slug)
    }
}

fn validate_fields(name: &str, slug: &str) -> Result<()> {
    if name.chars().count() < MIN_CATEGORY_FIELD_LEN {
        return Err(Error::Validation(ValidationError::TooShort {
            field: "name".to_string(),
            min: MIN_CATEGORY_FIELD_LEN,
            message: format!(
                "Category name must be at least {} characters.",
                MIN_CATEGORY_FIELD_LEN
            ),
        }));
    }
    if slug.chars().count() < MIN_CATEGORY_FIELD_LEN {
        return Err(Error::Validation(ValidationError::TooShort {
            field: "slug".to_string(),
            min: MIN_CATEGORY_FIELD_LEN,
            message: format!(
                "Slug must be at least {} characters.",
                MIN_CATEGORY_FIELD_LEN
            ),
        }));
    }
    if !is_valid_slug(slug) {
        return Err(Error::Validation(ValidationError::InvalidSlug(
            slug.to_string(),
        )));
    }
    Ok(())
}
