//! Hero entity model and DTOs.

use heroes_core::error::CoreError;
use heroes_core::patch::{double_option, non_nullable};
use heroes_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `hero` table.
///
/// Deliberately not `Serialize`: `secret_name` must never reach a response.
/// Convert to [`HeroPublic`] before returning.
#[derive(Debug, Clone, FromRow)]
pub struct Hero {
    pub id: DbId,
    pub name: String,
    pub age: Option<i32>,
    pub secret_name: String,
}

/// The outward-facing projection of a hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroPublic {
    pub id: DbId,
    pub name: String,
    pub age: Option<i32>,
}

impl From<Hero> for HeroPublic {
    fn from(hero: Hero) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            age: hero.age,
        }
    }
}

/// DTO for creating a new hero. Any `id` in the payload is ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHero {
    #[validate(length(max = 255))]
    pub name: String,
    #[serde(default)]
    pub age: Option<i32>,
    #[validate(length(max = 255))]
    pub secret_name: String,
}

/// DTO for partially updating a hero.
///
/// Omitted fields are left untouched. `age: null` clears the age;
/// `name` and `secret_name` cannot be null.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateHero {
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 255))]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub age: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 255))]
    pub secret_name: Option<Option<String>>,
}

impl Hero {
    /// Merge the fields present in `update` into this row.
    ///
    /// Either every present field is applied or, on error, none are.
    pub fn apply(&mut self, update: UpdateHero) -> Result<(), CoreError> {
        let name = non_nullable("name", update.name)?;
        let secret_name = non_nullable("secret_name", update.secret_name)?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(secret_name) = secret_name {
            self.secret_name = secret_name;
        }
        Ok(())
    }
}
