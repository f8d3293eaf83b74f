//! Repository for the `hero` table.

use heroes_core::types::DbId;
use sqlx::MySqlConnection;

use crate::models::hero::{CreateHero, Hero};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age, secret_name";

/// Provides CRUD operations for heroes.
pub struct HeroRepo;

impl HeroRepo {
    /// Insert a new hero and return the stored row.
    pub async fn create(
        conn: &mut MySqlConnection,
        input: &CreateHero,
    ) -> Result<Hero, sqlx::Error> {
        let result = sqlx::query("INSERT INTO hero (name, age, secret_name) VALUES (?, ?, ?)")
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.secret_name)
            .execute(&mut *conn)
            .await?;

        let id = DbId::try_from(result.last_insert_id())
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        tracing::debug!(hero_id = id, "hero inserted");

        Self::find_by_id(conn, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a hero by primary key.
    pub async fn find_by_id(
        conn: &mut MySqlConnection,
        id: DbId,
    ) -> Result<Option<Hero>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero WHERE id = ?");
        sqlx::query_as::<_, Hero>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List up to `limit` heroes after skipping `offset`.
    ///
    /// No `ORDER BY`: order is whatever the table scan yields.
    pub async fn list(
        conn: &mut MySqlConnection,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Hero>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero LIMIT ? OFFSET ?");
        sqlx::query_as::<_, Hero>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(conn)
            .await
    }

    /// Write every mutable column of `hero` back to its row.
    ///
    /// MySQL reports changed rows rather than matched rows, so the affected
    /// count is not a reliable existence check here; callers look the row up
    /// first.
    pub async fn save(conn: &mut MySqlConnection, hero: &Hero) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE hero SET name = ?, age = ?, secret_name = ? WHERE id = ?")
            .bind(&hero.name)
            .bind(hero.age)
            .bind(&hero.secret_name)
            .bind(hero.id)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Permanently delete a hero. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut MySqlConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hero WHERE id = ?")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
