use sqlx::{FromRow, SqliteExecutor};
use time::OffsetDateTime;

/// Database row for districts table.
/// `organization_id` is a denormalized copy of the parent activation's
/// organization, written once at insert.
#[derive(Debug, FromRow, serde::Serialize)]
pub struct District {
    pub id: String,
    pub name: String,
    pub activation_id: String,
    pub organization_id: String,
    pub created_at: i64,
}

/// Data structure for inserting a new district.
pub struct NewDistrict {
    pub id: String,
    pub name: String,
    pub activation_id: String,
    pub organization_id: String,
}

/// Insert a new district.
pub async fn insert<'e, E>(executor: E, district: &NewDistrict) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();
    sqlx::query(
        "INSERT INTO districts (id, name, activation_id, organization_id, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&district.id)
    .bind(&district.name)
    .bind(&district.activation_id)
    .bind(&district.organization_id)
    .bind(now)
    .execute(executor)
    .await?;
    Ok(())
}

/// Find a district by ID.
pub async fn find_by_id<'e, E>(
    executor: E,
    district_id: &str,
) -> Result<Option<District>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, District>(
        "SELECT id, name, activation_id, organization_id, created_at FROM districts WHERE id = ?",
    )
    .bind(district_id)
    .fetch_optional(executor)
    .await
}

/// List all districts under an activation, oldest first.
pub async fn list_for_activation(
    pool: &sqlx::SqlitePool,
    activation_id: &str,
) -> Result<Vec<District>, sqlx::Error> {
    sqlx::query_as::<_, District>(
        "SELECT id, name, activation_id, organization_id, created_at FROM districts \
         WHERE activation_id = ? ORDER BY created_at",
    )
    .bind(activation_id)
    .fetch_all(pool)
    .await
}

/// Fetch only the owning organization of a district. Used by the ownership guard.
pub async fn organization_id_of<'e, E>(
    executor: E,
    district_id: &str,
) -> Result<Option<String>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar("SELECT organization_id FROM districts WHERE id = ?")
        .bind(district_id)
        .fetch_optional(executor)
        .await
}

/// Rename a district.
pub async fn update_name<'e, E>(
    executor: E,
    district_id: &str,
    name: &str,
) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("UPDATE districts SET name = ? WHERE id = ?")
        .bind(name)
        .bind(district_id)
        .execute(executor)
        .await?;
    Ok(())
}

/// Delete a district.
pub async fn delete<'e, E>(executor: E, district_id: &str) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("DELETE FROM districts WHERE id = ?")
        .bind(district_id)
        .execute(executor)
        .await?;
    Ok(())
}
