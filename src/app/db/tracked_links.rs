use sqlx::{FromRow, SqliteExecutor};
use time::OffsetDateTime;

use crate::app::domain::Slug;

/// Database row for tracked_links table.
#[derive(Debug, FromRow, serde::Serialize)]
pub struct TrackedLink {
    pub id: String,
    pub slug: String,
    pub organization_id: String,
    pub destination_strategy: String,
    pub single_url: Option<String>,
    pub fallback_url: Option<String>,
    pub redirect_url: Option<String>,
    pub description: Option<String>,
    pub is_active: i64,
    pub created_at: i64,
}

/// Data structure for inserting a new tracked link.
pub struct NewTrackedLink {
    pub id: String,
    pub slug: Slug,
    pub organization_id: String,
    pub destination_strategy: String,
    pub single_url: Option<String>,
    pub fallback_url: Option<String>,
    pub is_active: bool,
}

/// Insert a new tracked link. The slug carries a UNIQUE constraint;
/// a duplicate surfaces as a database error.
pub async fn insert<'e, E>(executor: E, link: &NewTrackedLink) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();
    sqlx::query(
        "INSERT INTO tracked_links (id, slug, organization_id, destination_strategy, single_url, fallback_url, is_active, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&link.id)
    .bind(link.slug.as_str())
    .bind(&link.organization_id)
    .bind(&link.destination_strategy)
    .bind(&link.single_url)
    .bind(&link.fallback_url)
    .bind(link.is_active)
    .bind(now)
    .execute(executor)
    .await?;
    Ok(())
}

/// Find a tracked link by ID.
pub async fn find_by_id<'e, E>(
    executor: E,
    link_id: &str,
) -> Result<Option<TrackedLink>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, TrackedLink>(
        "SELECT id, slug, organization_id, destination_strategy, single_url, fallback_url, redirect_url, description, is_active, created_at \
         FROM tracked_links WHERE id = ?",
    )
    .bind(link_id)
    .fetch_optional(executor)
    .await
}

/// Find the active tracked link for a slug. Inactive links are invisible to
/// public resolution; the caller falls through to the default destination.
pub async fn find_active_by_slug(
    pool: &sqlx::SqlitePool,
    slug: &Slug,
) -> Result<Option<TrackedLink>, sqlx::Error> {
    sqlx::query_as::<_, TrackedLink>(
        "SELECT id, slug, organization_id, destination_strategy, single_url, fallback_url, redirect_url, description, is_active, created_at \
         FROM tracked_links WHERE slug = ? AND is_active = 1",
    )
    .bind(slug.as_str())
    .fetch_optional(pool)
    .await
}

/// Fetch only the owning organization of a tracked link. Used by the ownership guard.
pub async fn organization_id_of<'e, E>(
    executor: E,
    link_id: &str,
) -> Result<Option<String>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar("SELECT organization_id FROM tracked_links WHERE id = ?")
        .bind(link_id)
        .fetch_optional(executor)
        .await
}

/// Update a tracked link's mutable fields. Pass the merged values.
pub async fn update<'e, E>(
    executor: E,
    link_id: &str,
    description: Option<&str>,
    redirect_url: Option<&str>,
) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("UPDATE tracked_links SET description = ?, redirect_url = ? WHERE id = ?")
        .bind(description)
        .bind(redirect_url)
        .bind(link_id)
        .execute(executor)
        .await?;
    Ok(())
}

/// Delete a tracked link.
pub async fn delete<'e, E>(executor: E, link_id: &str) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("DELETE FROM tracked_links WHERE id = ?")
        .bind(link_id)
        .execute(executor)
        .await?;
    Ok(())
}
