use sqlx::{FromRow, SqliteExecutor};
use time::OffsetDateTime;

use crate::app::domain::OrganizationId;

/// Database row for activations table.
#[derive(Debug, FromRow, serde::Serialize)]
pub struct Activation {
    pub id: String,
    pub name: String,
    pub organization_id: String,
    pub default_redirect_url: Option<String>,
    pub android_url: Option<String>,
    pub ios_url: Option<String>,
    pub created_at: i64,
}

/// Data structure for inserting a new activation.
pub struct NewActivation {
    pub id: String,
    pub name: String,
    pub organization_id: OrganizationId,
}

/// Insert a new activation.
pub async fn insert<'e, E>(executor: E, activation: &NewActivation) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();
    sqlx::query("INSERT INTO activations (id, name, organization_id, created_at) VALUES (?, ?, ?, ?)")
        .bind(&activation.id)
        .bind(&activation.name)
        .bind(activation.organization_id.as_str())
        .bind(now)
        .execute(executor)
        .await?;
    Ok(())
}

/// Find an activation by ID.
pub async fn find_by_id<'e, E>(
    executor: E,
    activation_id: &str,
) -> Result<Option<Activation>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Activation>(
        "SELECT id, name, organization_id, default_redirect_url, android_url, ios_url, created_at \
         FROM activations WHERE id = ?",
    )
    .bind(activation_id)
    .fetch_optional(executor)
    .await
}

/// List all activations for an organization, newest first.
pub async fn list_for_organization(
    pool: &sqlx::SqlitePool,
    organization_id: &str,
) -> Result<Vec<Activation>, sqlx::Error> {
    sqlx::query_as::<_, Activation>(
        "SELECT id, name, organization_id, default_redirect_url, android_url, ios_url, created_at \
         FROM activations WHERE organization_id = ? ORDER BY created_at DESC",
    )
    .bind(organization_id)
    .fetch_all(pool)
    .await
}

/// Fetch only the owning organization of an activation. Used by the ownership guard.
pub async fn organization_id_of<'e, E>(
    executor: E,
    activation_id: &str,
) -> Result<Option<String>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar("SELECT organization_id FROM activations WHERE id = ?")
        .bind(activation_id)
        .fetch_optional(executor)
        .await
}

/// Update an activation's redirect configuration. Pass the merged values;
/// callers are responsible for fetching current state first.
pub async fn update_redirects<'e, E>(
    executor: E,
    activation_id: &str,
    default_redirect_url: Option<&str>,
    android_url: Option<&str>,
    ios_url: Option<&str>,
) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query(
        "UPDATE activations SET default_redirect_url = ?, android_url = ?, ios_url = ? WHERE id = ?",
    )
    .bind(default_redirect_url)
    .bind(android_url)
    .bind(ios_url)
    .bind(activation_id)
    .execute(executor)
    .await?;
    Ok(())
}
