use sqlx::{FromRow, SqliteExecutor};
use time::OffsetDateTime;

use crate::app::domain::{OrganizationId, UserId};

/// Database row for profiles table. Links a user to its organization.
/// `organization_id` is nullable: a profile may exist before the user has
/// been attached to a tenant.
#[derive(Debug, FromRow)]
pub struct Profile {
    pub user_id: String,
    pub organization_id: Option<String>,
    pub created_at: i64,
}

/// Find a profile by user ID.
pub async fn find_by_user<'e, E>(
    executor: E,
    user_id: &str,
) -> Result<Option<Profile>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Profile>(
        "SELECT user_id, organization_id, created_at FROM profiles WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await
}

/// Insert a profile, optionally already linked to an organization.
pub async fn insert<'e, E>(
    executor: E,
    user_id: &UserId,
    organization_id: Option<&OrganizationId>,
) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();
    sqlx::query("INSERT INTO profiles (user_id, organization_id, created_at) VALUES (?, ?, ?)")
        .bind(user_id.as_str())
        .bind(organization_id.map(|o| o.as_str()))
        .bind(now)
        .execute(executor)
        .await?;
    Ok(())
}
