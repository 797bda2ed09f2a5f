use sqlx::{FromRow, SqliteExecutor};
use time::OffsetDateTime;

use crate::app::domain::{OrganizationId, UserId};

/// Database row for organizations table.
#[derive(Debug, FromRow)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub owner_user_id: String,
    pub plan: String,
    pub created_at: i64,
}

/// Data structure for inserting a new organization.
pub struct NewOrganization {
    pub id: OrganizationId,
    pub name: String,
    pub owner_user_id: UserId,
    pub plan: String,
}

/// Find an organization by ID.
pub async fn find_by_id<'e, E>(
    executor: E,
    organization_id: &str,
) -> Result<Option<Organization>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Organization>(
        "SELECT id, name, owner_user_id, plan, created_at FROM organizations WHERE id = ?",
    )
    .bind(organization_id)
    .fetch_optional(executor)
    .await
}

/// Insert a new organization.
pub async fn insert<'e, E>(executor: E, organization: &NewOrganization) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();
    sqlx::query(
        "INSERT INTO organizations (id, name, owner_user_id, plan, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(organization.id.as_str())
    .bind(&organization.name)
    .bind(organization.owner_user_id.as_str())
    .bind(&organization.plan)
    .bind(now)
    .execute(executor)
    .await?;
    Ok(())
}

/// Find the most recently created organization owned by a user.
/// Used as the tenant fallback for owners without a profile link.
pub async fn find_newest_owned<'e, E>(
    executor: E,
    owner_user_id: &str,
) -> Result<Option<Organization>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Organization>(
        "SELECT id, name, owner_user_id, plan, created_at FROM organizations \
         WHERE owner_user_id = ? ORDER BY created_at DESC, id DESC LIMIT 1",
    )
    .bind(owner_user_id)
    .fetch_optional(executor)
    .await
}

/// Rename an organization.
pub async fn update_name<'e, E>(
    executor: E,
    organization_id: &str,
    name: &str,
) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("UPDATE organizations SET name = ? WHERE id = ?")
        .bind(name)
        .bind(organization_id)
        .execute(executor)
        .await?;
    Ok(())
}
