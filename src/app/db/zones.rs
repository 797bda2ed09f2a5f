use sqlx::{FromRow, SqliteExecutor};
use time::OffsetDateTime;

/// Database row for zones table.
/// `organization_id` and `activation_id` are copied from the parent district
/// at insert; `district_id` may later be cleared without touching either.
#[derive(Debug, FromRow, serde::Serialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub district_id: Option<String>,
    pub activation_id: String,
    pub organization_id: String,
    pub created_at: i64,
}

/// Data structure for inserting a new zone.
pub struct NewZone {
    pub id: String,
    pub name: String,
    pub district_id: String,
    pub activation_id: String,
    pub organization_id: String,
}

/// Insert a new zone.
pub async fn insert<'e, E>(executor: E, zone: &NewZone) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();
    sqlx::query(
        "INSERT INTO zones (id, name, district_id, activation_id, organization_id, created_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&zone.id)
    .bind(&zone.name)
    .bind(&zone.district_id)
    .bind(&zone.activation_id)
    .bind(&zone.organization_id)
    .bind(now)
    .execute(executor)
    .await?;
    Ok(())
}

/// Find a zone by ID.
pub async fn find_by_id<'e, E>(executor: E, zone_id: &str) -> Result<Option<Zone>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Zone>(
        "SELECT id, name, district_id, activation_id, organization_id, created_at FROM zones WHERE id = ?",
    )
    .bind(zone_id)
    .fetch_optional(executor)
    .await
}

/// Fetch only the owning organization of a zone. Used by the ownership guard.
pub async fn organization_id_of<'e, E>(
    executor: E,
    zone_id: &str,
) -> Result<Option<String>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar("SELECT organization_id FROM zones WHERE id = ?")
        .bind(zone_id)
        .fetch_optional(executor)
        .await
}

/// Update a zone's name and district assignment. Pass the merged values;
/// `district_id = None` detaches the zone from its district.
pub async fn update<'e, E>(
    executor: E,
    zone_id: &str,
    name: &str,
    district_id: Option<&str>,
) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("UPDATE zones SET name = ?, district_id = ? WHERE id = ?")
        .bind(name)
        .bind(district_id)
        .bind(zone_id)
        .execute(executor)
        .await?;
    Ok(())
}

/// Delete a zone.
pub async fn delete<'e, E>(executor: E, zone_id: &str) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("DELETE FROM zones WHERE id = ?")
        .bind(zone_id)
        .execute(executor)
        .await?;
    Ok(())
}
