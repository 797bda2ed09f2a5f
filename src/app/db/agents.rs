use sqlx::{FromRow, SqliteExecutor};
use time::OffsetDateTime;

/// Database row for agents table (field staff assignable to zones).
#[derive(Debug, FromRow, serde::Serialize)]
pub struct Agent {
    pub id: String,
    pub display_name: String,
    pub organization_id: String,
    pub zone_id: Option<String>,
    pub created_at: i64,
}

/// Data structure for inserting a new agent.
pub struct NewAgent {
    pub id: String,
    pub display_name: String,
    pub organization_id: String,
}

/// Insert a new agent, initially unassigned.
pub async fn insert<'e, E>(executor: E, agent: &NewAgent) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();
    sqlx::query(
        "INSERT INTO agents (id, display_name, organization_id, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(&agent.id)
    .bind(&agent.display_name)
    .bind(&agent.organization_id)
    .bind(now)
    .execute(executor)
    .await?;
    Ok(())
}

/// Find an agent by ID.
pub async fn find_by_id<'e, E>(executor: E, agent_id: &str) -> Result<Option<Agent>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Agent>(
        "SELECT id, display_name, organization_id, zone_id, created_at FROM agents WHERE id = ?",
    )
    .bind(agent_id)
    .fetch_optional(executor)
    .await
}

/// Fetch only the owning organization of an agent. Used by the ownership guard.
pub async fn organization_id_of<'e, E>(
    executor: E,
    agent_id: &str,
) -> Result<Option<String>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar("SELECT organization_id FROM agents WHERE id = ?")
        .bind(agent_id)
        .fetch_optional(executor)
        .await
}

/// Assign an agent to a zone, or clear the assignment with `None`.
pub async fn update_zone<'e, E>(
    executor: E,
    agent_id: &str,
    zone_id: Option<&str>,
) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("UPDATE agents SET zone_id = ? WHERE id = ?")
        .bind(zone_id)
        .bind(agent_id)
        .execute(executor)
        .await?;
    Ok(())
}
