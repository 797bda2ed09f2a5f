//! Tenant resolution and isolation enforcement.
//!
//! **Rule**: Never trust ids from the client. Resolve the caller's
//! organization from the session, then validate ownership of the target
//! resource on every mutation.

use sqlx::SqlitePool;

use crate::app::{db, error::AppError};

/// Resource kinds the ownership guard knows how to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Activation,
    District,
    Zone,
    Agent,
    Link,
}

/// Resolve the organization an identity acts for. Ordered, first match wins:
///
/// 1. profile record with a non-null organization link;
/// 2. newest organization owned directly by the user (self-serve owners
///    who signed up before profile rows existed);
/// 3. none.
pub async fn resolve_organization(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Option<String>, sqlx::Error> {
    if let Some(profile) = db::profiles::find_by_user(pool, user_id).await? {
        if let Some(organization_id) = profile.organization_id {
            return Ok(Some(organization_id));
        }
    }

    let owned = db::organizations::find_newest_owned(pool, user_id).await?;
    Ok(owned.map(|org| org.id))
}

/// Resolve the caller's organization or fail with 400 "No organization".
/// Distinct from 401: the session is fine, the account has no tenant.
pub async fn require_organization(pool: &SqlitePool, user_id: &str) -> Result<String, AppError> {
    resolve_organization(pool, user_id)
        .await
        .map_err(AppError::Database)?
        .ok_or(AppError::NoOrganization)
}

/// Single-row ownership check: does `resource_id` of `kind` belong to
/// `organization_id`? Fail-closed: a missing row, a mismatch, or a lookup
/// failure all answer `false`.
pub async fn is_in_org(
    pool: &SqlitePool,
    kind: ResourceKind,
    resource_id: &str,
    organization_id: &str,
) -> bool {
    let owner = match kind {
        ResourceKind::Activation => db::activations::organization_id_of(pool, resource_id).await,
        ResourceKind::District => db::districts::organization_id_of(pool, resource_id).await,
        ResourceKind::Zone => db::zones::organization_id_of(pool, resource_id).await,
        ResourceKind::Agent => db::agents::organization_id_of(pool, resource_id).await,
        ResourceKind::Link => db::tracked_links::organization_id_of(pool, resource_id).await,
    };

    match owner {
        Ok(Some(owner)) => owner == organization_id,
        Ok(None) => false,
        Err(err) => {
            tracing::error!(%err, ?kind, resource_id, "ownership lookup failed, denying");
            false
        }
    }
}

/// Guard for mutation handlers. Returns `Forbidden` (403) for missing rows
/// and cross-tenant ids alike, so responses never reveal whether a resource
/// exists outside the caller's organization.
pub async fn require_in_org(
    pool: &SqlitePool,
    kind: ResourceKind,
    resource_id: &str,
    organization_id: &str,
) -> Result<(), AppError> {
    if is_in_org(pool, kind, resource_id, organization_id).await {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}
