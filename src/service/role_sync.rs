//! Role synchronization after a successful account link.
//!
//! Runs as a detached task: the verify reply never waits on it, and its
//! failures are logged, never surfaced to the user.

use std::sync::Arc;

use serenity::all::{GuildId, RoleId, UserId};
use serenity::http::Http;

use crate::api::NamelessApi;
use crate::error::AppError;

/// Dispatches a detached role-sync task for a freshly linked user.
pub fn spawn(http: Arc<Http>, api: Arc<NamelessApi>, guild_id: GuildId, user_id: UserId) {
    tokio::spawn(async move {
        if let Err(e) = sync_user(&http, &api, guild_id, user_id).await {
            tracing::error!("Role sync for user {user_id} in guild {guild_id} failed: {e}");
        }
    });
}

/// Grants the member every website-mapped role they are missing.
///
/// Per-role failures (deleted roles, missing permissions) are logged and do
/// not abort the remaining grants.
async fn sync_user(
    http: &Http,
    api: &NamelessApi,
    guild_id: GuildId,
    user_id: UserId,
) -> Result<(), AppError> {
    let wanted = api.user_role_ids(user_id.get()).await?;
    if wanted.is_empty() {
        return Ok(());
    }

    let member = http.get_member(guild_id, user_id).await?;
    let current: Vec<u64> = member.roles.iter().map(|role| role.get()).collect();

    let mut granted = 0usize;
    for role_id in wanted.into_iter().filter(|role| !current.contains(role)) {
        match http
            .add_member_role(
                guild_id,
                user_id,
                RoleId::new(role_id),
                Some("Website account link"),
            )
            .await
        {
            Ok(()) => granted += 1,
            Err(e) => tracing::error!(
                "Failed to grant role {role_id} to user {user_id} in guild {guild_id}: {e}"
            ),
        }
    }

    tracing::debug!("Granted {granted} website roles to user {user_id} in guild {guild_id}");

    Ok(())
}
