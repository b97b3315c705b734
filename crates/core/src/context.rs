//! Service-context construction for one initialization run.

use crate::config::InitializerConfig;
use crate::error::InitializationError;
use siteinit_traits::UserDirectory;
use siteinit_types::{GroupId, ServiceContext};

/// Resolves the acting user and localization defaults into the context
/// passed to every collaborator call of one run.
pub fn service_context_for(
    group_id: GroupId,
    users: &dyn UserDirectory,
    config: &InitializerConfig,
) -> Result<ServiceContext, InitializationError> {
    let user = users.current_user()?;
    let locale = users.default_locale();

    Ok(ServiceContext {
        user_id: user.id,
        scope_group_id: group_id,
        locale,
        time_zone: user.time_zone,
        add_group_permissions: config.add_group_permissions,
        add_guest_permissions: config.add_guest_permissions,
    })
}
