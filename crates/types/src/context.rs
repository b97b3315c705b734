//! The per-run service context passed to every collaborator call.

use crate::ids::{GroupId, UserId};
use crate::locale::{Locale, TimeZone};

/// Ambient call parameters for one initialization run: the acting user, the
/// target site scope, and the localization defaults resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceContext {
    pub user_id: UserId,
    pub scope_group_id: GroupId,
    pub locale: Locale,
    pub time_zone: TimeZone,
    pub add_group_permissions: bool,
    pub add_guest_permissions: bool,
}
