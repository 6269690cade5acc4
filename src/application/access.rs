// src/application/access.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

pub(crate) fn ensure_capability(
    actor: &AuthenticatedUser,
    resource: &str,
    action: &str,
) -> ApplicationResult<()> {
    if actor.has_capability(resource, action) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "missing capability {resource}:{action}"
        )))
    }
}

/// Anonymous callers are rejected as unauthorized, authenticated ones without the
/// capability as forbidden.
pub(crate) fn require_capability<'a>(
    actor: Option<&'a AuthenticatedUser>,
    resource: &str,
    action: &str,
) -> ApplicationResult<&'a AuthenticatedUser> {
    let actor = actor.ok_or_else(|| ApplicationError::unauthorized("authentication required"))?;
    ensure_capability(actor, resource, action)?;
    Ok(actor)
}

pub(crate) fn can_view_hidden(actor: Option<&AuthenticatedUser>, resource: &str) -> bool {
    actor.is_some_and(|actor| actor.has_capability(resource, "view:hidden"))
}
