//! # bnx-auth
//!
//! Cosmetic authentication for BioNext.
//!
//! Any non-empty email is accepted. The display name is fabricated from the
//! email's local part and the role comes from configuration. Sessions are
//! never stored anywhere: they live in the caller's [`AppState`] and are
//! dropped on logout.

pub mod error;

pub use error::AuthError;

use bnx_config::SessionConfig;
use bnx_core::entities::Session;
use bnx_core::navigation::AppState;

/// Build a session from a free-text email. No identity check is performed.
///
/// # Errors
///
/// Returns [`AuthError::EmptyEmail`] if `email` is blank.
pub fn login(email: &str, config: &SessionConfig) -> Result<Session, AuthError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AuthError::EmptyEmail);
    }

    let session = Session {
        email: email.to_string(),
        display_name: display_name_from_email(email),
        role: config.role.clone(),
    };
    tracing::debug!(display_name = %session.display_name, "session created");
    Ok(session)
}

/// `jane.doe@example.com` → `Jane Doe`.
///
/// Takes the text before the first `@`, splits it on `.`, upper-cases the
/// first character of each piece and joins the pieces with spaces. Empty
/// pieces are skipped. When nothing is left the whole email is used.
#[must_use]
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let name = local
        .split('.')
        .filter(|piece| !piece.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        email.to_string()
    } else {
        name
    }
}

fn capitalize(piece: &str) -> String {
    let mut chars = piece.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Log in and move `state` from the login screen to the dashboard.
///
/// # Errors
///
/// Returns [`AuthError::EmptyEmail`] for a blank email, or
/// [`AuthError::Navigation`] if `state` is not on the login screen.
pub fn sign_in<'a>(
    state: &'a mut AppState,
    email: &str,
    config: &SessionConfig,
) -> Result<&'a Session, AuthError> {
    let session = login(email, config)?;
    Ok(state.login(session)?)
}

/// The "Déconnexion" action: drop the session and return to the login screen.
///
/// # Errors
///
/// Returns [`AuthError::NotAuthenticated`] if nobody is logged in.
pub fn sign_out(state: &mut AppState) -> Result<Session, AuthError> {
    if state.session().is_none() {
        return Err(AuthError::NotAuthenticated);
    }
    let session = state.logout()?.ok_or(AuthError::NotAuthenticated)?;
    tracing::debug!(display_name = %session.display_name, "session cleared");
    Ok(session)
}

/// The session currently held by `state`.
///
/// # Errors
///
/// Returns [`AuthError::NotAuthenticated`] if nobody is logged in.
pub fn require_session(state: &AppState) -> Result<&Session, AuthError> {
    state.session().ok_or(AuthError::NotAuthenticated)
}
