use bnx_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("email is required to log in")]
    EmptyEmail,

    #[error("not logged in: run `login <email>` first")]
    NotAuthenticated,

    #[error(transparent)]
    Navigation(#[from] CoreError),
}
