use anyhow::Context;
use bnx_config::BnxConfig;
use bnx_core::entities::Session;

/// Log in for a one-shot command. The session lives for this invocation only.
pub fn login(email: &str, config: &BnxConfig) -> anyhow::Result<Session> {
    bnx_auth::login(email, &config.session).context("login failed")
}
