//! In-memory screen navigation with an explicitly owned session.
//!
//! The session lives inside [`AppState`] and is handed to callers by
//! reference. Logging out drops it; nothing is global.

use crate::entities::Session;
use crate::enums::ScreenKind;
use crate::errors::CoreError;

/// The screen currently displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    Report { project_id: String },
}

impl Screen {
    #[must_use]
    pub const fn kind(&self) -> ScreenKind {
        match self {
            Self::Login => ScreenKind::Login,
            Self::Dashboard => ScreenKind::Dashboard,
            Self::Report { .. } => ScreenKind::Report,
        }
    }
}

/// Navigation state: the current screen plus the session that unlocked it.
#[derive(Debug, Clone)]
pub struct AppState {
    screen: Screen,
    session: Option<Session>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            screen: Screen::Login,
            session: None,
        }
    }

    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Project shown on the report screen, if any.
    #[must_use]
    pub fn open_project(&self) -> Option<&str> {
        match &self.screen {
            Screen::Report { project_id } => Some(project_id),
            Screen::Login | Screen::Dashboard => None,
        }
    }

    /// Login → Dashboard, installing the session.
    pub fn login(&mut self, session: Session) -> Result<&Session, CoreError> {
        self.transition(Screen::Dashboard)?;
        Ok(self.session.insert(session))
    }

    /// Dashboard → Report.
    pub fn open(&mut self, project_id: &str) -> Result<(), CoreError> {
        self.transition(Screen::Report {
            project_id: project_id.to_string(),
        })
    }

    /// Report → Dashboard.
    pub fn back(&mut self) -> Result<(), CoreError> {
        self.transition(Screen::Dashboard)
    }

    /// Dashboard | Report → Login. Clears the session unconditionally.
    pub fn logout(&mut self) -> Result<Option<Session>, CoreError> {
        self.transition(Screen::Login)?;
        Ok(self.session.take())
    }

    fn transition(&mut self, next: Screen) -> Result<(), CoreError> {
        let from = self.screen.kind();
        let to = next.kind();
        if !from.can_transition_to(to) {
            return Err(CoreError::InvalidTransition {
                entity_type: "screen".to_string(),
                id: self
                    .open_project()
                    .unwrap_or(from.as_str())
                    .to_string(),
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        self.screen = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn session() -> Session {
        Session {
            email: "jane.doe@example.com".into(),
            display_name: "Jane Doe".into(),
            role: "Chercheur Senior".into(),
        }
    }

    #[test]
    fn full_round_trip_through_screens() {
        let mut state = AppState::new();
        assert_eq!(state.screen(), &Screen::Login);

        state.login(session()).unwrap();
        assert_eq!(state.screen(), &Screen::Dashboard);
        assert_eq!(state.session().unwrap().display_name, "Jane Doe");

        state.open("gen-001").unwrap();
        assert_eq!(state.open_project(), Some("gen-001"));

        state.back().unwrap();
        assert_eq!(state.screen(), &Screen::Dashboard);

        let dropped = state.logout().unwrap();
        assert_eq!(dropped, Some(session()));
        assert!(state.session().is_none());
        assert_eq!(state.screen(), &Screen::Login);
    }

    #[test]
    fn logout_from_report_clears_session() {
        let mut state = AppState::new();
        state.login(session()).unwrap();
        state.open("bio-789").unwrap();
        state.logout().unwrap();
        assert!(state.session().is_none());
        assert_eq!(state.open_project(), None);
    }

    #[test]
    fn cannot_open_report_before_login() {
        let mut state = AppState::new();
        let err = state.open("gen-001").expect_err("should be rejected");
        assert!(err.to_string().contains("from login to report"));
        assert_eq!(state.screen(), &Screen::Login);
    }

    #[test]
    fn cannot_open_report_from_report() {
        let mut state = AppState::new();
        state.login(session()).unwrap();
        state.open("gen-001").unwrap();
        assert!(state.open("ther-045").is_err());
        assert_eq!(state.open_project(), Some("gen-001"));
    }

    #[test]
    fn second_login_is_rejected() {
        let mut state = AppState::new();
        state.login(session()).unwrap();
        assert!(state.login(session()).is_err());
    }
}
