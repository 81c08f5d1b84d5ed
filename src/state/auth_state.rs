use std::rc::Rc;

use yew::Reducible;

use crate::models::AuthUser;
use crate::services::ApiError;
use crate::state::RequestStatus;
use crate::stores::session_store;

/// Lifecycle events of the auth resource.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    Started,
    /// Login or registration succeeded; the caller has already persisted the
    /// session.
    LoggedIn(AuthUser),
    LoggedOut,
    Failed(ApiError),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub status: RequestStatus,
    pub last_error: Option<ApiError>,
}

impl AuthState {
    /// Initial state, seeded from the persisted session.
    pub fn from_storage() -> Self {
        Self {
            user: session_store::load().user,
            ..Self::default()
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.token.as_str())
    }

    fn apply(&mut self, action: AuthAction) {
        match action {
            AuthAction::Started => self.status = RequestStatus::Pending,
            AuthAction::LoggedIn(user) => {
                self.user = Some(user);
                self.status = RequestStatus::Succeeded;
                self.last_error = None;
            }
            AuthAction::LoggedOut => {
                self.user = None;
                self.status = RequestStatus::Idle;
                self.last_error = None;
            }
            AuthAction::Failed(err) => {
                self.status = RequestStatus::Failed;
                self.last_error = Some(err);
            }
            AuthAction::Reset => {
                self.status = RequestStatus::Idle;
                self.last_error = None;
            }
        }
    }
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AuthUser {
        AuthUser {
            id: "1".to_string(),
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            token: "t1".to_string(),
        }
    }

    #[test]
    fn started_then_logged_in_succeeds() {
        let mut state = AuthState::default();
        state.apply(AuthAction::Started);
        assert!(state.status.is_pending());
        state.apply(AuthAction::LoggedIn(user()));
        assert!(state.status.is_succeeded());
        assert_eq!(state.last_error, None);
        assert_eq!(state.token(), Some("t1"));
    }

    #[test]
    fn started_then_failed_keeps_the_user_untouched() {
        let mut state = AuthState {
            user: Some(user()),
            ..AuthState::default()
        };
        state.apply(AuthAction::Started);
        state.apply(AuthAction::Failed(ApiError::Validation {
            message: "bad credentials".to_string(),
        }));
        assert!(state.status.is_failed());
        assert!(state.last_error.as_ref().is_some_and(|e| !e.to_string().is_empty()));
        assert!(state.user.is_some());
    }

    #[test]
    fn logged_out_clears_the_user() {
        let mut state = AuthState {
            user: Some(user()),
            ..AuthState::default()
        };
        state.apply(AuthAction::LoggedOut);
        assert_eq!(state.user, None);
        assert_eq!(state.status, RequestStatus::Idle);
    }

    #[test]
    fn reset_is_idempotent_from_idle() {
        let mut state = AuthState::default();
        state.apply(AuthAction::Reset);
        let once = state.clone();
        state.apply(AuthAction::Reset);
        assert_eq!(state, once);
    }
}
