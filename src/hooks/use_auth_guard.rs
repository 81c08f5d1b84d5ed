use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::services::ApiError;
use crate::state::{AuthAction, AuthContext};
use crate::stores::session_store;

/// Redirect to the login page when no session exists. Returns whether a
/// session is present so callers can skip their mount fetch.
#[hook]
pub fn use_require_session() -> bool {
    let auth = use_context::<AuthContext>().expect("AuthContext not provided");
    let navigator = use_navigator().expect("navigator not available");
    let logged_in = auth.user.is_some();

    use_effect_with(logged_in, move |logged_in| {
        if !logged_in {
            navigator.push(&Route::Login);
        }
        || ()
    });

    logged_in
}

/// Force logout + redirect whenever a request reports `Unauthenticated`, no
/// matter which page triggered it.
#[hook]
pub fn use_session_expiry(last_error: Option<ApiError>) {
    let auth = use_context::<AuthContext>().expect("AuthContext not provided");
    let navigator = use_navigator().expect("navigator not available");

    use_effect_with(last_error, move |err| {
        if matches!(err, Some(ApiError::Unauthenticated)) {
            log::warn!("⚠️ Session rejected by the backend, forcing re-login");
            session_store::clear();
            auth.dispatch(AuthAction::LoggedOut);
            navigator.push(&Route::Login);
        }
        || ()
    });
}
