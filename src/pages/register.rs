use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::models::RegisterRequest;
use crate::services::{auth_service, ApiError};
use crate::state::{AuthAction, AuthContext};
use crate::stores::session_store;

#[function_component(Register)]
pub fn register() -> Html {
    let auth = use_context::<AuthContext>().expect("AuthContext not provided");
    let navigator = use_navigator().expect("navigator not available");
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let form_error = use_state(|| Option::<String>::None);

    {
        let auth = auth.clone();
        use_effect_with(
            (auth.user.is_some(), auth.status),
            move |(logged_in, status)| {
                if status.is_succeeded() {
                    auth.dispatch(AuthAction::Reset);
                }
                if *logged_in {
                    navigator.push(&Route::Dashboard);
                }
                || ()
            },
        );
    }

    let on_submit = {
        let auth = auth.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let form_error = form_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(name_input), Some(email_input), Some(password_input)) = (
                name_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let name = name_input.value();
            let email = email_input.value();
            let password = password_input.value();
            if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
                form_error.set(Some("Please fill in all fields".to_string()));
                return;
            }
            form_error.set(None);

            let auth = auth.clone();
            auth.dispatch(AuthAction::Started);
            spawn_local(async move {
                let request = RegisterRequest { name, email, password };
                match auth_service::register(&request).await {
                    Ok(user) => match session_store::save(&user) {
                        Ok(()) => auth.dispatch(AuthAction::LoggedIn(user)),
                        Err(err) => {
                            session_store::clear();
                            auth.dispatch(AuthAction::Failed(ApiError::Unknown {
                                message: format!("could not persist the session: {err}"),
                            }));
                        }
                    },
                    Err(err) => auth.dispatch(AuthAction::Failed(err)),
                }
            });
        })
    };

    let error_text = form_error
        .as_ref()
        .cloned()
        .or_else(|| auth.last_error.as_ref().map(|e| e.to_string()));

    html! {
        <div class="auth-page">
            <form class="auth-form" onsubmit={on_submit}>
                <h1>{"Create an account"}</h1>

                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input type="text" id="name" ref={name_ref} required=true />
                </div>

                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input type="email" id="email" ref={email_ref} required=true />
                </div>

                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input type="password" id="password" ref={password_ref} required=true />
                </div>

                if let Some(message) = error_text {
                    <p class="form-error">{ message }</p>
                }

                <button type="submit" class="btn btn-primary" disabled={auth.status.is_pending()}>
                    { if auth.status.is_pending() { "Registering..." } else { "Register" } }
                </button>

                <p class="auth-footer">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login}>{"Log in"}</Link<Route>>
                </p>
            </form>
        </div>
    }
}
