use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::services::auth_service;
use crate::state::{AuthAction, AuthContext};
use crate::stores::session_store;

#[function_component(Header)]
pub fn header() -> Html {
    let auth = use_context::<AuthContext>().expect("AuthContext not provided");
    let navigator = use_navigator().expect("navigator not available");
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let on_logout = {
        let auth = auth.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_| {
            let token = auth.token().map(str::to_owned);
            // Drop the local session first so the UI never shows a logged-in
            // state for a session the user just abandoned.
            session_store::clear();
            auth.dispatch(AuthAction::LoggedOut);
            menu_open.set(false);
            navigator.push(&Route::Login);

            // Best effort server-side invalidation.
            spawn_local(async move {
                if let Err(err) = auth_service::logout(token.as_deref()).await {
                    log::warn!("⚠️ Server-side logout failed: {err}");
                }
            });
        })
    };

    let nav_class = if *menu_open { "nav-links open" } else { "nav-links" };

    html! {
        <header class="site-header">
            <Link<Route> classes="logo" to={Route::Home}>
                <span class="logo-icon">{"🏖️"}</span>
                <span class="logo-text">{"Sand Dunes Villa"}</span>
            </Link<Route>>

            <button class="menu-toggle" onclick={toggle_menu}>{"☰"}</button>

            <nav class={nav_class}>
                <Link<Route> classes="nav-link" to={Route::Rooms}>{"Rooms"}</Link<Route>>
                if auth.user.is_some() {
                    <Link<Route> classes="nav-link" to={Route::Dashboard}>{"Dashboard"}</Link<Route>>
                    <button class="nav-link logout" onclick={on_logout}>{"Log out"}</button>
                } else {
                    <Link<Route> classes="nav-link" to={Route::Login}>{"Log in"}</Link<Route>>
                    <Link<Route> classes="nav-link" to={Route::Register}>{"Register"}</Link<Route>>
                }
            </nav>

            if *menu_open {
                <div class="menu-backdrop" onclick={close_menu}></div>
            }
        </header>
    }
}
