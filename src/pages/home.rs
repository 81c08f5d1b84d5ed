use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::state::AuthContext;

#[function_component(Home)]
pub fn home() -> Html {
    let auth = use_context::<AuthContext>().expect("AuthContext not provided");

    html! {
        <div class="home">
            <section class="hero">
                <h1>{"Sand Dunes Villa"}</h1>
                <p>{"Beachside rooms, booked in a minute."}</p>
                <div class="hero-actions">
                    <Link<Route> classes="btn btn-primary" to={Route::Rooms}>
                        {"Browse rooms"}
                    </Link<Route>>
                    if auth.user.is_some() {
                        <Link<Route> classes="btn" to={Route::Dashboard}>
                            {"My dashboard"}
                        </Link<Route>>
                    } else {
                        <Link<Route> classes="btn" to={Route::Login}>
                            {"Log in"}
                        </Link<Route>>
                    }
                </div>
            </section>
        </div>
    }
}
