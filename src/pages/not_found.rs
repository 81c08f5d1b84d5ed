use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"That page does not exist."}</p>
            <Link<Route> classes="btn" to={Route::Home}>{"Back home"}</Link<Route>>
        </div>
    }
}
