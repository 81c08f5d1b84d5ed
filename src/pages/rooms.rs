use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::RoomList;
use crate::hooks::use_session_expiry;
use crate::services::room_service;
use crate::state::{AuthContext, RoomAction, RoomContext};

#[function_component(Rooms)]
pub fn rooms() -> Html {
    let auth = use_context::<AuthContext>().expect("AuthContext not provided");
    let rooms = use_context::<RoomContext>().expect("RoomContext not provided");
    use_session_expiry(rooms.last_error.clone());

    {
        let rooms = rooms.clone();
        let token = auth.token().map(str::to_owned);
        use_effect_with((), move |_| {
            let controller = AbortController::new().ok();
            let signal = controller.as_ref().map(|c| c.signal());
            rooms.dispatch(RoomAction::Started);
            spawn_local(async move {
                let result = room_service::get_rooms(token.as_deref(), signal.as_ref()).await;
                if signal.as_ref().is_some_and(|s| s.aborted()) {
                    return;
                }
                match result {
                    Ok(list) => rooms.dispatch(RoomAction::Loaded(list)),
                    Err(err) => rooms.dispatch(RoomAction::Failed(err)),
                }
            });
            move || {
                if let Some(controller) = controller {
                    controller.abort();
                }
            }
        });
    }

    html! {
        <div class="rooms-page">
            <div class="page-heading">
                <h1>{"Our rooms"}</h1>
                if auth.user.is_some() {
                    <Link<Route> classes="btn" to={Route::CreateRoom}>{"Add a room"}</Link<Route>>
                }
            </div>

            if rooms.status.is_pending() {
                <p class="loading">{"Loading rooms..."}</p>
            } else if let Some(err) = rooms.status.is_failed().then(|| rooms.last_error.clone()).flatten() {
                <p class="form-error">{ err.to_string() }</p>
            } else {
                <RoomList rooms={rooms.rooms.clone()} />
            }
        </div>
    }
}
