use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;
use yew::prelude::*;

use crate::components::BookingList;
use crate::hooks::{use_require_session, use_session_expiry};
use crate::services::booking_service;
use crate::state::{AuthContext, BookingAction, BookingContext};

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let auth = use_context::<AuthContext>().expect("AuthContext not provided");
    let bookings = use_context::<BookingContext>().expect("BookingContext not provided");
    let logged_in = use_require_session();
    use_session_expiry(bookings.last_error.clone());

    // Mount fetch, aborted on unmount. An aborted request dispatches nothing.
    {
        let bookings = bookings.clone();
        let token = auth.token().map(str::to_owned);
        use_effect_with(logged_in, move |logged_in| {
            let controller = if *logged_in {
                let controller = AbortController::new().ok();
                let signal = controller.as_ref().map(|c| c.signal());
                bookings.dispatch(BookingAction::Started);
                spawn_local(async move {
                    let result = booking_service::get_bookings(token.as_deref(), signal.as_ref()).await;
                    if signal.as_ref().is_some_and(|s| s.aborted()) {
                        return;
                    }
                    match result {
                        Ok(list) => bookings.dispatch(BookingAction::Loaded(list)),
                        Err(err) => bookings.dispatch(BookingAction::Failed(err)),
                    }
                });
                controller
            } else {
                None
            };
            move || {
                if let Some(controller) = controller {
                    controller.abort();
                }
            }
        });
    }

    if !logged_in {
        return html! {};
    }

    html! {
        <div class="dashboard">
            <h1>{"Your bookings"}</h1>

            if bookings.status.is_pending() {
                <p class="loading">{"Loading bookings..."}</p>
            } else if let Some(err) = bookings.status.is_failed().then(|| bookings.last_error.clone()).flatten() {
                <p class="form-error">{ err.to_string() }</p>
            } else {
                <BookingList bookings={bookings.bookings.clone()} />
            }
        </div>
    }
}
