use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::{use_require_session, use_session_expiry};
use crate::services::booking_service;
use crate::state::{AuthContext, BookingAction, BookingContext};

#[derive(Properties, PartialEq)]
pub struct BookingProps {
    pub id: String,
}

#[function_component(Booking)]
pub fn booking(props: &BookingProps) -> Html {
    let auth = use_context::<AuthContext>().expect("AuthContext not provided");
    let bookings = use_context::<BookingContext>().expect("BookingContext not provided");
    let navigator = use_navigator().expect("navigator not available");
    let logged_in = use_require_session();
    use_session_expiry(bookings.last_error.clone());

    let deleting = use_state(|| false);

    {
        let bookings = bookings.clone();
        let token = auth.token().map(str::to_owned);
        use_effect_with((props.id.clone(), logged_in), move |(id, logged_in)| {
            let controller = if *logged_in {
                let id = id.clone();
                let controller = AbortController::new().ok();
                let signal = controller.as_ref().map(|c| c.signal());
                bookings.dispatch(BookingAction::Started);
                spawn_local(async move {
                    let result =
                        booking_service::get_booking(&id, token.as_deref(), signal.as_ref()).await;
                    if signal.as_ref().is_some_and(|s| s.aborted()) {
                        return;
                    }
                    match result {
                        Ok(booking) => bookings.dispatch(BookingAction::LoadedOne(booking)),
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

    // Back to the dashboard once our delete lands. Confirmation stays on the
    // page; the flipped flag re-renders it.
    {
        let bookings = bookings.clone();
        let navigator = navigator.clone();
        let deleting = deleting.clone();
        use_effect_with((*deleting, bookings.status), move |(flag, status)| {
            if *flag && status.is_succeeded() {
                bookings.dispatch(BookingAction::Reset);
                navigator.push(&Route::Dashboard);
            } else if *flag && status.is_failed() {
                deleting.set(false);
            }
            || ()
        });
    }

    let on_confirm = {
        let auth = auth.clone();
        let bookings = bookings.clone();
        let id = props.id.clone();
        Callback::from(move |_| {
            let token = auth.token().map(str::to_owned);
            let bookings = bookings.clone();
            let id = id.clone();
            bookings.dispatch(BookingAction::Started);
            spawn_local(async move {
                match booking_service::confirm_booking(&id, token.as_deref()).await {
                    Ok(()) => {
                        // The flipped flag is the page's whole outcome, so the
                        // success status is consumed right here.
                        bookings.dispatch(BookingAction::Confirmed(id));
                        bookings.dispatch(BookingAction::Reset);
                    }
                    Err(err) => bookings.dispatch(BookingAction::Failed(err)),
                }
            });
        })
    };

    let on_delete = {
        let auth = auth.clone();
        let bookings = bookings.clone();
        let deleting = deleting.clone();
        let id = props.id.clone();
        Callback::from(move |_| {
            let token = auth.token().map(str::to_owned);
            let bookings = bookings.clone();
            let id = id.clone();
            bookings.dispatch(BookingAction::Started);
            deleting.set(true);
            spawn_local(async move {
                match booking_service::delete_booking(&id, token.as_deref()).await {
                    Ok(()) => bookings.dispatch(BookingAction::Deleted(id)),
                    Err(err) => bookings.dispatch(BookingAction::Failed(err)),
                }
            });
        })
    };

    if !logged_in {
        return html! {};
    }

    let Some(booking) = bookings
        .booking
        .as_ref()
        .filter(|b| b.id == props.id)
        .cloned()
    else {
        return html! {
            if bookings.status.is_pending() {
                <p class="loading">{"Loading booking..."}</p>
            } else if let Some(err) = bookings.last_error.clone() {
                <p class="form-error">{ err.to_string() }</p>
            } else {
                <p class="loading">{"Loading booking..."}</p>
            }
        };
    };

    let busy = bookings.status.is_pending();
    let room_name = booking
        .room
        .as_ref()
        .map(|r| r.name.clone())
        .unwrap_or_else(|| "-".to_string());

    html! {
        <div class="booking-page">
            <h1>{"Booking details"}</h1>

            <dl class="booking-details">
                <dt>{"Guest"}</dt>
                <dd>{ &booking.name }</dd>
                <dt>{"Email"}</dt>
                <dd>{ &booking.email }</dd>
                <dt>{"Room"}</dt>
                <dd>{ room_name }</dd>
                <dt>{"Check-in"}</dt>
                <dd>{ booking.check_in_date.to_string() }</dd>
                <dt>{"Check-out"}</dt>
                <dd>{ booking.check_out_date.to_string() }</dd>
                <dt>{"Status"}</dt>
                <dd>{ if booking.confirmed { "Confirmed ✅" } else { "Awaiting confirmation ⏳" } }</dd>
            </dl>

            if let Some(err) = bookings.status.is_failed().then(|| bookings.last_error.clone()).flatten() {
                <p class="form-error">{ err.to_string() }</p>
            }

            <div class="booking-actions">
                if !booking.confirmed {
                    <button class="btn btn-primary" onclick={on_confirm} disabled={busy}>
                        {"Confirm"}
                    </button>
                }
                <button class="btn btn-danger" onclick={on_delete} disabled={busy}>
                    { if *deleting { "Cancelling..." } else { "Cancel booking" } }
                </button>
            </div>
        </div>
    }
}
