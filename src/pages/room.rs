use chrono::NaiveDate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, HtmlInputElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::Carousel;
use crate::hooks::use_session_expiry;
use crate::models::BookingInput;
use crate::services::{booking_service, room_service};
use crate::state::{AuthContext, BookingAction, BookingContext, RoomAction, RoomContext};

#[derive(Properties, PartialEq)]
pub struct RoomProps {
    pub id: String,
}

#[function_component(Room)]
pub fn room(props: &RoomProps) -> Html {
    let auth = use_context::<AuthContext>().expect("AuthContext not provided");
    let rooms = use_context::<RoomContext>().expect("RoomContext not provided");
    let bookings = use_context::<BookingContext>().expect("BookingContext not provided");
    let navigator = use_navigator().expect("navigator not available");
    use_session_expiry(rooms.last_error.clone());
    use_session_expiry(bookings.last_error.clone());

    // Local intent flags. The containers report one shared status per
    // resource, so navigation reacts only to operations this page started.
    let deleting = use_state(|| false);
    let booking_sent = use_state(|| false);

    let guest_name_ref = use_node_ref();
    let guest_email_ref = use_node_ref();
    let check_in_ref = use_node_ref();
    let check_out_ref = use_node_ref();
    let form_error = use_state(|| Option::<String>::None);

    {
        let rooms = rooms.clone();
        let token = auth.token().map(str::to_owned);
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            let controller = AbortController::new().ok();
            let signal = controller.as_ref().map(|c| c.signal());
            rooms.dispatch(RoomAction::Started);
            spawn_local(async move {
                let result = room_service::get_room(&id, token.as_deref(), signal.as_ref()).await;
                if signal.as_ref().is_some_and(|s| s.aborted()) {
                    return;
                }
                match result {
                    Ok(room) => rooms.dispatch(RoomAction::LoadedOne(room)),
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

    // Leave for the room list once our delete lands.
    {
        let rooms = rooms.clone();
        let navigator = navigator.clone();
        let deleting = deleting.clone();
        use_effect_with((*deleting, rooms.status), move |(flag, status)| {
            if *flag && status.is_succeeded() {
                rooms.dispatch(RoomAction::Reset);
                navigator.push(&Route::Rooms);
            } else if *flag && status.is_failed() {
                deleting.set(false);
            }
            || ()
        });
    }

    // Leave for the dashboard once our booking lands.
    {
        let bookings = bookings.clone();
        let navigator = navigator.clone();
        let booking_sent = booking_sent.clone();
        use_effect_with((*booking_sent, bookings.status), move |(sent, status)| {
            if *sent && status.is_succeeded() {
                bookings.dispatch(BookingAction::Reset);
                navigator.push(&Route::Dashboard);
            } else if *sent && status.is_failed() {
                booking_sent.set(false);
            }
            || ()
        });
    }

    let on_delete = {
        let auth = auth.clone();
        let rooms = rooms.clone();
        let deleting = deleting.clone();
        let id = props.id.clone();
        Callback::from(move |_| {
            let token = auth.token().map(str::to_owned);
            let rooms = rooms.clone();
            let id = id.clone();
            rooms.dispatch(RoomAction::Started);
            deleting.set(true);
            spawn_local(async move {
                match room_service::delete_room(&id, token.as_deref()).await {
                    Ok(()) => rooms.dispatch(RoomAction::Deleted(id)),
                    Err(err) => rooms.dispatch(RoomAction::Failed(err)),
                }
            });
        })
    };

    let on_book = {
        let auth = auth.clone();
        let bookings = bookings.clone();
        let booking_sent = booking_sent.clone();
        let guest_name_ref = guest_name_ref.clone();
        let guest_email_ref = guest_email_ref.clone();
        let check_in_ref = check_in_ref.clone();
        let check_out_ref = check_out_ref.clone();
        let form_error = form_error.clone();
        let room_id = props.id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(name_input), Some(email_input), Some(in_input), Some(out_input)) = (
                guest_name_ref.cast::<HtmlInputElement>(),
                guest_email_ref.cast::<HtmlInputElement>(),
                check_in_ref.cast::<HtmlInputElement>(),
                check_out_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let name = name_input.value();
            let email = email_input.value();
            let check_in = NaiveDate::parse_from_str(&in_input.value(), "%Y-%m-%d");
            let check_out = NaiveDate::parse_from_str(&out_input.value(), "%Y-%m-%d");

            let (Ok(check_in_date), Ok(check_out_date)) = (check_in, check_out) else {
                form_error.set(Some("Please pick both dates".to_string()));
                return;
            };
            if name.trim().is_empty() || email.trim().is_empty() {
                form_error.set(Some("Please fill in your name and email".to_string()));
                return;
            }
            if check_out_date <= check_in_date {
                form_error.set(Some("Check-out must be after check-in".to_string()));
                return;
            }
            form_error.set(None);

            let token = auth.token().map(str::to_owned);
            let bookings = bookings.clone();
            let input = BookingInput {
                name,
                email,
                room_id: room_id.clone(),
                check_in_date,
                check_out_date,
            };
            bookings.dispatch(BookingAction::Started);
            booking_sent.set(true);
            spawn_local(async move {
                match booking_service::create_booking(&input, token.as_deref()).await {
                    Ok(booking) => bookings.dispatch(BookingAction::Created(booking)),
                    Err(err) => bookings.dispatch(BookingAction::Failed(err)),
                }
            });
        })
    };

    let Some(room) = rooms
        .room
        .as_ref()
        .filter(|r| r.id == props.id)
        .cloned()
    else {
        return html! {
            if rooms.status.is_pending() {
                <p class="loading">{"Loading room..."}</p>
            } else if let Some(err) = rooms.last_error.clone() {
                <p class="form-error">{ err.to_string() }</p>
            } else {
                <p class="loading">{"Loading room..."}</p>
            }
        };
    };

    let busy = rooms.status.is_pending() || bookings.status.is_pending();

    html! {
        <div class="room-page">
            <Carousel images={room.images.clone()} alt={room.name.clone()} />

            <div class="room-details">
                <h1>{ &room.name }</h1>
                <p class="room-price">{ format!("${:.2} / night", room.price) }</p>
                <p class="room-description">{ &room.description }</p>
                <p class="room-numbers">
                    { format!("Rooms: {}", room.room_numbers.iter()
                        .map(|n| n.number.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")) }
                </p>

                if auth.user.is_some() {
                    <div class="room-admin">
                        <Link<Route> classes="btn" to={Route::EditRoom { id: room.id.clone() }}>
                            {"Edit"}
                        </Link<Route>>
                        <button class="btn btn-danger" onclick={on_delete} disabled={busy}>
                            { if *deleting { "Deleting..." } else { "Delete" } }
                        </button>
                    </div>
                }
            </div>

            if auth.user.is_some() {
                <form class="booking-form" onsubmit={on_book}>
                    <h2>{"Book this room"}</h2>

                    <div class="form-group">
                        <label for="guest-name">{"Name"}</label>
                        <input type="text" id="guest-name" ref={guest_name_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="guest-email">{"Email"}</label>
                        <input type="email" id="guest-email" ref={guest_email_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="check-in">{"Check-in"}</label>
                        <input type="date" id="check-in" ref={check_in_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="check-out">{"Check-out"}</label>
                        <input type="date" id="check-out" ref={check_out_ref} required=true />
                    </div>

                    if let Some(message) = (*form_error).clone() {
                        <p class="form-error">{ message }</p>
                    } else if let Some(err) = bookings.status.is_failed().then(|| bookings.last_error.clone()).flatten() {
                        <p class="form-error">{ err.to_string() }</p>
                    }

                    <button type="submit" class="btn btn-primary" disabled={busy}>
                        { if *booking_sent && bookings.status.is_pending() { "Booking..." } else { "Book now" } }
                    </button>
                </form>
            } else {
                <p class="booking-hint">
                    <Link<Route> to={Route::Login}>{"Log in"}</Link<Route>>
                    {" to book this room."}
                </p>
            }
        </div>
    }
}
