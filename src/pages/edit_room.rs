use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::{use_require_session, use_session_expiry};
use crate::models::{Room as RoomModel, RoomInput, RoomNumber};
use crate::services::room_service;
use crate::state::{AuthContext, RoomAction, RoomContext};

#[derive(Properties, PartialEq)]
pub struct EditRoomProps {
    pub id: String,
}

fn parse_room_numbers(raw: &str, existing: &RoomModel) -> Result<Vec<RoomNumber>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let number = s
                .parse::<u32>()
                .map_err(|_| format!("'{s}' is not a valid room number"))?;
            // Keep the calendar of a number that already existed.
            let unavailable_dates = existing
                .room_numbers
                .iter()
                .find(|n| n.number == number)
                .map(|n| n.unavailable_dates.clone())
                .unwrap_or_default();
            Ok(RoomNumber {
                number,
                unavailable_dates,
            })
        })
        .collect()
}

#[function_component(EditRoom)]
pub fn edit_room(props: &EditRoomProps) -> Html {
    let auth = use_context::<AuthContext>().expect("AuthContext not provided");
    let rooms = use_context::<RoomContext>().expect("RoomContext not provided");
    let navigator = use_navigator().expect("navigator not available");
    let logged_in = use_require_session();
    use_session_expiry(rooms.last_error.clone());

    let name_ref = use_node_ref();
    let price_ref = use_node_ref();
    let description_ref = use_node_ref();
    let numbers_ref = use_node_ref();
    let images_ref = use_node_ref();
    let form_error = use_state(|| Option::<String>::None);
    let saving = use_state(|| false);

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

    // Fill the form once the room is loaded. Inputs stay uncontrolled so a
    // re-render never wipes in-progress edits.
    {
        let name_ref = name_ref.clone();
        let price_ref = price_ref.clone();
        let description_ref = description_ref.clone();
        let numbers_ref = numbers_ref.clone();
        let images_ref = images_ref.clone();
        let id = props.id.clone();
        use_effect_with(rooms.room.clone(), move |room| {
            if let Some(room) = room.as_ref().filter(|r| r.id == id) {
                if let Some(input) = name_ref.cast::<HtmlInputElement>() {
                    input.set_value(&room.name);
                }
                if let Some(input) = price_ref.cast::<HtmlInputElement>() {
                    input.set_value(&room.price.to_string());
                }
                if let Some(input) = description_ref.cast::<HtmlTextAreaElement>() {
                    input.set_value(&room.description);
                }
                if let Some(input) = numbers_ref.cast::<HtmlInputElement>() {
                    let numbers = room
                        .room_numbers
                        .iter()
                        .map(|n| n.number.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    input.set_value(&numbers);
                }
                if let Some(input) = images_ref.cast::<HtmlTextAreaElement>() {
                    input.set_value(&room.images.join("\n"));
                }
            }
            || ()
        });
    }

    // Back to the detail page once our save lands.
    {
        let rooms = rooms.clone();
        let navigator = navigator.clone();
        let saving = saving.clone();
        let id = props.id.clone();
        use_effect_with((*saving, rooms.status), move |(flag, status)| {
            if *flag && status.is_succeeded() {
                rooms.dispatch(RoomAction::Reset);
                navigator.push(&Route::Room { id: id.clone() });
            } else if *flag && status.is_failed() {
                saving.set(false);
            }
            || ()
        });
    }

    let on_submit = {
        let auth = auth.clone();
        let rooms = rooms.clone();
        let saving = saving.clone();
        let name_ref = name_ref.clone();
        let price_ref = price_ref.clone();
        let description_ref = description_ref.clone();
        let numbers_ref = numbers_ref.clone();
        let images_ref = images_ref.clone();
        let form_error = form_error.clone();
        let id = props.id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(existing) = rooms.room.as_ref().filter(|r| r.id == id).cloned() else {
                return;
            };
            let (Some(name_input), Some(price_input), Some(description_input), Some(numbers_input), Some(images_input)) = (
                name_ref.cast::<HtmlInputElement>(),
                price_ref.cast::<HtmlInputElement>(),
                description_ref.cast::<HtmlTextAreaElement>(),
                numbers_ref.cast::<HtmlInputElement>(),
                images_ref.cast::<HtmlTextAreaElement>(),
            ) else {
                return;
            };

            let name = name_input.value();
            if name.trim().is_empty() {
                form_error.set(Some("Please give the room a name".to_string()));
                return;
            }
            let Ok(price) = price_input.value().trim().parse::<f64>() else {
                form_error.set(Some("Price must be a number".to_string()));
                return;
            };
            let room_numbers = match parse_room_numbers(&numbers_input.value(), &existing) {
                Ok(numbers) => numbers,
                Err(message) => {
                    form_error.set(Some(message));
                    return;
                }
            };
            form_error.set(None);

            let input = RoomInput {
                name,
                price,
                description: description_input.value(),
                room_numbers,
                images: images_input
                    .value()
                    .lines()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned)
                    .collect(),
            };

            let token = auth.token().map(str::to_owned);
            let rooms = rooms.clone();
            let id = id.clone();
            rooms.dispatch(RoomAction::Started);
            saving.set(true);
            spawn_local(async move {
                match room_service::update_room(&id, &input, token.as_deref()).await {
                    Ok(room) => rooms.dispatch(RoomAction::Updated(room)),
                    Err(err) => rooms.dispatch(RoomAction::Failed(err)),
                }
            });
        })
    };

    if !logged_in {
        return html! {};
    }

    let loaded = rooms.room.as_ref().is_some_and(|r| r.id == props.id);
    let error_text = form_error.as_ref().cloned().or_else(|| {
        rooms
            .status
            .is_failed()
            .then(|| rooms.last_error.as_ref().map(|e| e.to_string()))
            .flatten()
    });

    html! {
        <div class="room-form-page">
            <form class="room-form" onsubmit={on_submit}>
                <h1>{"Edit room"}</h1>

                if !loaded && rooms.status.is_pending() {
                    <p class="loading">{"Loading room..."}</p>
                }

                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input type="text" id="name" ref={name_ref} required=true />
                </div>
                <div class="form-group">
                    <label for="price">{"Price per night"}</label>
                    <input type="number" id="price" step="0.01" min="0" ref={price_ref} required=true />
                </div>
                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <textarea id="description" rows="4" ref={description_ref}></textarea>
                </div>
                <div class="form-group">
                    <label for="numbers">{"Room numbers (comma separated)"}</label>
                    <input type="text" id="numbers" ref={numbers_ref} />
                </div>
                <div class="form-group">
                    <label for="images">{"Image URLs (one per line)"}</label>
                    <textarea id="images" rows="3" ref={images_ref}></textarea>
                </div>

                if let Some(message) = error_text {
                    <p class="form-error">{ message }</p>
                }

                <button type="submit" class="btn btn-primary" disabled={!loaded || rooms.status.is_pending()}>
                    { if *saving && rooms.status.is_pending() { "Saving..." } else { "Save changes" } }
                </button>
            </form>
        </div>
    }
}
