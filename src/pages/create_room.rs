use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::{use_require_session, use_session_expiry};
use crate::models::{RoomInput, RoomNumber};
use crate::services::room_service;
use crate::state::{AuthContext, RoomAction, RoomContext};

/// Parse a comma separated list of room numbers, rejecting anything that is
/// not a positive integer.
fn parse_room_numbers(raw: &str) -> Result<Vec<RoomNumber>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map(|number| RoomNumber {
                    number,
                    unavailable_dates: Vec::new(),
                })
                .map_err(|_| format!("'{s}' is not a valid room number"))
        })
        .collect()
}

fn parse_image_urls(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

#[function_component(CreateRoom)]
pub fn create_room() -> Html {
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
    let submitted = use_state(|| false);

    {
        let rooms = rooms.clone();
        let submitted = submitted.clone();
        use_effect_with((*submitted, rooms.status), move |(flag, status)| {
            if *flag && status.is_succeeded() {
                rooms.dispatch(RoomAction::Reset);
                navigator.push(&Route::Rooms);
            } else if *flag && status.is_failed() {
                submitted.set(false);
            }
            || ()
        });
    }

    let on_submit = {
        let auth = auth.clone();
        let rooms = rooms.clone();
        let submitted = submitted.clone();
        let name_ref = name_ref.clone();
        let price_ref = price_ref.clone();
        let description_ref = description_ref.clone();
        let numbers_ref = numbers_ref.clone();
        let images_ref = images_ref.clone();
        let form_error = form_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

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
            let room_numbers = match parse_room_numbers(&numbers_input.value()) {
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
                images: parse_image_urls(&images_input.value()),
            };

            let token = auth.token().map(str::to_owned);
            let rooms = rooms.clone();
            rooms.dispatch(RoomAction::Started);
            submitted.set(true);
            spawn_local(async move {
                match room_service::create_room(&input, token.as_deref()).await {
                    Ok(room) => rooms.dispatch(RoomAction::Created(room)),
                    Err(err) => rooms.dispatch(RoomAction::Failed(err)),
                }
            });
        })
    };

    if !logged_in {
        return html! {};
    }

    let error_text = form_error
        .as_ref()
        .cloned()
        .or_else(|| {
            rooms
                .status
                .is_failed()
                .then(|| rooms.last_error.as_ref().map(|e| e.to_string()))
                .flatten()
        });

    html! {
        <div class="room-form-page">
            <form class="room-form" onsubmit={on_submit}>
                <h1>{"Add a room"}</h1>

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
                    <input type="text" id="numbers" placeholder="101, 102, 103" ref={numbers_ref} />
                </div>
                <div class="form-group">
                    <label for="images">{"Image URLs (one per line)"}</label>
                    <textarea id="images" rows="3" ref={images_ref}></textarea>
                </div>

                if let Some(message) = error_text {
                    <p class="form-error">{ message }</p>
                }

                <button type="submit" class="btn btn-primary" disabled={rooms.status.is_pending()}>
                    { if rooms.status.is_pending() { "Saving..." } else { "Create room" } }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_image_urls, parse_room_numbers};

    #[test]
    fn room_numbers_parse_and_trim() {
        let numbers = parse_room_numbers("101, 102 ,103").unwrap();
        assert_eq!(
            numbers.iter().map(|n| n.number).collect::<Vec<_>>(),
            vec![101, 102, 103]
        );
    }

    #[test]
    fn empty_entries_are_skipped() {
        let numbers = parse_room_numbers("101,,102,").unwrap();
        assert_eq!(numbers.len(), 2);
    }

    #[test]
    fn junk_is_rejected_with_the_offending_entry() {
        let err = parse_room_numbers("101, abc").unwrap_err();
        assert!(err.contains("abc"));
    }

    #[test]
    fn image_urls_split_on_lines() {
        let urls = parse_image_urls("http://a/1.jpg\n\n  http://a/2.jpg  \n");
        assert_eq!(urls, vec!["http://a/1.jpg", "http://a/2.jpg"]);
    }
}
