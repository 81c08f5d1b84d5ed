use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::Carousel;
use crate::models::Room;

#[derive(Properties, PartialEq)]
pub struct RoomListProps {
    pub rooms: Vec<Room>,
}

#[function_component(RoomList)]
pub fn room_list(props: &RoomListProps) -> Html {
    if props.rooms.is_empty() {
        return html! { <p class="empty-state">{"No rooms available right now."}</p> };
    }

    html! {
        <div class="room-grid">
            { for props.rooms.iter().map(|room| html! {
                <div class="room-card" key={room.id.clone()}>
                    <Carousel images={room.images.clone()} alt={room.name.clone()} />
                    <div class="room-card-body">
                        <h3>{ &room.name }</h3>
                        <p class="room-price">{ format!("${:.2} / night", room.price) }</p>
                        <Link<Route> classes="btn" to={Route::Room { id: room.id.clone() }}>
                            {"View details"}
                        </Link<Route>>
                    </div>
                </div>
            }) }
        </div>
    }
}
