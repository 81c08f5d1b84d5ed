use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Header;
use crate::pages::{
    Booking, CreateRoom, Dashboard, EditRoom, Home, Login, NotFound, Register, Room, Rooms,
};
use crate::state::{AuthContext, AuthState, BookingContext, BookingState, RoomContext, RoomState};

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/rooms")]
    Rooms,
    #[at("/rooms/create")]
    CreateRoom,
    #[at("/rooms/all/:id")]
    Room { id: String },
    #[at("/rooms/edit/:id")]
    EditRoom { id: String },
    #[at("/bookings/:id")]
    Booking { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::Rooms => html! { <Rooms /> },
        Route::CreateRoom => html! { <CreateRoom /> },
        Route::Room { id } => html! { <Room {id} /> },
        Route::EditRoom { id } => html! { <EditRoom {id} /> },
        Route::Booking { id } => html! { <Booking {id} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // Process-wide state containers, injected into pages via context. Only
    // lifecycle actions mutate them.
    let auth = use_reducer(AuthState::from_storage);
    let rooms = use_reducer(RoomState::default);
    let bookings = use_reducer(BookingState::default);

    html! {
        <BrowserRouter>
            <ContextProvider<AuthContext> context={auth}>
                <ContextProvider<RoomContext> context={rooms}>
                    <ContextProvider<BookingContext> context={bookings}>
                        <Header />
                        <main class="content">
                            <Switch<Route> render={switch} />
                        </main>
                    </ContextProvider<BookingContext>>
                </ContextProvider<RoomContext>>
            </ContextProvider<AuthContext>>
        </BrowserRouter>
    }
}
