use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::models::Booking;

#[derive(Properties, PartialEq)]
pub struct BookingListProps {
    pub bookings: Vec<Booking>,
}

#[function_component(BookingList)]
pub fn booking_list(props: &BookingListProps) -> Html {
    if props.bookings.is_empty() {
        return html! { <p class="empty-state">{"No bookings found"}</p> };
    }

    html! {
        <table class="booking-table">
            <thead>
                <tr>
                    <th>{"Name"}</th>
                    <th>{"Email"}</th>
                    <th>{"Room"}</th>
                    <th>{"Check-in"}</th>
                    <th>{"Check-out"}</th>
                    <th>{"Confirmed"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { for props.bookings.iter().map(|booking| {
                    let room_name = booking
                        .room
                        .as_ref()
                        .map(|r| r.name.as_str())
                        .unwrap_or("-");
                    html! {
                        <tr key={booking.id.clone()}>
                            <td>{ &booking.name }</td>
                            <td>{ &booking.email }</td>
                            <td>{ room_name }</td>
                            <td>{ booking.check_in_date.to_string() }</td>
                            <td>{ booking.check_out_date.to_string() }</td>
                            <td>{ if booking.confirmed { "✅" } else { "⏳" } }</td>
                            <td>
                                <Link<Route> classes="btn btn-small" to={Route::Booking { id: booking.id.clone() }}>
                                    {"View"}
                                </Link<Route>>
                            </td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}
