use std::rc::Rc;

use yew::Reducible;

use crate::models::Booking;
use crate::services::ApiError;
use crate::state::RequestStatus;

#[derive(Debug, Clone, PartialEq)]
pub enum BookingAction {
    Started,
    Loaded(Vec<Booking>),
    LoadedOne(Booking),
    Created(Booking),
    /// Confirmation only flips the flag on the matching booking.
    Confirmed(String),
    Deleted(String),
    Failed(ApiError),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingState {
    pub bookings: Vec<Booking>,
    pub booking: Option<Booking>,
    pub status: RequestStatus,
    pub last_error: Option<ApiError>,
}

impl BookingState {
    fn apply(&mut self, action: BookingAction) {
        match action {
            BookingAction::Started => self.status = RequestStatus::Pending,
            BookingAction::Loaded(bookings) => {
                self.bookings = bookings;
                self.succeed();
            }
            BookingAction::LoadedOne(booking) => {
                self.booking = Some(booking);
                self.succeed();
            }
            BookingAction::Created(booking) => {
                self.booking = Some(booking.clone());
                self.bookings.push(booking);
                self.succeed();
            }
            BookingAction::Confirmed(id) => {
                if let Some(existing) = self.bookings.iter_mut().find(|b| b.id == id) {
                    existing.confirmed = true;
                }
                if let Some(current) = self.booking.as_mut().filter(|b| b.id == id) {
                    current.confirmed = true;
                }
                self.succeed();
            }
            BookingAction::Deleted(id) => {
                self.bookings.retain(|b| b.id != id);
                if self.booking.as_ref().is_some_and(|b| b.id == id) {
                    self.booking = None;
                }
                self.succeed();
            }
            BookingAction::Failed(err) => {
                self.status = RequestStatus::Failed;
                self.last_error = Some(err);
            }
            BookingAction::Reset => {
                self.status = RequestStatus::Idle;
                self.last_error = None;
            }
        }
    }

    fn succeed(&mut self) {
        self.status = RequestStatus::Succeeded;
        self.last_error = None;
    }
}

impl Reducible for BookingState {
    type Action = BookingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn booking(id: &str) -> Booking {
        Booking {
            id: id.to_string(),
            name: "Guest".to_string(),
            email: "guest@example.com".to_string(),
            room: None,
            check_in_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2026, 9, 3).unwrap(),
            confirmed: false,
        }
    }

    #[test]
    fn started_then_loaded_succeeds() {
        let mut state = BookingState::default();
        state.apply(BookingAction::Started);
        state.apply(BookingAction::Loaded(vec![booking("a")]));
        assert!(state.status.is_succeeded());
        assert_eq!(state.last_error, None);
        assert_eq!(state.bookings.len(), 1);
    }

    #[test]
    fn started_then_failed_sets_a_non_empty_error() {
        let mut state = BookingState {
            bookings: vec![booking("a")],
            ..BookingState::default()
        };
        state.apply(BookingAction::Started);
        state.apply(BookingAction::Failed(ApiError::Timeout));
        assert!(state.status.is_failed());
        assert!(state.last_error.as_ref().is_some_and(|e| !e.to_string().is_empty()));
        // payload untouched on failure
        assert_eq!(state.bookings.len(), 1);
    }

    #[test]
    fn created_appends_exactly_once() {
        let mut state = BookingState::default();
        state.apply(BookingAction::Created(booking("new")));
        assert_eq!(state.bookings.iter().filter(|b| b.id == "new").count(), 1);
        assert!(state.booking.as_ref().is_some_and(|b| b.id == "new"));
    }

    #[test]
    fn confirmed_marks_only_the_target() {
        let mut state = BookingState {
            bookings: vec![booking("a"), booking("b")],
            ..BookingState::default()
        };
        state.apply(BookingAction::Confirmed("a".to_string()));
        assert!(state.bookings[0].confirmed);
        assert!(!state.bookings[1].confirmed);
    }

    #[test]
    fn deleting_an_absent_id_is_a_no_op_on_the_list() {
        let mut state = BookingState {
            bookings: vec![booking("a")],
            ..BookingState::default()
        };
        state.apply(BookingAction::Deleted("missing".to_string()));
        assert_eq!(state.bookings.len(), 1);
    }

    #[test]
    fn confirm_then_reset_returns_to_idle_with_the_flag_kept() {
        let mut state = BookingState {
            bookings: vec![booking("a")],
            ..BookingState::default()
        };
        state.apply(BookingAction::Started);
        state.apply(BookingAction::Confirmed("a".to_string()));
        state.apply(BookingAction::Reset);
        assert_eq!(state.status, RequestStatus::Idle);
        assert_eq!(state.last_error, None);
        assert!(state.bookings[0].confirmed);
    }

    #[test]
    fn reset_is_idempotent_from_idle() {
        let mut state = BookingState::default();
        state.apply(BookingAction::Reset);
        let once = state.clone();
        state.apply(BookingAction::Reset);
        assert_eq!(state, once);
    }
}
