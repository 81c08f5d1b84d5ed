use std::rc::Rc;

use yew::Reducible;

use crate::models::Room;
use crate::services::ApiError;
use crate::state::RequestStatus;

/// Lifecycle events of the room resource. Success variants carry the payload
/// merge for their operation.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomAction {
    Started,
    /// List fetch: replace.
    Loaded(Vec<Room>),
    /// Detail fetch: fill the single-room slot.
    LoadedOne(Room),
    /// Create: append.
    Created(Room),
    /// Update: replace by id.
    Updated(Room),
    /// Delete: remove by id.
    Deleted(String),
    Failed(ApiError),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomState {
    pub rooms: Vec<Room>,
    pub room: Option<Room>,
    pub status: RequestStatus,
    pub last_error: Option<ApiError>,
}

impl RoomState {
    fn apply(&mut self, action: RoomAction) {
        match action {
            RoomAction::Started => self.status = RequestStatus::Pending,
            RoomAction::Loaded(rooms) => {
                self.rooms = rooms;
                self.succeed();
            }
            RoomAction::LoadedOne(room) => {
                self.room = Some(room);
                self.succeed();
            }
            RoomAction::Created(room) => {
                self.rooms.push(room);
                self.succeed();
            }
            RoomAction::Updated(room) => {
                if let Some(existing) = self.rooms.iter_mut().find(|r| r.id == room.id) {
                    *existing = room.clone();
                }
                if self.room.as_ref().is_some_and(|r| r.id == room.id) {
                    self.room = Some(room);
                }
                self.succeed();
            }
            RoomAction::Deleted(id) => {
                self.rooms.retain(|r| r.id != id);
                if self.room.as_ref().is_some_and(|r| r.id == id) {
                    self.room = None;
                }
                self.succeed();
            }
            RoomAction::Failed(err) => {
                self.status = RequestStatus::Failed;
                self.last_error = Some(err);
            }
            RoomAction::Reset => {
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

impl Reducible for RoomState {
    type Action = RoomAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: &str) -> Room {
        Room {
            id: id.to_string(),
            name: format!("Room {id}"),
            price: 100.0,
            description: String::new(),
            room_numbers: Vec::new(),
            images: Vec::new(),
        }
    }

    #[test]
    fn started_then_loaded_replaces_the_list() {
        let mut state = RoomState {
            rooms: vec![room("old")],
            ..RoomState::default()
        };
        state.apply(RoomAction::Started);
        assert!(state.status.is_pending());
        state.apply(RoomAction::Loaded(vec![room("a"), room("b")]));
        assert!(state.status.is_succeeded());
        assert_eq!(state.last_error, None);
        assert_eq!(state.rooms.len(), 2);
    }

    #[test]
    fn created_appends_exactly_once() {
        let mut state = RoomState::default();
        state.apply(RoomAction::Started);
        state.apply(RoomAction::Created(room("a")));
        assert_eq!(state.rooms.iter().filter(|r| r.id == "a").count(), 1);
    }

    #[test]
    fn updated_replaces_by_id() {
        let mut state = RoomState {
            rooms: vec![room("a"), room("b")],
            ..RoomState::default()
        };
        let mut changed = room("a");
        changed.price = 250.0;
        state.apply(RoomAction::Updated(changed));
        assert_eq!(state.rooms[0].price, 250.0);
        assert_eq!(state.rooms[1].price, 100.0);
    }

    #[test]
    fn deleting_an_absent_id_leaves_the_list_unchanged() {
        let mut state = RoomState {
            rooms: vec![room("a"), room("b")],
            ..RoomState::default()
        };
        state.apply(RoomAction::Deleted("missing".to_string()));
        assert_eq!(state.rooms.len(), 2);
        assert!(state.status.is_succeeded());
    }

    #[test]
    fn rejected_delete_keeps_the_list_and_classifies_not_found() {
        let mut state = RoomState {
            rooms: vec![room("a")],
            ..RoomState::default()
        };
        state.apply(RoomAction::Started);
        state.apply(RoomAction::Failed(ApiError::NotFound {
            message: "room not found".to_string(),
        }));
        assert!(state.status.is_failed());
        assert_eq!(state.rooms.len(), 1);
        assert!(matches!(state.last_error, Some(ApiError::NotFound { .. })));
    }

    #[test]
    fn reset_clears_status_but_not_payload() {
        let mut state = RoomState::default();
        state.apply(RoomAction::Started);
        state.apply(RoomAction::Loaded(vec![room("a")]));
        state.apply(RoomAction::Reset);
        assert_eq!(state.status, RequestStatus::Idle);
        assert_eq!(state.rooms.len(), 1);

        let once = state.clone();
        state.apply(RoomAction::Reset);
        assert_eq!(state, once);
    }
}
