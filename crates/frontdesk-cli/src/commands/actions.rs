//! Desk actions shared by the one-shot subcommands and the desk prompt.
//!
//! This is the error boundary: every `FrontdeskError` from the use case is
//! turned into a `Notice` here and never travels further.

use frontdesk_application::{BookingRequest, BookingUseCase};
use frontdesk_core::catalog::Room;

use crate::presenter::{self, Notice};

/// One operator action against the booking core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Book(BookingRequest),
    Bookings,
    Checkout(String),
    Delete(String),
    Available,
    Status(String),
}

impl Action {
    /// True for actions that change which rooms are booked.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Action::Book(_) | Action::Checkout(_) | Action::Delete(_)
        )
    }
}

/// Something to show the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Notice(Notice),
    Available(Vec<Room>),
    Text(String),
}

impl Output {
    pub fn is_error(&self) -> bool {
        matches!(self, Output::Notice(notice) if notice.is_error())
    }

    /// Text for the terminal, colored where it helps.
    pub fn render(&self) -> String {
        match self {
            Output::Notice(notice) => notice.render(),
            Output::Available(rooms) => presenter::available_rooms(rooms),
            Output::Text(text) => text.clone(),
        }
    }
}

/// Runs `action` and describes the result.
pub fn perform(usecase: &BookingUseCase, action: &Action) -> Output {
    let result = match action {
        Action::Book(request) => usecase.book(request).map(|b| Notice::booked(&b)),
        Action::Bookings => usecase.list_bookings().map(|b| Notice::bookings(&b)),
        Action::Checkout(room_id) => usecase.checkout(room_id).map(|b| Notice::checked_out(&b)),
        Action::Delete(room_id) => usecase.delete_booking(room_id).map(|b| Notice::deleted(&b)),
        Action::Status(room_id) => usecase
            .room_status(room_id)
            .map(|status| Notice::room_status(room_id, &status)),
        Action::Available => {
            return match usecase.list_available() {
                Ok(rooms) => Output::Available(rooms),
                Err(e) => Output::Notice(Notice::from_error(&e)),
            };
        }
    };

    match result {
        Ok(notice) => Output::Notice(notice),
        Err(e) => Output::Notice(Notice::from_error(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontdesk_core::catalog::RoomCatalog;
    use frontdesk_infrastructure::InMemoryBookingRepository;
    use std::sync::Arc;

    fn usecase() -> BookingUseCase {
        BookingUseCase::new(
            Arc::new(RoomCatalog::standard()),
            Arc::new(InMemoryBookingRepository::new()),
        )
    }

    #[test]
    fn test_book_then_list() {
        let usecase = usecase();

        let booked = perform(
            &usecase,
            &Action::Book(BookingRequest::new("101", "Alice", "3")),
        );
        match booked {
            Output::Notice(notice) => {
                assert_eq!(notice.body, "Room 101 booked for Alice.\nTotal: $300")
            }
            other => panic!("unexpected output: {:?}", other),
        }

        match perform(&usecase, &Action::Available) {
            Output::Available(rooms) => assert_eq!(rooms.len(), 11),
            other => panic!("unexpected output: {:?}", other),
        }
    }

    #[test]
    fn test_errors_become_notices() {
        let usecase = usecase();

        let output = perform(&usecase, &Action::Checkout("101".to_string()));
        assert!(output.is_error());
        assert_eq!(
            output,
            Output::Notice(Notice::from_error(
                &frontdesk_core::FrontdeskError::no_active_booking("101")
            ))
        );
    }

    #[test]
    fn test_status_follows_bookings() {
        let usecase = usecase();
        let status = Action::Status("102".to_string());

        match perform(&usecase, &status) {
            Output::Notice(notice) => assert_eq!(notice.body, "Room 102 is available."),
            other => panic!("unexpected output: {:?}", other),
        }

        perform(&usecase, &Action::Book(BookingRequest::new("102", "Bob", "2")));
        match perform(&usecase, &status) {
            Output::Notice(notice) => assert_eq!(
                notice.body,
                "Room 102 - Guest: Bob - Days: 2 - Total: $300"
            ),
            other => panic!("unexpected output: {:?}", other),
        }

        assert!(perform(&usecase, &Action::Status("999".to_string())).is_error());
    }

    #[test]
    fn test_mutations() {
        assert!(Action::Delete("101".to_string()).is_mutation());
        assert!(!Action::Bookings.is_mutation());
        assert!(!Action::Available.is_mutation());
        assert!(!Action::Status("101".to_string()).is_mutation());
    }
}
