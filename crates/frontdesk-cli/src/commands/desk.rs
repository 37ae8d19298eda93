use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use frontdesk_application::{BookingRequest, BookingUseCase};

use crate::bootstrap::Desk;

use super::actions::{self, Action, Output};

const COMMANDS: [&str; 14] = [
    "book",
    "checkout",
    "delete",
    "bookings",
    "available",
    "status",
    "room",
    "guest",
    "days",
    "fields",
    "clear",
    "help",
    "quit",
    "exit",
];

const HELP: &str = "\
Commands:
  book [ROOM [DAYS [GUEST...]]]  Book a room (missing values come from the fields)
  checkout [ROOM]                Check out the guest in a room
  delete [ROOM]                  Delete the booking for a room
  bookings                       View current bookings
  available                      List available rooms
  status [ROOM]                  Show whether a room is free or booked
  room|guest|days VALUE          Fill in a field
  fields                         Show the fields
  clear                          Clear the fields
  help                           Show this help
  quit                           Leave the desk";

/// Rustyline helper providing command completion, highlighting and hints.
#[derive(Clone)]
struct DeskHelper;

impl Helper for DeskHelper {}

impl Completer for DeskHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for DeskHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let word = line.split_whitespace().next().unwrap_or("");
        if COMMANDS.contains(&word) {
            let rest = &line[line.find(word).unwrap_or(0) + word.len()..];
            Owned(format!("{}{}", word.bright_cyan(), rest))
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for DeskHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.is_empty() || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for DeskHelper {}

/// The three free-text fields of the desk form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeskForm {
    pub room: String,
    pub guest: String,
    pub days: String,
}

impl DeskForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn describe(&self) -> String {
        format!(
            "Guest Name: {}\nRoom Number: {}\nNumber of Days: {}",
            self.guest, self.room, self.days
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Room,
    Guest,
    Days,
}

/// A parsed desk prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeskCommand {
    Book {
        room: Option<String>,
        days: Option<String>,
        guest: Option<String>,
    },
    Checkout(Option<String>),
    Delete(Option<String>),
    Bookings,
    Available,
    Status(Option<String>),
    Set(Field, String),
    Fields,
    Clear,
    Help,
    Quit,
    Empty,
}

/// Splits off the first whitespace-separated word.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Parses one prompt line.
///
/// Returns the offending word when the command is not recognised.
pub fn parse_command(line: &str) -> std::result::Result<DeskCommand, String> {
    let (word, rest) = split_word(line);

    let command = match word.to_lowercase().as_str() {
        "" => DeskCommand::Empty,
        "book" => {
            let (room, rest) = split_word(rest);
            let (days, guest) = split_word(rest);
            DeskCommand::Book {
                room: non_empty(room),
                days: non_empty(days),
                guest: non_empty(guest),
            }
        }
        "checkout" => DeskCommand::Checkout(non_empty(rest)),
        "delete" => DeskCommand::Delete(non_empty(rest)),
        "bookings" => DeskCommand::Bookings,
        "available" => DeskCommand::Available,
        "status" => DeskCommand::Status(non_empty(rest)),
        "room" => DeskCommand::Set(Field::Room, rest.trim().to_string()),
        "guest" => DeskCommand::Set(Field::Guest, rest.trim().to_string()),
        "days" => DeskCommand::Set(Field::Days, rest.trim().to_string()),
        "fields" => DeskCommand::Fields,
        "clear" => DeskCommand::Clear,
        "help" | "?" => DeskCommand::Help,
        "quit" | "exit" => DeskCommand::Quit,
        _ => return Err(word.to_string()),
    };
    Ok(command)
}

/// What the prompt loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Continue(Vec<Output>),
    Quit,
}

/// Desk state between prompt lines: the use case and the form fields.
pub struct DeskSession<'a> {
    usecase: &'a BookingUseCase,
    form: DeskForm,
}

impl<'a> DeskSession<'a> {
    pub fn new(usecase: &'a BookingUseCase) -> Self {
        Self {
            usecase,
            form: DeskForm::default(),
        }
    }

    /// Output shown when the desk opens.
    pub fn startup(&self) -> Vec<Output> {
        vec![actions::perform(self.usecase, &Action::Available)]
    }

    /// Handles one prompt line.
    pub fn handle(&mut self, line: &str) -> Step {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(word) => {
                return Step::Continue(vec![Output::Text(format!(
                    "Unknown command '{}'. Type 'help' for the list of commands.",
                    word
                ))]);
            }
        };

        let action = match command {
            DeskCommand::Empty => return Step::Continue(vec![]),
            DeskCommand::Quit => return Step::Quit,
            DeskCommand::Help => return Step::Continue(vec![Output::Text(HELP.to_string())]),
            DeskCommand::Fields => {
                return Step::Continue(vec![Output::Text(self.form.describe())]);
            }
            DeskCommand::Clear => {
                self.form.clear();
                return Step::Continue(vec![]);
            }
            DeskCommand::Set(field, value) => {
                let slot = match field {
                    Field::Room => &mut self.form.room,
                    Field::Guest => &mut self.form.guest,
                    Field::Days => &mut self.form.days,
                };
                *slot = value;
                return Step::Continue(vec![]);
            }
            DeskCommand::Book { room, days, guest } => {
                if let Some(room) = room {
                    self.form.room = room;
                }
                if let Some(days) = days {
                    self.form.days = days;
                }
                if let Some(guest) = guest {
                    self.form.guest = guest;
                }
                Action::Book(BookingRequest::from_form(
                    &self.form.room,
                    &self.form.guest,
                    &self.form.days,
                ))
            }
            DeskCommand::Checkout(room) => Action::Checkout(self.room_field(room)),
            DeskCommand::Delete(room) => Action::Delete(self.room_field(room)),
            DeskCommand::Bookings => Action::Bookings,
            DeskCommand::Available => Action::Available,
            DeskCommand::Status(room) => Action::Status(self.room_field(room)),
        };

        let output = actions::perform(self.usecase, &action);
        let succeeded = !output.is_error();
        let mut outputs = vec![output];

        if succeeded && action.is_mutation() {
            if matches!(action, Action::Checkout(_) | Action::Delete(_)) {
                self.form.clear();
            }
            outputs.push(actions::perform(self.usecase, &Action::Available));
        }
        Step::Continue(outputs)
    }

    fn room_field(&mut self, room: Option<String>) -> String {
        if let Some(room) = room {
            self.form.room = room;
        }
        self.form.room.trim().to_string()
    }
}

/// Runs the interactive desk prompt until `quit`, Ctrl-C or Ctrl-D.
pub fn run(desk: &Desk) -> Result<()> {
    let mut editor = Editor::<DeskHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(DeskHelper));

    println!("{}", "Hotel Room Booking Manager".green().bold());
    println!(
        "{}",
        format!("Bookings file: {}", desk.bookings_path.display()).dimmed()
    );
    println!("{}", "Type 'help' for commands.".dimmed());

    let mut session = DeskSession::new(&desk.usecase);
    print_outputs(&session.startup());

    loop {
        match editor.readline("desk> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                match session.handle(&line) {
                    Step::Continue(outputs) => print_outputs(&outputs),
                    Step::Quit => break,
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    tracing::debug!("[Desk] Session closed");
    Ok(())
}

fn print_outputs(outputs: &[Output]) {
    for output in outputs {
        if output.is_error() {
            eprintln!("{}", output.render());
        } else {
            println!("{}", output.render());
        }
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

    fn outputs(step: Step) -> Vec<Output> {
        match step {
            Step::Continue(outputs) => outputs,
            Step::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_parse_book_variants() {
        assert_eq!(
            parse_command("book 101 3 Alice Smith").unwrap(),
            DeskCommand::Book {
                room: Some("101".to_string()),
                days: Some("3".to_string()),
                guest: Some("Alice Smith".to_string()),
            }
        );
        assert_eq!(
            parse_command("BOOK").unwrap(),
            DeskCommand::Book {
                room: None,
                days: None,
                guest: None,
            }
        );
    }

    #[test]
    fn test_parse_other_commands() {
        assert_eq!(
            parse_command(" checkout 101 ").unwrap(),
            DeskCommand::Checkout(Some("101".to_string()))
        );
        assert_eq!(parse_command("delete").unwrap(), DeskCommand::Delete(None));
        assert_eq!(
            parse_command("guest Mary Ann").unwrap(),
            DeskCommand::Set(Field::Guest, "Mary Ann".to_string())
        );
        assert_eq!(parse_command("").unwrap(), DeskCommand::Empty);
        assert_eq!(parse_command("exit").unwrap(), DeskCommand::Quit);
        assert_eq!(parse_command("dance now").unwrap_err(), "dance");
        assert_eq!(
            parse_command("book  103   1  Di").unwrap(),
            DeskCommand::Book {
                room: Some("103".to_string()),
                days: Some("1".to_string()),
                guest: Some("Di".to_string()),
            }
        );
    }

    #[test]
    fn test_startup_lists_available_rooms() {
        let usecase = usecase();
        let session = DeskSession::new(&usecase);

        match &session.startup()[0] {
            Output::Available(rooms) => assert_eq!(rooms.len(), 12),
            other => panic!("unexpected output: {:?}", other),
        }
    }

    #[test]
    fn test_book_from_fields_refreshes_available() {
        let usecase = usecase();
        let mut session = DeskSession::new(&usecase);

        session.handle("guest Alice");
        session.handle("room 101");
        session.handle("days 3");
        let out = outputs(session.handle("book"));

        assert_eq!(out.len(), 2);
        assert!(!out[0].is_error());
        match &out[1] {
            Output::Available(rooms) => assert!(rooms.iter().all(|r| r.id != "101")),
            other => panic!("unexpected output: {:?}", other),
        }
        // Booking keeps the fields filled in
        assert_eq!(session.form.room, "101");
    }

    #[test]
    fn test_checkout_clears_fields() {
        let usecase = usecase();
        let mut session = DeskSession::new(&usecase);

        session.handle("book 102 2 Bob");
        let out = outputs(session.handle("checkout"));

        assert_eq!(out.len(), 2);
        assert!(!out[0].is_error());
        assert_eq!(&session.form, &DeskForm::default());
        assert!(usecase.list_bookings().unwrap().is_empty());
    }

    #[test]
    fn test_failed_action_does_not_refresh() {
        let usecase = usecase();
        let mut session = DeskSession::new(&usecase);

        let out = outputs(session.handle("book 999 2 Bob"));
        assert_eq!(out.len(), 1);
        assert!(out[0].is_error());

        let out = outputs(session.handle("delete 101"));
        assert_eq!(out.len(), 1);
        assert!(out[0].is_error());
        assert_eq!(session.form.room, "101");
    }

    #[test]
    fn test_status_uses_room_field() {
        let usecase = usecase();
        let mut session = DeskSession::new(&usecase);

        session.handle("book 205 2 Eve");
        match &outputs(session.handle("status"))[..] {
            [Output::Notice(notice)] => {
                assert_eq!(notice.body, "Room 205 - Guest: Eve - Days: 2 - Total: $500")
            }
            other => panic!("unexpected output: {:?}", other),
        }

        match &outputs(session.handle("status 101"))[..] {
            [Output::Notice(notice)] => assert_eq!(notice.body, "Room 101 is available."),
            other => panic!("unexpected output: {:?}", other),
        }
        assert_eq!(session.form.room, "101");
    }

    #[test]
    fn test_clear_and_quit() {
        let usecase = usecase();
        let mut session = DeskSession::new(&usecase);

        session.handle("room 204");
        assert!(outputs(session.handle("clear")).is_empty());
        assert_eq!(&session.form, &DeskForm::default());
        assert_eq!(session.handle("quit"), Step::Quit);
    }

    #[test]
    fn test_unknown_command() {
        let usecase = usecase();
        let mut session = DeskSession::new(&usecase);

        match &outputs(session.handle("dance"))[0] {
            Output::Text(text) => assert!(text.contains("Unknown command 'dance'")),
            other => panic!("unexpected output: {:?}", other),
        }
    }
}
