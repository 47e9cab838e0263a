pub mod create_event;
pub mod delete_event;
pub mod get_events;
pub mod update_event;

pub use create_event::{create_event_handler, CreateEventRequest};
pub use delete_event::delete_event_handler;
pub use get_events::get_events_handler;
pub use update_event::{update_event_handler, UpdateEventRequest};
