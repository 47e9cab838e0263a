pub mod create_event;
pub mod delete_event;
pub mod get_events;
pub mod update_event;

pub use create_event::{CreateEventError, CreateEventUseCase, ICreateEventUseCase};
pub use delete_event::{DeleteEventError, DeleteEventUseCase, IDeleteEventUseCase};
pub use get_events::{GetEventsError, GetEventsUseCase, IGetEventsUseCase};
pub use update_event::{IUpdateEventUseCase, UpdateEventError, UpdateEventUseCase};
