pub mod send_contact_message;

pub use send_contact_message::{
    ContactMessage, ISendContactMessageUseCase, SendContactMessageError,
    SendContactMessageUseCase,
};
