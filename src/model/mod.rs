//! Domain models shared between the bot handlers and the services.

pub mod ticket;
pub mod voice;
