//! Event-independent logic behind the voice notifications.
//!
//! Everything here is synchronous and side-effect-free. The bot handlers read
//! the Discord cache, call into these services with owned or borrowed data,
//! and perform the send themselves.

pub mod notification;
pub mod ticket;
pub mod voice_transition;
