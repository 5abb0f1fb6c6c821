//! Voicewatch Test Utils
//!
//! Provides shared testing utilities for the voice channel notifier. Discord
//! models are built the way serenity receives them, by deserializing gateway
//! JSON, so tests exercise real serenity types instead of hand-rolled stand-ins.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_category, create_test_channel};
//!
//! #[test]
//! fn finds_ticket() {
//!     let category = create_test_category(1, 10, "Tickets", 0);
//!     let ticket = create_test_channel(11, 10, "ticket-alice", Some(1), 0);
//!     // Build a channel map and run the lookup...
//! }
//! ```

pub mod serenity;
