//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (channels, members) for testing purposes. These factories create valid
//! Serenity objects by deserializing JSON, simulating what Discord's gateway
//! would deliver.
//!
//! # Available Factories
//!
//! - `channel::create_test_category` - Create category channels
//! - `channel::create_test_channel` - Create text channels, optionally nested in a category
//! - `channel::create_test_voice_channel` - Create voice channels
//! - `member::create_test_member` - Create guild members with optional global and nick names
//! - `voice_state::create_test_voice_state` - Create voice states for a user and channel

pub mod channel;
pub mod member;
pub mod voice_state;

// Re-export commonly used functions for convenience
pub use channel::{create_test_category, create_test_channel, create_test_voice_channel};
pub use member::create_test_member;
pub use voice_state::create_test_voice_state;
