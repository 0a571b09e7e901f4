//! Synthesis of blob-created notification envelopes.

pub mod envelope;

pub use envelope::{EMULATOR_HOST, EVENT_TYPE, EventMessage, NotificationEnvelope, TOPIC};
