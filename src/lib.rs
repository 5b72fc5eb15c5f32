//! Ghost AI: the portfolio chat assistant.
//!
//! Visitor questions are matched against an ordered keyword rule table
//! ([`ai::rules`]); anything unmatched goes to a hosted text-generation
//! endpoint ([`ai::remote`]). [`crate::core::ConversationEngine`] runs one turn at a
//! time and reveals replies character by character.

pub mod ai;
pub mod config;
pub mod core;
pub mod logger;
pub mod services;

pub use ai::{HttpResponder, LocalClassifier, Responder};
pub use config::Config;
pub use crate::core::{ConversationEngine, EngineEvent, SubmitOutcome, TranscriptEntry};
