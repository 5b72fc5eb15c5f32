pub mod engine;
pub mod transcript;

pub use engine::{
    ConversationEngine, EngineEvent, RejectReason, ReplySource, SubmitOutcome, TurnPhase,
};
pub use transcript::{EntryId, Role, Transcript, TranscriptEntry};
