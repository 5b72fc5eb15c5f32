use crate::ai::{LocalClassifier, Responder};
use crate::core::transcript::{Role, Transcript, TranscriptEntry};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Reply when the responder itself fails
pub const CONNECTION_FAILURE_REPLY: &str =
    "Sorry, I could not connect to the server. Please try again later.";

pub const DEFAULT_TYPING_DELAY: Duration = Duration::from_millis(20);

const EVENT_CAPACITY: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    AwaitingReply,
    Typing,
}

/// Where the assistant reply of a turn came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Local,
    Remote,
    /// Responder failed; the connection-failure reply was used
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Empty,
    Busy,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Rejected(RejectReason),
    Completed {
        user: TranscriptEntry,
        assistant: TranscriptEntry,
        source: ReplySource,
    },
}

/// Updates pushed to presentation layers
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Appended(TranscriptEntry),
    /// Reply text revealed so far
    Reveal(String),
    Busy(bool),
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Runs conversation turns: local rules first, remote responder second,
/// then a character-by-character reveal of the reply.
pub struct ConversationEngine<R> {
    classifier: LocalClassifier,
    responder: R,
    typing_delay: Duration,
    session_id: Uuid,
    phase: Mutex<TurnPhase>,
    transcript: Mutex<Transcript>,
    reveal: Mutex<String>,
    events: broadcast::Sender<EngineEvent>,
}

impl<R: Responder> ConversationEngine<R> {
    pub fn new(classifier: LocalClassifier, responder: R, typing_delay: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let session_id = Uuid::new_v4();
        log::info!("📍 Chat session {}", session_id);

        Self {
            classifier,
            responder,
            typing_delay,
            session_id,
            phase: Mutex::new(TurnPhase::Idle),
            transcript: Mutex::new(Transcript::new()),
            reveal: Mutex::new(String::new()),
            events,
        }
    }

    /// Runs one full turn for text typed by the user
    pub async fn submit_turn(&self, text: &str) -> SubmitOutcome {
        let prompt = text.trim();
        if prompt.is_empty() {
            log::debug!("Ignoring empty submission");
            return SubmitOutcome::Rejected(RejectReason::Empty);
        }

        let user = {
            let mut phase = lock(&self.phase);
            if *phase != TurnPhase::Idle {
                log::debug!("Ignoring submission while {:?}", *phase);
                return SubmitOutcome::Rejected(RejectReason::Busy);
            }
            *phase = TurnPhase::AwaitingReply;
            lock(&self.transcript).append(Role::User, prompt)
        };
        let _turn = TurnGuard { engine: self };

        self.emit(EngineEvent::Appended(user.clone()));
        self.emit(EngineEvent::Busy(true));
        log::info!("💬 User: {}", prompt);

        let (reply, source) = self.resolve(prompt).await;

        if source != ReplySource::Fallback {
            self.set_phase(TurnPhase::Typing);
            self.type_out(&reply).await;
        }

        let assistant = lock(&self.transcript).append(Role::Assistant, reply);
        self.emit(EngineEvent::Appended(assistant.clone()));
        log::info!("🤖 Reply #{} ready ({:?})", assistant.id, source);

        SubmitOutcome::Completed {
            user,
            assistant,
            source,
        }
    }

    /// Suggestion chips submit their text directly
    pub async fn click_suggestion(&self, suggestion: &str) -> SubmitOutcome {
        self.submit_turn(suggestion).await
    }

    async fn resolve(&self, prompt: &str) -> (String, ReplySource) {
        if let Some(reply) = self.classifier.classify(prompt) {
            return (reply, ReplySource::Local);
        }

        log::debug!("📡 No local rule matched, asking remote responder");
        match self.responder.respond(prompt).await {
            Ok(reply) => (reply, ReplySource::Remote),
            Err(e) => {
                log::error!("❌ Responder failed: {:#}", e);
                (CONNECTION_FAILURE_REPLY.to_string(), ReplySource::Fallback)
            }
        }
    }

    async fn type_out(&self, reply: &str) {
        for (index, ch) in reply.char_indices() {
            if self.typing_delay.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(self.typing_delay).await;
            }

            let shown = reply[..index + ch.len_utf8()].to_string();
            *lock(&self.reveal) = shown.clone();
            self.emit(EngineEvent::Reveal(shown));
        }
    }

    fn set_phase(&self, phase: TurnPhase) {
        *lock(&self.phase) = phase;
    }

    fn emit(&self, event: EngineEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.events.subscribe()
    }

    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        lock(&self.transcript).entries().to_vec()
    }

    pub fn reveal_buffer(&self) -> String {
        lock(&self.reveal).clone()
    }

    pub fn phase(&self) -> TurnPhase {
        *lock(&self.phase)
    }

    pub fn is_busy(&self) -> bool {
        self.phase() != TurnPhase::Idle
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn typing_delay(&self) -> Duration {
        self.typing_delay
    }
}

/// Puts the engine back to idle when a turn ends, however it ends
struct TurnGuard<'a, R> {
    engine: &'a ConversationEngine<R>,
}

impl<R> Drop for TurnGuard<'_, R> {
    fn drop(&mut self) {
        lock(&self.engine.reveal).clear();
        *lock(&self.engine.phase) = TurnPhase::Idle;
        let _ = self.engine.events.send(EngineEvent::Busy(false));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct EchoResponder {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Responder for EchoResponder {
        async fn respond(&self, prompt: &str) -> anyhow::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("echo: {}", prompt))
        }
    }

    fn engine() -> ConversationEngine<EchoResponder> {
        ConversationEngine::new(
            LocalClassifier::default(),
            EchoResponder {
                calls: AtomicUsize::new(0),
            },
            Duration::ZERO,
        )
    }

    #[tokio::test]
    async fn blank_submission_is_rejected() {
        let engine = engine();
        assert_eq!(
            engine.submit_turn("   ").await,
            SubmitOutcome::Rejected(RejectReason::Empty)
        );
        assert!(engine.transcript().is_empty());
    }

    #[tokio::test]
    async fn user_text_is_trimmed() {
        let engine = engine();
        engine.submit_turn("  xyzzy  ").await;
        let transcript = engine.transcript();
        assert_eq!(transcript[0].content, "xyzzy");
        assert_eq!(transcript[1].content, "echo: xyzzy");
    }

    #[tokio::test]
    async fn local_hit_skips_responder() {
        let engine = engine();
        let outcome = engine.submit_turn("education").await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Completed {
                source: ReplySource::Local,
                ..
            }
        ));
        assert_eq!(engine.responder.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn reveal_buffer_cleared_after_turn() {
        let engine = engine();
        engine.submit_turn("hello").await;
        assert_eq!(engine.reveal_buffer(), "");
        assert_eq!(engine.phase(), TurnPhase::Idle);
    }
}
