use async_trait::async_trait;
use ghost_ai::ai::{HttpResponder, LocalClassifier, Responder};
use ghost_ai::core::engine::CONNECTION_FAILURE_REPLY;
use ghost_ai::core::{
    ConversationEngine, EngineEvent, RejectReason, ReplySource, Role, SubmitOutcome, TurnPhase,
};
use std::time::Duration;
use wiremock::matchers::{body_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Fails the test if the engine ever reaches the network
struct UnreachableResponder;

#[async_trait]
impl Responder for UnreachableResponder {
    async fn respond(&self, prompt: &str) -> anyhow::Result<String> {
        panic!("responder called for {:?}", prompt);
    }
}

struct FailingResponder;

#[async_trait]
impl Responder for FailingResponder {
    async fn respond(&self, _prompt: &str) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

fn drain(events: &mut tokio::sync::broadcast::Receiver<EngineEvent>) -> Vec<EngineEvent> {
    let mut collected = Vec::new();
    while let Ok(event) = events.try_recv() {
        collected.push(event);
    }
    collected
}

#[tokio::test]
async fn local_topics_never_touch_the_responder() {
    let engine = ConversationEngine::new(
        LocalClassifier::default(),
        UnreachableResponder,
        Duration::ZERO,
    );

    for input in ["profile", "What are his skills?", "how old", "thanks!", "blog"] {
        let outcome = engine.submit_turn(input).await;
        match outcome {
            SubmitOutcome::Completed { source, .. } => assert_eq!(source, ReplySource::Local),
            other => panic!("unexpected outcome {:?}", other),
        }
    }
    assert_eq!(engine.transcript().len(), 10);
}

#[tokio::test]
async fn turn_appends_user_then_assistant() {
    let engine = ConversationEngine::new(
        LocalClassifier::default(),
        UnreachableResponder,
        Duration::ZERO,
    );
    let mut events = engine.subscribe();

    assert!(!engine.is_busy());
    engine.submit_turn("hello").await;
    assert!(!engine.is_busy());

    let transcript = engine.transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].role, Role::User);
    assert_eq!(transcript[0].content, "hello");
    assert_eq!(transcript[1].role, Role::Assistant);
    assert!(transcript[1].content.starts_with("Hello there! I'm Ghost AI"));
    assert!(transcript[0].id < transcript[1].id);

    let events = drain(&mut events);
    assert_eq!(events.first(), Some(&EngineEvent::Appended(transcript[0].clone())));
    assert_eq!(events[1], EngineEvent::Busy(true));
    assert_eq!(events.last(), Some(&EngineEvent::Busy(false)));

    // Busy for the whole span between the two appends
    let busy_until = events
        .iter()
        .position(|event| *event == EngineEvent::Appended(transcript[1].clone()))
        .unwrap();
    assert_eq!(busy_until, events.len() - 2);

    let last_reveal = events
        .iter()
        .rev()
        .find_map(|event| match event {
            EngineEvent::Reveal(text) => Some(text.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(last_reveal, transcript[1].content);
}

#[tokio::test(start_paused = true)]
async fn second_submission_while_busy_is_ignored() {
    let engine = ConversationEngine::new(
        LocalClassifier::default(),
        UnreachableResponder,
        Duration::from_millis(20),
    );

    let (first, second) = tokio::join!(engine.submit_turn("hello"), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(engine.is_busy());
        assert_eq!(engine.phase(), TurnPhase::Typing);
        assert!(!engine.reveal_buffer().is_empty());
        engine.submit_turn("education").await
    });

    assert!(matches!(first, SubmitOutcome::Completed { .. }));
    assert_eq!(second, SubmitOutcome::Rejected(RejectReason::Busy));
    assert_eq!(engine.transcript().len(), 2);
    assert!(!engine.is_busy());
}

#[tokio::test]
async fn whitespace_submission_is_ignored() {
    let engine = ConversationEngine::new(
        LocalClassifier::default(),
        UnreachableResponder,
        Duration::ZERO,
    );
    let mut events = engine.subscribe();

    assert_eq!(
        engine.submit_turn(" \n\t ").await,
        SubmitOutcome::Rejected(RejectReason::Empty)
    );
    assert!(engine.transcript().is_empty());
    assert!(drain(&mut events).is_empty());
}

#[tokio::test]
async fn unmatched_input_uses_remote_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(serde_json::json!({ "prompt": "xyzzy random question" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "success", "text": "42" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let responder = HttpResponder::new(format!("{}/llm-api?pk=test", server.uri())).unwrap();
    let engine = ConversationEngine::new(LocalClassifier::default(), responder, Duration::ZERO);

    let outcome = engine.submit_turn("xyzzy random question").await;
    match outcome {
        SubmitOutcome::Completed {
            assistant, source, ..
        } => {
            assert_eq!(assistant.content, "42");
            assert_eq!(source, ReplySource::Remote);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[tokio::test]
async fn responder_error_falls_back_and_recovers() {
    let engine = ConversationEngine::new(
        LocalClassifier::default(),
        FailingResponder,
        Duration::ZERO,
    );

    let outcome = engine.submit_turn("xyzzy random question").await;
    match outcome {
        SubmitOutcome::Completed {
            assistant, source, ..
        } => {
            assert_eq!(assistant.content, CONNECTION_FAILURE_REPLY);
            assert_eq!(source, ReplySource::Fallback);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(engine.phase(), TurnPhase::Idle);
    assert_eq!(engine.reveal_buffer(), "");

    // Still usable after the failure
    engine.submit_turn("contact").await;
    let transcript = engine.transcript();
    assert_eq!(transcript.len(), 4);
    assert!(transcript[3].content.starts_with("You can contact"));
}

#[tokio::test]
async fn suggestion_click_runs_a_turn() {
    let engine = ConversationEngine::new(
        LocalClassifier::default(),
        UnreachableResponder,
        Duration::ZERO,
    );

    engine.click_suggestion("Show me his projects").await;
    let transcript = engine.transcript();
    assert_eq!(transcript[0].content, "Show me his projects");
    assert!(transcript[1].links().contains(&"https://bobdo.vercel.app"));
}

#[tokio::test(start_paused = true)]
async fn dropped_turn_releases_the_engine() {
    let engine = ConversationEngine::new(
        LocalClassifier::default(),
        UnreachableResponder,
        Duration::from_millis(20),
    );

    let abandoned = tokio::time::timeout(Duration::from_millis(30), engine.submit_turn("hello")).await;
    assert!(abandoned.is_err());
    assert!(!engine.is_busy());
    assert_eq!(engine.reveal_buffer(), "");
    assert_eq!(engine.transcript().len(), 1);
}
