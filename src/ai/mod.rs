pub mod local;
pub mod remote;
pub mod rules;

pub use local::LocalClassifier;
pub use remote::{HttpResponder, RemoteFailure, Responder};
pub use rules::{ReplyRule, Template, Topic};
