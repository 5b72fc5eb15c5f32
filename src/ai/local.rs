use crate::ai::rules::{ReplyRule, REPLY_RULES};
use chrono::{Local, NaiveDate};

/// Keyword classifier over an ordered rule table
#[derive(Debug, Clone)]
pub struct LocalClassifier {
    rules: Vec<ReplyRule>,
}

impl Default for LocalClassifier {
    fn default() -> Self {
        Self::new(REPLY_RULES.to_vec())
    }
}

impl LocalClassifier {
    pub fn new(rules: Vec<ReplyRule>) -> Self {
        Self { rules }
    }

    /// Trims and lowercases user input
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// First rule matching the input, in declared order
    pub fn matching_rule(&self, raw: &str) -> Option<&ReplyRule> {
        let normalized = Self::normalize(raw);
        self.rules.iter().find(|rule| rule.matches(&normalized))
    }

    /// Local reply for the input, or `None` when it should go to the remote responder
    pub fn classify(&self, raw: &str) -> Option<String> {
        self.classify_on(raw, Local::now().date_naive())
    }

    pub fn classify_on(&self, raw: &str, today: NaiveDate) -> Option<String> {
        let rule = self.matching_rule(raw)?;
        log::debug!("🎯 Local rule hit: {:?}", rule.topic);
        Some(rule.template.render(today))
    }

    pub fn rules(&self) -> &[ReplyRule] {
        &self.rules
    }
}
