use crate::services::profile::{Language, Localized};

/// Menu shortcut that scrolls the page to a section
#[derive(Debug, Clone, Copy)]
pub struct QuickAction {
    pub id: &'static str,
    pub label: Localized,
    pub section: &'static str,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        id: "profile",
        label: Localized {
            en: "Profile",
            bn: "প্রোফাইল",
        },
        section: "profile",
    },
    QuickAction {
        id: "education",
        label: Localized {
            en: "Education",
            bn: "শিক্ষা",
        },
        section: "education",
    },
    QuickAction {
        id: "experience",
        label: Localized {
            en: "Experience",
            bn: "অভিজ্ঞতা",
        },
        section: "experience",
    },
    QuickAction {
        id: "skills",
        label: Localized {
            en: "Skills",
            bn: "দক্ষতা",
        },
        section: "skills",
    },
    QuickAction {
        id: "contact",
        label: Localized {
            en: "Contact",
            bn: "যোগাযোগ",
        },
        section: "contact",
    },
];

const WELCOME: Localized = Localized {
    en: "Hello! I'm Ghost AI, your virtual assistant. Ask me about Md Ridoan Mahmud Zisan - his education, skills, projects, or anything else!",
    bn: "হ্যালো! আমি ঘোস্ট এআই, আপনার ভার্চুয়াল সহায়ক। মো: রিদোয়ান মাহমুদ জিসান সম্পর্কে আমাকে জিজ্ঞাসা করুন - তার শিক্ষা, দক্ষতা, প্রকল্প বা অন্য কিছু!",
};

const SUGGESTIONS_EN: &[&str] = &[
    "What are his skills?",
    "Tell me about his education",
    "Show me his projects",
    "How can I contact him?",
];

const SUGGESTIONS_BN: &[&str] = &[
    "তার দক্ষতা কি?",
    "তার শিক্ষা সম্পর্কে বলুন",
    "তার প্রকল্পগুলো দেখান",
    "তার সাথে কীভাবে যোগাযোগ করব?",
];

pub fn welcome_message(language: Language) -> &'static str {
    WELCOME.get(language)
}

/// Quick-reply chips shown under the chat
pub fn suggestions(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => SUGGESTIONS_EN,
        Language::Bn => SUGGESTIONS_BN,
    }
}

pub fn find_quick_action(id: &str) -> Option<&'static QuickAction> {
    let id = id.trim().to_lowercase();
    QUICK_ACTIONS.iter().find(|action| action.id == id)
}

/// Page navigation, owned by whatever renders the site
pub trait SectionNavigator {
    fn scroll_to_section(&mut self, section: &str);
}
