use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Site language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Bn,
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "bn" | "bangla" | "bengali" => Ok(Language::Bn),
            other => Err(anyhow::anyhow!("Unknown language: {}", other)),
        }
    }
}

/// Text available in both site languages
#[derive(Debug, Clone, Copy)]
pub struct Localized {
    pub en: &'static str,
    pub bn: &'static str,
}

impl Localized {
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Bn => self.bn,
        }
    }
}

pub struct ProfileCard {
    pub name: Localized,
    pub role: Localized,
    pub statement: Localized,
}

pub const PROFILE: ProfileCard = ProfileCard {
    name: Localized {
        en: "Md Ridoan Mahmud Zisan",
        bn: "মো: রিদোয়ান মাহমুদ জিসান",
    },
    role: Localized {
        en: "Web Developer | AI Enthusiast | Student",
        bn: "ওয়েব ডেভেলপার | এআই উৎসাহী | শিক্ষার্থী",
    },
    statement: Localized {
        en: "Passionate about creating innovative web solutions and exploring artificial intelligence. Currently pursuing higher education while building impactful projects that serve the community.",
        bn: "উদ্ভাবনী ওয়েব সমাধান তৈরি এবং কৃত্রিম বুদ্ধিমত্তা অন্বেষণে আগ্রহী। সম্প্রদায়কে সেবা প্রদানকারী প্রভাবশালী প্রকল্প তৈরি করার পাশাপাশি উচ্চ শিক্ষা অর্জন করছি।",
    },
};

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        id: "google",
        label: "Google",
        href: "https://www.google.com/search?q=Md+Ridoan+Mahmud+Zisan",
    },
    SocialLink {
        id: "linkedin",
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/ridoan-zisan",
    },
    SocialLink {
        id: "github",
        label: "GitHub",
        href: "https://github.com/RidoanDev",
    },
    SocialLink {
        id: "facebook",
        label: "Facebook",
        href: "https://www.facebook.com/rid0anzisan",
    },
    SocialLink {
        id: "youtube",
        label: "YouTube",
        href: "https://youtube.com/@ridoan-zisan",
    },
    SocialLink {
        id: "email",
        label: "Email",
        href: "mailto:ridoan.zisan@gmail.com",
    },
    SocialLink {
        id: "twitter",
        label: "Twitter",
        href: "https://x.com/ridoan_zisan",
    },
    SocialLink {
        id: "whatsapp",
        label: "WhatsApp",
        href: "https://wa.me/8801712525910",
    },
];
