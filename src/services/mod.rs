pub mod menu;
pub mod profile;

pub use menu::{QuickAction, SectionNavigator, QUICK_ACTIONS};
pub use profile::{Language, Localized, SocialLink, PROFILE, SOCIAL_LINKS};
