use chrono::{Datelike, NaiveDate};

/// Owner's date of birth (year, month, day)
pub const BIRTH_DATE: (i32, u32, u32) = (2007, 12, 31);

/// Topic a rule answers, used for logging only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Profile,
    Education,
    Skills,
    Projects,
    Certificates,
    Contact,
    BloodGroup,
    Volunteer,
    Family,
    Research,
    Blog,
    Social,
    Greeting,
    Thanks,
    Age,
}

/// Reply body of a rule
#[derive(Clone, Copy)]
pub enum Template {
    Static(&'static str),
    /// Rendered at reply time against the current date
    Computed(fn(NaiveDate) -> String),
}

impl Template {
    pub fn render(&self, today: NaiveDate) -> String {
        match self {
            Template::Static(text) => (*text).to_string(),
            Template::Computed(render) => render(today),
        }
    }
}

impl std::fmt::Debug for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Template::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Template::Computed(_) => f.write_str("Computed"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReplyRule {
    pub topic: Topic,
    /// Lowercase substrings searched for in the normalized input
    pub triggers: &'static [&'static str],
    /// Whole-input matches
    pub aliases: &'static [&'static str],
    pub template: Template,
}

impl ReplyRule {
    /// `normalized` must already be trimmed and lowercased.
    pub fn matches(&self, normalized: &str) -> bool {
        if normalized.is_empty() {
            return false;
        }

        self.aliases.iter().any(|alias| *alias == normalized)
            || self.triggers.iter().any(|trigger| normalized.contains(trigger))
    }
}

/// Whole years between the owner's birth date and `today`.
pub fn owner_age_on(today: NaiveDate) -> i32 {
    let (year, month, day) = BIRTH_DATE;
    let mut age = today.year() - year;

    // Birthday not reached yet this year
    if (today.month(), today.day()) < (month, day) {
        age -= 1;
    }

    age
}

fn age_reply(today: NaiveDate) -> String {
    format!(
        "Md Ridoan Mahmud Zisan is {} years old (born December 31, 2007).",
        owner_age_on(today)
    )
}

// Order matters: the first matching rule wins. Blood group sits ahead of
// volunteer work, which also triggers on "blood".
pub static REPLY_RULES: &[ReplyRule] = &[
    ReplyRule {
        topic: Topic::Profile,
        triggers: &[
            "profile",
            "developer",
            "creator",
            "who made you",
            "your creator",
            "zisan",
            "ridoan",
            "about",
        ],
        aliases: &["profile"],
        template: Template::Static(
            "I was created by Md Ridoan Mahmud Zisan, a Self-Driven Web Developer & IT Specialist from Bogura, Bangladesh.\n\n\
Here's some info about him:\n\
- 📫 Email: ridoan.zisan@gmail.com\n\
- 📞 Phone: +8801712525910\n\
- 📍 Location: Bogura, Bangladesh\n\
- 🔗 LinkedIn: https://linkedin.com/in/ridoan-zisan\n\
- 🩸 Blood Group: B+\n\
- 🎂 Date of Birth: December 31, 2007\n\
- 🌐 Religion: Humanity",
        ),
    },
    ReplyRule {
        topic: Topic::Education,
        triggers: &["education", "study", "school", "college"],
        aliases: &[],
        template: Template::Static(
            "Md Ridoan Mahmud Zisan's Education:\n\n\
🎓 Higher Secondary Certificate (HSC)\n\
- Institution: KARATOA MULTIMEDIA SCHOOL AND COLLEGE\n\
- Year: 2023-2024\n\
- GPA: 4.25/5.00\n\
- Group: Science\n\
- Major: Higher Math\n\n\
🎓 Secondary School Certificate (SSC)\n\
- Institution: DHUNAT GOVT N.U. PILOT MODEL HIGH SCHOOL\n\
- Year: 2021-2022\n\
- GPA: 5.00/5.00\n\
- Group: Science\n\
- Major: Higher Math",
        ),
    },
    ReplyRule {
        topic: Topic::Skills,
        triggers: &["skill", "expertise", "what can you do", "ability"],
        aliases: &[],
        template: Template::Static(
            "Md Ridoan Mahmud Zisan's Skills:\n\n\
💻 Additional Skills:\n\
- Canva/Photoshop\n\
- Social Media\n\
- Web and App Development\n\
- The concept of AI\n\n\
🗣️ Language Skills:\n\
- Bengali (Fluent)\n\
- English (Professional)\n\n\
🏆 Core Professional Skills:\n\
- MS Office Suite\n\
- Email Communication\n\
- Team Collaboration\n\
- Time Management\n\
- Problem Solving\n\
- Professional Ethics\n\n\
💬 Communication Skills:\n\
- Report Writing\n\
- Active Listening\n\
- Presentation\n\
- Professional Email",
        ),
    },
    ReplyRule {
        topic: Topic::Projects,
        triggers: &["project", "work", "build", "developed"],
        aliases: &["projects"],
        template: Template::Static(
            "Md Ridoan Mahmud Zisan's Notable Projects:\n\n\
🩸 BOBDO\n\
- Online blood donation website and web app\n\
- Built blood donor platform serving 68k+ community members\n\
- Implemented digital system reducing response time by 40%\n\
- Link: https://bobdo.vercel.app\n\n\
🌐 YouthHopeBD\n\
- Platform for youth development and social services\n\
- Link: https://youth-hope.netlify.app\n\n\
🛒 ZupraMart\n\
- All in one shopping platform\n\
- All daily necessities available including website source code\n\
- Link: https://zupramart.netlify.app\n\n\
📐 UniConverter\n\
- Unit converter supporting 50+ measurement categories\n\
- Link: https://uniconverter.netlify.app\n\n\
💻 DevHub\n\
- My all projects showcase\n\
- Link: https://devhub-i.netlify.app",
        ),
    },
    ReplyRule {
        topic: Topic::Certificates,
        triggers: &[
            "certificate",
            "certification",
            "achievement",
            "award",
            "olympiad",
        ],
        aliases: &["certificates"],
        template: Template::Static(
            "Md Ridoan Mahmud Zisan's Certifications & Achievements:\n\n\
🏅 Academic Olympiads:\n\
- Bangladesh Mathematical Olympiad\n\
- ICT Olympiad - Quarter Final\n\
- National GK Olympiad\n\n\
📜 Professional Certifications:\n\
- Google IT Support\n\
- Foundations of Cybersecurity\n\
- Digital Marketing\n\
- Python for Data Science and AI\n\
- Introduction to Artificial Intelligence\n\
- Machine Learning\n\
- Complete Web Development\n\
- Introduction to Python\n\n\
🌍 Climate & Sustainability:\n\
- Gender equality and human rights in climate action and renewable energy\n\
- Net Zero 101: What, Why and How\n\
- Introduction to Sustainable Development in Practice\n\
- The UN Climate Change process",
        ),
    },
    ReplyRule {
        topic: Topic::Contact,
        triggers: &["contact", "email", "phone", "address", "reach", "connect"],
        aliases: &[],
        template: Template::Static(
            "You can contact Md Ridoan Mahmud Zisan through:\n\
📧 Email: ridoan.zisan@gmail.com\n\
📞 Phone: +8801712525910\n\
📍 Location: Bogura, Bangladesh\n\
🔗 LinkedIn: https://linkedin.com/in/ridoan-zisan\n\n\
You can also use the email button in the bottom right corner to send him a message directly.",
        ),
    },
    ReplyRule {
        topic: Topic::BloodGroup,
        triggers: &["blood group"],
        aliases: &[],
        template: Template::Static("Md Ridoan Mahmud Zisan's blood group is B+ (B positive)."),
    },
    ReplyRule {
        topic: Topic::Volunteer,
        triggers: &["volunteer", "blood", "donation", "bobdo", "youthhope"],
        aliases: &[],
        template: Template::Static(
            "Md Ridoan Mahmud Zisan's Volunteer Work:\n\n\
🩸 Bogura Online Blood Donation Organisation\n\
- Role: Volunteer & Developer (2023-Present)\n\
- Built blood donor platform serving 68k+ community members\n\
- Implemented digital system reducing response time by 40%\n\
- Link: https://bobdo.vercel.app\n\n\
💙 Youth Hope BD\n\
- Role: Volunteer & Developer (2025-Present)\n\
- Developed platform for youth development and social services\n\
- Created tools for volunteer management and event organization\n\
- Link: https://youthhope-bd.netlify.app",
        ),
    },
    ReplyRule {
        topic: Topic::Family,
        triggers: &["family", "father", "mother", "parent", "sibling"],
        aliases: &[],
        template: Template::Static(
            "Md Ridoan Mahmud Zisan's Family:\n\n\
👨‍👩‍👧‍👦 Family Members:\n\
- Father: Md Rokibul Hasan Shekh\n\
- Mother: Mst. Zosna Khatun\n\
- Siblings: Raisa Jannat (Younger)",
        ),
    },
    ReplyRule {
        topic: Topic::Research,
        triggers: &["research"],
        aliases: &["research"],
        template: Template::Static(
            "Md Ridoan Mahmud Zisan's Research Work:\n\n\
📚 He has conducted research in various fields including web development, AI, and social impact projects.\n\
Visit the Research page on his website to learn more about his research publications and ongoing projects.",
        ),
    },
    ReplyRule {
        topic: Topic::Blog,
        triggers: &["blog"],
        aliases: &["blog"],
        template: Template::Static(
            "Md Ridoan Mahmud Zisan's Blog:\n\n\
✍️ He writes about technology, web development, AI, and his experiences.\n\
Visit the Blog page on his website to read his latest articles and insights.",
        ),
    },
    ReplyRule {
        topic: Topic::Social,
        triggers: &["social"],
        aliases: &["social media"],
        template: Template::Static(
            "Connect with Md Ridoan Mahmud Zisan on social media:\n\
🔗 LinkedIn: https://linkedin.com/in/ridoan-zisan\n\
💼 You can also find him on various professional platforms.\n\
📧 For direct contact: ridoan.zisan@gmail.com",
        ),
    },
    ReplyRule {
        topic: Topic::Greeting,
        triggers: &["hello", "hi", "hey"],
        aliases: &[],
        template: Template::Static(
            "Hello there! I'm Ghost AI, here to tell you about Md Ridoan Mahmud Zisan. How can I help you today?\n\n\
You can ask about:\n\
- Profile\n\
- Education\n\
- Experience\n\
- Projects\n\
- Certificates\n\
- Skills\n\
- Family\n\
- Contact\n\
- Research\n\
- Blog\n\
- Social Media",
        ),
    },
    ReplyRule {
        topic: Topic::Thanks,
        triggers: &["thank"],
        aliases: &[],
        template: Template::Static(
            "You're welcome! Let me know if you need any more information about Md Ridoan Mahmud Zisan.",
        ),
    },
    ReplyRule {
        topic: Topic::Age,
        triggers: &["age", "old", "birth"],
        aliases: &[],
        template: Template::Computed(age_reply),
    },
];
