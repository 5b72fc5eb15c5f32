use ghost_ai::ai::{HttpResponder, LocalClassifier};
use ghost_ai::config::Config;
use ghost_ai::core::{ConversationEngine, EngineEvent, Role, SubmitOutcome};
use ghost_ai::logger;
use ghost_ai::services::{menu, Language, SectionNavigator, PROFILE, QUICK_ACTIONS, SOCIAL_LINKS};
use std::future::Future;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

/// What a line typed at the prompt asks for
#[derive(Debug, PartialEq)]
enum Command<'a> {
    Say(&'a str),
    Suggestion(usize),
    Language(Language),
    Go(&'a str),
    Links,
    Help,
    Quit,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        if let Ok(index) = line.parse::<usize>() {
            if index > 0 {
                return Command::Suggestion(index - 1);
            }
        }

        let Some(rest) = line.strip_prefix('/') else {
            return Command::Say(line);
        };

        let (name, arg) = rest.split_once(' ').unwrap_or((rest, ""));
        match (name, arg.trim()) {
            ("quit" | "exit", _) => Command::Quit,
            ("help", _) => Command::Help,
            ("links", _) => Command::Links,
            ("go", section) if !section.is_empty() => Command::Go(section),
            ("lang", code) => match code.parse() {
                Ok(language) => Command::Language(language),
                Err(_) => Command::Unknown(line),
            },
            _ => Command::Unknown(line),
        }
    }
}

/// Scrolling is done by printing the anchor
struct TerminalNavigator;

impl SectionNavigator for TerminalNavigator {
    fn scroll_to_section(&mut self, section: &str) {
        println!("↪ #{}", section);
    }
}

/// Streams engine events to stdout
struct Renderer {
    assistant_name: String,
    shown: usize,
}

impl Renderer {
    fn handle(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Busy(true) => {
                self.shown = 0;
                print!("{}: ", self.assistant_name);
            }
            EngineEvent::Busy(false) => {}
            EngineEvent::Reveal(text) => {
                let fresh: String = text.chars().skip(self.shown).collect();
                self.shown += fresh.chars().count();
                print!("{}", fresh);
            }
            EngineEvent::Appended(entry) if entry.role == Role::Assistant => {
                // Fallback replies are appended without typing
                if self.shown == 0 {
                    print!("{}", entry.content);
                }
                println!("\n");
            }
            EngineEvent::Appended(_) => {}
        }
        let _ = std::io::stdout().flush();
    }
}

async fn run_turn<F>(
    turn: F,
    events: &mut broadcast::Receiver<EngineEvent>,
    renderer: &mut Renderer,
) -> SubmitOutcome
where
    F: Future<Output = SubmitOutcome>,
{
    tokio::pin!(turn);

    loop {
        tokio::select! {
            outcome = &mut turn => {
                loop {
                    match events.try_recv() {
                        Ok(event) => renderer.handle(event),
                        Err(TryRecvError::Lagged(skipped)) => {
                            log::warn!("Renderer skipped {} events", skipped);
                        }
                        Err(_) => break,
                    }
                }
                return outcome;
            }
            event = events.recv() => {
                match event {
                    Ok(event) => renderer.handle(event),
                    Err(RecvError::Lagged(skipped)) => {
                        log::warn!("Renderer skipped {} events", skipped);
                    }
                    Err(RecvError::Closed) => {}
                }
            }
        }
    }
}

fn print_welcome(config: &Config, language: Language) {
    println!("👻 {}", config.assistant_name);
    println!(
        "{} · {}\n",
        PROFILE.name.get(language),
        PROFILE.role.get(language)
    );
    println!("{}: {}\n", config.assistant_name, menu::welcome_message(language));
    for (index, suggestion) in menu::suggestions(language).iter().enumerate() {
        println!("  [{}] {}", index + 1, suggestion);
    }
    println!();
}

fn print_help() {
    println!("Type a question, or:");
    println!("  1-4            ask a suggested question");
    println!("  /lang en|bn    switch language");
    println!("  /go <section>  jump to a page section");
    println!("  /links         list social links");
    println!("  /quit          leave");
    let sections: Vec<&str> = QUICK_ACTIONS.iter().map(|action| action.id).collect();
    println!("Sections: {}\n", sections.join(", "));
}

fn print_links() {
    for link in SOCIAL_LINKS {
        println!("  {:<10} {}", link.label, link.href);
    }
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init();
    log::info!("🚀 Ghost AI started");

    let config = Config::default();
    log::info!("📁 Configuration loaded, typing delay {} ms", config.typing_delay_ms);

    let responder = HttpResponder::new(config.endpoint_url.clone())?;
    let engine = ConversationEngine::new(
        LocalClassifier::default(),
        responder,
        config.typing_delay(),
    );

    let mut events = engine.subscribe();
    let mut renderer = Renderer {
        assistant_name: config.assistant_name.clone(),
        shown: 0,
    };
    let mut navigator = TerminalNavigator;
    let mut language = config.language;

    print_welcome(&config, language);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match Command::parse(line) {
            Command::Quit => break,
            Command::Help => print_help(),
            Command::Links => print_links(),
            Command::Language(selected) => {
                language = selected;
                print_welcome(&config, language);
            }
            Command::Go(id) => match menu::find_quick_action(id) {
                Some(action) => navigator.scroll_to_section(action.section),
                None => println!("No section called {:?}\n", id),
            },
            Command::Suggestion(index) => match menu::suggestions(language).get(index) {
                Some(suggestion) => {
                    println!("> {}", suggestion);
                    run_turn(engine.click_suggestion(suggestion), &mut events, &mut renderer).await;
                }
                None => println!("No suggestion #{}\n", index + 1),
            },
            Command::Say(text) => {
                run_turn(engine.submit_turn(text), &mut events, &mut renderer).await;
            }
            Command::Unknown(input) => println!("Unknown command {:?}, try /help\n", input),
        }
    }

    log::info!("👋 Ghost AI stopped, {} messages this session", engine.transcript().len());
    Ok(())
}
