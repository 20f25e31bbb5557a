//! CLI deck example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Card, Color, Command, Panel, Shell, ShellOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("Card deck CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut shell = Shell::new(ShellOptions::default(), seed);

    loop {
        let deck = shell.deck();
        println!(
            "\nDeck: {} available, {} drawn",
            deck.available_len(),
            deck.drawn_len()
        );
        println!("{}", format_actions());

        let Some(input) = prompt_line("Action: ") else {
            break;
        };
        if input.is_empty() {
            continue;
        }
        if input == "q" || input == "quit" {
            println!("Goodbye.");
            break;
        }

        match input.parse::<Command>() {
            Ok(command) => print_panel(&shell.run(command)),
            Err(err) => println!("{err}: {input}"),
        }
    }
}

/// Returns `None` once stdin is closed.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn format_actions() -> String {
    let parts = [
        format_action("draw 20", "d"),
        format_action("sort", "s"),
        format_action("shuffle", "r"),
        format_action("quit", "q"),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str) -> String {
    colorize(&format!("[{key}]{label}"), "32")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn print_panel(panel: &Panel) {
    println!("\n{}", panel.title);
    if panel.cards.is_empty() {
        println!("(no cards)");
        return;
    }
    for card in &panel.cards {
        println!("{}", format_card(card));
    }
}

fn format_card(card: &Card) -> String {
    let color_code = match card.color() {
        Color::Red => "31",
        Color::Black => "34",
    };
    colorize(&card.to_string(), color_code)
}
