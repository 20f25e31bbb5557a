use deckrs::{Card, Color, Command, Panel, Rank, Shell, ShellOptions, Suit};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmShell {
    shell: Shell,
}

#[wasm_bindgen]
impl WasmShell {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            shell: Shell::new(ShellOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.shell = Shell::new(*self.shell.options(), seed as u64);
    }

    pub fn draw(&mut self) -> Result<JsValue, JsValue> {
        to_js_value(&JsPanel::from(self.shell.draw()))
    }

    pub fn sort(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsPanel::from(self.shell.sort()))
    }

    pub fn shuffle(&mut self) -> Result<JsValue, JsValue> {
        to_js_value(&JsPanel::from(self.shell.shuffle()))
    }

    /// Runs a typed command such as `"draw"` or `"s"`.
    pub fn run(&mut self, command: &str) -> Result<JsValue, JsValue> {
        let command = command.parse::<Command>().map_err(js_err)?;
        to_js_value(&JsPanel::from(self.shell.run(command)))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let deck = self.shell.deck();
        let snapshot = Snapshot {
            available: deck.available().into_iter().map(JsCard::from).collect(),
            drawn: deck.drawn().into_iter().map(JsCard::from).collect(),
            draw_count: self.shell.options().draw_count as u32,
        };
        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    available: Vec<JsCard>,
    drawn: Vec<JsCard>,
    draw_count: u32,
}

#[derive(Serialize)]
struct JsPanel {
    title: String,
    text: String,
    cards: Vec<JsCard>,
}

impl From<Panel> for JsPanel {
    fn from(panel: Panel) -> Self {
        Self {
            text: panel.to_string(),
            cards: panel.cards.into_iter().map(JsCard::from).collect(),
            title: panel.title,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    color: &'static str,
    label: String,
}

impl From<Card> for JsCard {
    fn from(card: Card) -> Self {
        Self {
            suit: suit_to_str(card.suit()),
            rank: rank_to_str(card.rank()),
            color: color_to_str(card.color()),
            label: card.to_string(),
        }
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spade => "Spade",
        Suit::Club => "Club",
        Suit::Heart => "Heart",
        Suit::Diamond => "Diamond",
    }
}

fn rank_to_str(rank: Rank) -> &'static str {
    match rank {
        Rank::A => "A",
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::J => "J",
        Rank::Q => "Q",
        Rank::K => "K",
    }
}

fn color_to_str(color: Color) -> &'static str {
    match color {
        Color::Red => "Red",
        Color::Black => "Black",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
