//! `tripform` CLI — drive the dashboard form components from a terminal.
//!
//! Binds the CSV guard and the trip-cost calculator to in-memory elements
//! and feeds them change events read from stdin, one command per line:
//!
//! ```text
//! price <value>      commit a new fuel price (fires a change event)
//! file <name>        commit a new file selection (fires a change event)
//! consumed <text>    edit the consumed display (no event; stays stale)
//! show               print the current page state
//! quit               exit
//! ```
//!
//! Alerts render as `alert: <message>` on stdout.

use std::io::{self, BufRead};

use clap::Parser;
use log::warn;

use tripform_core::calculator::TripCostCalculator;
use tripform_core::element::{AlertSink, DisplayElement, InputElement, MemoryDisplay, MemoryInput};
use tripform_core::event::ChangeEvent;
use tripform_core::guard::CsvGuard;
use tripform_core::ids;
use tripform_core::selection::SelectionOutcome;

#[derive(Parser)]
#[command(version, about = "tripform \u{2014} fuel-trip form harness")]
struct Cli {
    /// Initial value of the fuel-price input
    #[arg(long, default_value = "0")]
    price: String,

    /// Initial text of the fuel-consumed display
    #[arg(long, default_value = "0")]
    consumed: String,
}

/// [`AlertSink`] that renders blocking alerts as terminal lines.
struct TermAlerts;

impl AlertSink for TermAlerts {
    fn alert(&mut self, message: &str) {
        println!("alert: {message}");
    }
}

/// The simulated page: four elements plus the two bound components.
struct Page {
    file: MemoryInput,
    price: MemoryInput,
    consumed: MemoryDisplay,
    cost: MemoryDisplay,
    guard: CsvGuard<MemoryInput, TermAlerts>,
    calc: TripCostCalculator<MemoryInput, MemoryDisplay, MemoryDisplay>,
}

impl Page {
    /// Build the page and bind both components, printing the initial cost
    /// the calculator writes at bind time.
    fn bind(cli: &Cli) -> Self {
        let file = MemoryInput::with_value("");
        let price = MemoryInput::with_value(&cli.price);
        let consumed = MemoryDisplay::with_text(&cli.consumed);
        let cost = MemoryDisplay::with_text("");

        let guard = CsvGuard::bind(file.clone(), TermAlerts);
        let calc = TripCostCalculator::bind(price.clone(), consumed.clone(), cost.clone());
        println!("{} = {}", ids::TRIP_COST, cost.text());

        Self {
            file,
            price,
            consumed,
            cost,
            guard,
            calc,
        }
    }

    fn commit_price(&mut self, value: &str) {
        self.price.set_value(value);
        let display = self.calc.on_price_change(&ChangeEvent::new(value));
        println!("{} = {display}", ids::TRIP_COST);
    }

    fn commit_file(&mut self, name: &str) {
        self.file.set_value(name);
        match self.guard.on_change(&ChangeEvent::new(name)) {
            SelectionOutcome::Accepted => println!("{} = {name}", ids::FILE),
            // The guard has already alerted and cleared the control.
            SelectionOutcome::Rejected => {}
        }
    }

    fn edit_consumed(&mut self, text: &str) {
        self.consumed.set_text(text);
    }

    fn show(&self) {
        println!("{} = {}", ids::FILE, self.file.value());
        println!("{} = {}", ids::FUEL_PRICE, self.price.value());
        println!("{} = {}", ids::FUEL_CONSUMED, self.consumed.text());
        println!("{} = {}", ids::TRIP_COST, self.cost.text());
    }
}

/// Dispatch one stdin line. Returns `false` when the loop should stop.
fn handle_line(page: &mut Page, line: &str) -> bool {
    let line = line.trim();
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "price" => page.commit_price(rest),
        "file" => page.commit_file(rest),
        "consumed" => page.edit_consumed(rest),
        "show" => page.show(),
        "quit" => return false,
        other => {
            warn!("unknown command {other:?}");
            eprintln!("Warning: unknown command {other:?}");
        }
    }
    true
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut page = Page::bind(&cli);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !handle_line(&mut page, &line?) {
            break;
        }
    }
    Ok(())
}
