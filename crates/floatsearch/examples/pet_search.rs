//! floatsearch Pet Search Example
//!
//! Scripted host session for the filterable dropdown:
//! - Typing filters the pet list and opens it
//! - Clearing the query restores the full list and closes it
//! - Tapping a row fills the search bar
//! - Cancel clears everything
//!
//! Run with: RUST_LOG=floatsearch=debug cargo run -p floatsearch --example pet_search
//!
//! Pass a TOML file as the first argument to override the widget config.

use std::sync::Arc;
use std::time::{Duration, Instant};

use floatsearch::prelude::*;
use tracing_subscriber::EnvFilter;

const PETS: [&str; 11] = [
    "Axel", "Raven", "Chuckie", "Ryusaki", "Mikasa", "Star Lord", "Goshiro", "Blackie", "Salem",
    "Balto", "Bell",
];

/// Host-side view of a dropdown event.
struct PetSearchHost;

impl DropdownListener for PetSearchHost {
    fn on_text_changed(&self, text: &str) {
        tracing::info!(%text, "host: query changed");
    }

    fn on_row_selected(&self, text: &str) {
        tracing::info!(%text, "host: pet selected");
    }

    fn on_dropdown_cancel(&self) {
        tracing::info!("host: search cancelled");
    }
}

fn print_state(step: &str, dropdown: &FilterableDropdown) {
    let frame = dropdown.list_frame();
    println!(
        "{step:<28} query={:<10} visible={:<5} rows={:?} list_height={}",
        format!("{:?}", dropdown.query()),
        dropdown.is_list_visible(),
        dropdown.filtered_items(),
        frame.height(),
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => WidgetConfig::load(path)?,
        None => WidgetConfig::default(),
    };

    let mut dropdown = FilterableDropdown::with_config(Rect::new(0.0, 60.0, 375.0, 400.0), &config);
    dropdown.configure(
        PETS.iter().map(|p| p.to_string()).collect(),
        "Search",
        "Enter Search Here",
    );
    dropdown.set_listener(Arc::new(PetSearchHost));
    dropdown.search_bar_mut().set_listener(Arc::new(
        SearchBarCallbacks::new()
            .with_begin_editing(|| tracing::info!("host: editing began"))
            .with_end_editing(|| tracing::info!("host: editing ended"))
            .with_submit(|| tracing::info!("host: search submitted")),
    ));
    print_state("configured", &dropdown);

    dropdown.request_focus();
    let start = Instant::now();
    for (i, query) in ["s", "sa", "sal"].into_iter().enumerate() {
        dropdown.handle_text_edited(query);
        dropdown.advance_animation_at(start + Duration::from_millis(100 * (i as u64 + 1)));
        print_state(&format!("typed {query:?}"), &dropdown);
    }

    let label = dropdown.search_bar().input().floating_label();
    println!(
        "floating label: state={:?} opacity={:.2} frame={:?}",
        dropdown.search_bar().input().label_state(),
        label.opacity,
        label.frame,
    );

    dropdown.handle_text_edited("");
    print_state("cleared query", &dropdown);

    dropdown.handle_text_edited("a");
    print_state("typed \"a\"", &dropdown);
    if let Some(pet) = dropdown.select_row(1) {
        println!("selected {pet}");
    }
    print_state("after selection", &dropdown);

    dropdown.submit();
    print_state("submitted", &dropdown);

    dropdown.tap_cancel();
    print_state("cancelled", &dropdown);

    Ok(())
}
