//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `dealbook_core` linkage.
//! - Stand in for the presentation layer: open a seeded store, read a
//!   few views, print them.

use dealbook_core::{default_log_level, init_logging, Store};

fn main() {
    let log_dir = std::env::temp_dir().join("dealbook-logs");
    if let Some(log_dir) = log_dir.to_str() {
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("dealbook_core version={}", dealbook_core::core_version());

    let store = match Store::open() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("failed to open store: {err}");
            std::process::exit(1);
        }
    };

    match (
        store.list_companies(),
        store.list_contacts(),
        store.list_deals(),
        store.list_activities(),
    ) {
        (Ok(companies), Ok(contacts), Ok(deals), Ok(activities)) => {
            println!(
                "seeded companies={} contacts={} deals={} activities={}",
                companies.len(),
                contacts.len(),
                deals.len(),
                activities.len()
            );
        }
        _ => {
            eprintln!("failed to list seeded records");
            std::process::exit(1);
        }
    }

    match store.search("tech") {
        Ok(hits) => {
            println!(
                "search \"tech\": companies={} contacts={} deals={}",
                hits.companies.len(),
                hits.contacts.len(),
                hits.deals.len()
            );
        }
        Err(err) => {
            eprintln!("search failed: {err}");
            std::process::exit(1);
        }
    }
}
