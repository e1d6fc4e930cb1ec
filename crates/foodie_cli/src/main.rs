//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `foodie_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use foodie_core::{CatalogQuery, CoreConfig, MemoryKeyValueStore, RecipeService};

fn main() {
    let config = CoreConfig::from_env();
    match config.init_logging() {
        Ok(true) => println!("foodie_core logging=on level={}", config.log_level),
        Ok(false) => println!("foodie_core logging=off"),
        Err(err) => eprintln!("foodie_core logging=error {err}"),
    }

    // In-memory backend: the smoke run must not touch the device database.
    let service = RecipeService::open(MemoryKeyValueStore::new());
    println!("foodie_core ping={}", foodie_core::ping());
    println!("foodie_core version={}", foodie_core::core_version());
    println!(
        "foodie_core seeded_recipes={}",
        service.list(&CatalogQuery::default()).len()
    );
}
