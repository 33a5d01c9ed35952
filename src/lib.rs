//! Granula Engine - packed cell state and chunked change tracking in WASM
//!
//! This crate is the storage substrate of the Granula sandbox: the 32-bit
//! per-cell encoding, the heat profile table it indexes, and the chunk dirty
//! bookkeeping that lets the rule engine and renderer skip untouched regions.
//!
//! Architecture:
//! - core/          - Safety macros
//! - domain/        - Cell codec, heat profiles, material content
//! - spatial/       - Grid storage and chunk partitioning
//! - simulation/    - Session orchestration and public API

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod simulation;

// Convenience re-exports (keeps consumer paths short)
pub use domain::cell;
pub use domain::content;
pub use domain::heat;
pub use spatial::chunks;
pub use spatial::grid;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Granula WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::cell::{Cell, CellView};
pub use domain::content::MaterialRegistry;
pub use domain::heat::{HeatProfile, HeatProfileTable};
pub use simulation::{Session, StepStats};
pub use spatial::chunks::{ChunkIndex, DirtyChunkTracker};
pub use spatial::grid::Grid;

// Export type class constants for JS
#[wasm_bindgen]
pub fn class_empty() -> u8 { domain::cell::CLASS_EMPTY }
#[wasm_bindgen]
pub fn class_effect() -> u8 { domain::cell::CLASS_EFFECT }
#[wasm_bindgen]
pub fn class_gas() -> u8 { domain::cell::CLASS_GAS }
#[wasm_bindgen]
pub fn class_floating_powder() -> u8 { domain::cell::CLASS_POWDER_FLOAT }
#[wasm_bindgen]
pub fn class_fluid() -> u8 { domain::cell::CLASS_FLUID }
#[wasm_bindgen]
pub fn class_powder_dry() -> u8 { domain::cell::CLASS_POWDER_DRY }
#[wasm_bindgen]
pub fn class_powder_wet() -> u8 { domain::cell::CLASS_POWDER_WET }
#[wasm_bindgen]
pub fn class_solid() -> u8 { domain::cell::CLASS_SOLID }

// Export behavior constants for JS
#[wasm_bindgen]
pub fn bh_none() -> u8 { domain::cell::BH_NONE }
#[wasm_bindgen]
pub fn bh_soil() -> u8 { domain::cell::BH_SOIL }
#[wasm_bindgen]
pub fn bh_grass() -> u8 { domain::cell::BH_GRASS }
#[wasm_bindgen]
pub fn bh_trunk() -> u8 { domain::cell::BH_TRUNK }
#[wasm_bindgen]
pub fn bh_root() -> u8 { domain::cell::BH_ROOT }
#[wasm_bindgen]
pub fn bh_leaf() -> u8 { domain::cell::BH_LEAF }
#[wasm_bindgen]
pub fn bh_fire() -> u8 { domain::cell::BH_FIRE }
#[wasm_bindgen]
pub fn bh_fire_source() -> u8 { domain::cell::BH_FIRE_SOURCE }
#[wasm_bindgen]
pub fn bh_meteor() -> u8 { domain::cell::BH_METEOR }
#[wasm_bindgen]
pub fn bh_liquid() -> u8 { domain::cell::BH_LIQUID }
#[wasm_bindgen]
pub fn bh_entity() -> u8 { domain::cell::BH_ENTITY }
