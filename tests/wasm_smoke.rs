//! Browser-side smoke test, run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use granula_engine::Session;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn session_steps_in_wasm() {
    let mut session = Session::new(64, 64);
    let sand = session.material_id("base:sand").unwrap();

    session.begin_step();
    assert!(session.paint_material(1, 1, sand));
    session.end_step();

    assert_eq!(session.cell_count(), 1);
    assert_eq!(session.dirty_chunk_count(), 1);
    assert!(!session.cells_ptr().is_null());
}
