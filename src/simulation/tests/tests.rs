use super::*;
use crate::domain::cell::{compose_type, BH_NONE, CLASS_GAS};
use crate::domain::content::{MAT_AIR, MAT_SAND, MAT_STONE, MAT_WATER};

#[test]
fn paint_writes_template_and_counts() {
    let mut core = SessionCore::new(64, 64);
    core.begin_step();

    assert!(core.paint_material(10, 10, MAT_SAND));
    assert_eq!(core.cell_count(), 1);

    let cell = core.read_cell(10, 10);
    assert_eq!(cell, core.content().template_cell(MAT_SAND).unwrap());

    // Occupied cells are not repainted
    assert!(!core.paint_material(10, 10, MAT_STONE));
    assert_eq!(core.cell_count(), 1);
}

#[test]
fn paint_rejects_air_invalid_ids_and_out_of_bounds() {
    let mut core = SessionCore::new(32, 32);
    core.begin_step();

    assert!(!core.paint_material(5, 5, MAT_AIR));
    assert!(!core.paint_material(5, 5, 200));
    assert!(!core.paint_material(32, 5, MAT_SAND));
    assert!(!core.paint_material(5, 32, MAT_SAND));
    assert_eq!(core.cell_count(), 0);
}

#[test]
fn writes_mark_exactly_their_chunk() {
    let mut core = SessionCore::new(100, 100);
    core.begin_step();
    assert_eq!(core.dirty_chunk_count(), 0);

    // Default chunk size is 32: (45, 72) lands in chunk row 2, col 1.
    assert!(core.paint_material(45, 72, MAT_SAND));
    let expected = core.chunk_index().chunk_id(45, 72);
    assert_eq!(expected, 2 * 4 + 1);

    assert!(core.is_chunk_dirty(expected));
    assert_eq!(core.dirty_chunk_count(), 1);
    for id in 0..core.total_chunks() {
        assert_eq!(core.is_chunk_dirty(id), id == expected);
    }
}

#[test]
fn begin_step_clears_previous_dirty_set() {
    let mut core = SessionCore::new(64, 64);
    core.begin_step();
    core.paint_material(1, 1, MAT_WATER);
    core.end_step();
    assert_eq!(core.dirty_chunk_count(), 1);

    core.begin_step();
    assert_eq!(core.dirty_chunk_count(), 0);
}

#[test]
fn repeated_writes_to_one_chunk_stay_one_dirty_entry() {
    let mut core = SessionCore::new(64, 64);
    core.begin_step();

    let gas = Cell::encode(compose_type(CLASS_GAS), BH_NONE, 0, 0, 120);
    for i in 0..20 {
        core.write_cell(i % 8, i / 8, gas);
    }
    assert_eq!(core.dirty_chunk_count(), 1);
    assert_eq!(core.collect_dirty_chunks(), 1);
    assert_eq!(core.dirty_list_len(), 1);
}

#[test]
fn collect_dirty_chunks_does_not_clear() {
    let mut core = SessionCore::new(96, 96);
    core.begin_step();
    core.paint_material(0, 0, MAT_SAND);
    core.paint_material(64, 64, MAT_SAND);
    core.end_step();

    assert_eq!(core.collect_dirty_chunks(), 2);
    // A second consumer sees the same set.
    assert_eq!(core.collect_dirty_chunks(), 2);
    assert_eq!(core.dirty_chunk_count(), 2);
}

#[test]
fn erase_restores_empty_at_ambient_and_decrements() {
    let mut core = SessionCore::new(32, 32);
    core.set_ambient_temperature(30);
    core.begin_step();

    assert!(core.paint_material(3, 3, MAT_WATER));
    assert!(core.erase(3, 3));
    assert_eq!(core.cell_count(), 0);

    let cell = core.read_cell(3, 3);
    assert!(cell.is_empty());
    assert_eq!(cell.temperature(), 30);

    // Erasing empty space is a no-op
    assert!(!core.erase(3, 3));
}

#[test]
fn radius_brushes_paint_and_erase_discs() {
    let mut core = SessionCore::new(64, 64);
    core.begin_step();

    core.paint_radius(20, 20, 3, MAT_SAND);
    let painted = core.cell_count();
    assert!(painted > 0);
    // A radius-3 disc covers at most a 7x7 square.
    assert!(painted <= 49);
    assert!(!core.read_cell(20, 20).is_empty());

    core.erase_radius(20, 20, 3);
    assert_eq!(core.cell_count(), 0);
}

#[test]
fn end_step_advances_frame_and_captures_stats() {
    let mut core = SessionCore::new(64, 64);
    core.enable_perf_metrics(true);
    assert_eq!(core.frame(), 0);

    core.begin_step();
    core.paint_material(0, 0, MAT_SAND);
    core.paint_material(40, 40, MAT_SAND);
    core.end_step();

    assert_eq!(core.frame(), 1);
    let stats = core.get_step_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.cells_written(), 2);
    assert_eq!(stats.dirty_chunks(), 2);
    assert_eq!(stats.total_chunks(), 4);
    assert_eq!(stats.cell_count(), 2);
    assert!(stats.dirty_ratio() > 0.0);
}

#[test]
fn clear_resets_grid_counts_and_invalidates_everything() {
    let mut core = SessionCore::new(64, 64);
    core.begin_step();
    core.paint_radius(10, 10, 5, MAT_STONE);
    core.end_step();
    assert!(core.cell_count() > 0);

    core.clear();
    assert_eq!(core.cell_count(), 0);
    assert_eq!(core.frame(), 0);
    // Everything must repaint after a clear.
    assert_eq!(core.dirty_chunk_count(), core.total_chunks());
    assert!(core.read_cell(10, 10).is_empty());
}

#[test]
fn bundle_load_swaps_content_and_clears() {
    let mut core = SessionCore::new(32, 32);
    core.begin_step();
    core.paint_material(1, 1, MAT_SAND);

    let json = r#"{
        "profiles": [{"key": "goo_heat", "conductive_index": 0.7}],
        "materials": [
            {"key": "pack:empty", "class": "empty", "hidden": true},
            {"key": "pack:goo", "class": "fluid", "behavior": "liquid", "profile": "goo_heat"}
        ]
    }"#;
    core.load_content_bundle_json(json).unwrap();

    assert_eq!(core.cell_count(), 0);
    assert_eq!(core.content().material_count(), 2);
    let goo = core.content().id_by_key("pack:goo").unwrap();
    assert!(core.paint_material(2, 2, goo));
    assert_eq!(core.heat_profiles().conductive_index_of(0), 0.7);

    assert!(core.load_content_bundle_json("{not json").is_err());
}

#[test]
fn heat_lookups_flow_from_cell_to_table() {
    let mut core = SessionCore::new(8, 8);
    core.begin_step();
    assert!(core.paint_material(0, 0, MAT_WATER));

    let cell = core.read_cell(0, 0);
    let conductivity = core.heat_profiles().conductive_index_of(cell.heat_profile());
    assert_eq!(conductivity, 0.6);
}
