use crate::domain::cell::Cell;
use crate::domain::content::{MaterialId, MAT_AIR};

use super::SessionCore;

pub(super) fn paint_material(core: &mut SessionCore, x: u32, y: u32, material: MaterialId) -> bool {
    if x >= core.grid.width() || y >= core.grid.height() {
        return false;
    }

    // Painting air is not a paint; use erase
    if material == MAT_AIR || !core.content.is_valid_material_id(material) {
        return false;
    }

    if !core.grid.is_empty(x, y) {
        return false;
    }

    let Some(template) = core.content.template_cell(material) else {
        return false;
    };

    core.write_cell(x, y, template);
    true
}

pub(super) fn paint_radius(core: &mut SessionCore, cx: i32, cy: i32, radius: i32, material: MaterialId) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                let x = cx + dx;
                let y = cy + dy;
                if x >= 0 && y >= 0 {
                    paint_material(core, x as u32, y as u32, material);
                }
            }
        }
    }
}

pub(super) fn erase(core: &mut SessionCore, x: u32, y: u32) -> bool {
    if x >= core.grid.width() || y >= core.grid.height() {
        return false;
    }

    if core.grid.is_empty(x, y) {
        return false;
    }

    let empty = Cell::EMPTY.with_temperature(core.ambient_temperature);
    core.write_cell(x, y, empty);
    true
}

pub(super) fn erase_radius(core: &mut SessionCore, cx: i32, cy: i32, radius: i32) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                let x = cx + dx;
                let y = cy + dy;
                if x >= 0 && y >= 0 {
                    erase(core, x as u32, y as u32);
                }
            }
        }
    }
}

pub(super) fn clear(core: &mut SessionCore) {
    core.grid.clear();
    core.dirty.mark_all_dirty();
    core.cell_count = 0;
    core.frame = 0;
}
