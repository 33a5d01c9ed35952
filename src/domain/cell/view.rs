//! Decoded cell view - a typed snapshot built on demand from a packed word.
//!
//! Storage stays a flat u32; this view exists for consumers that want
//! class-aware matching instead of raw modifier bits.

use super::{
    Cell, CLASS_EFFECT, CLASS_EMPTY, CLASS_FLUID, CLASS_GAS, CLASS_POWDER_DRY, CLASS_POWDER_FLOAT,
    CLASS_POWDER_WET, CLASS_SOLID,
};

/// Powder modifier bits, unpacked.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PowderState {
    pub sliding: bool,
    pub slide_dir: u8,
    pub momentum: u8,
}

/// Solid modifier bits, unpacked.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SolidState {
    pub body_edge: bool,
    pub body_id: u8,
}

/// Type class with its class-specific payload.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClassState {
    Empty,
    Effect,
    Gas,
    FloatingPowder(PowderState),
    Fluid,
    DryPowder(PowderState),
    WetPowder(PowderState),
    Solid(SolidState),
}

/// All fields of one cell, decoded.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellView {
    pub class: ClassState,
    pub behavior: u8,
    pub special: u8,
    pub heat_profile: u8,
    pub temperature: u8,
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        let powder = || PowderState {
            sliding: cell.is_sliding(),
            slide_dir: cell.slide_dir(),
            momentum: cell.momentum(),
        };

        let class = match cell.type_class() {
            CLASS_EMPTY => ClassState::Empty,
            CLASS_EFFECT => ClassState::Effect,
            CLASS_GAS => ClassState::Gas,
            CLASS_POWDER_FLOAT => ClassState::FloatingPowder(powder()),
            CLASS_FLUID => ClassState::Fluid,
            CLASS_POWDER_DRY => ClassState::DryPowder(powder()),
            CLASS_POWDER_WET => ClassState::WetPowder(powder()),
            CLASS_SOLID => ClassState::Solid(SolidState {
                body_edge: cell.is_body_edge(),
                body_id: cell.body_id(),
            }),
            // type_class() masks to 3 bits, so 0..=7 is exhaustive
            _ => unreachable!(),
        };

        CellView {
            class,
            behavior: cell.behavior(),
            special: cell.special(),
            heat_profile: cell.heat_profile(),
            temperature: cell.temperature(),
        }
    }
}
