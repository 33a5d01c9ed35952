//! Heat profiles - thermal and combustion coefficients per profile index.
//!
//! A cell stores an 8-bit profile field but only the low 4 bits select a
//! row, so every lookup masks into a fully populated 16-row table. The table
//! is built once (rows registered in order, the rest defaulted) and is
//! read-only afterwards.
//!
//! All chance columns are integers per-10000: the rule engine compares them
//! against a uniform roll in [0, 10000), which keeps outcomes exact and
//! reproducible across platforms.

/// Number of rows in a heat profile table.
pub const HEAT_PROFILE_COUNT: usize = 16;

/// Mask applied to the cell's heat profile field on every lookup.
pub const HEAT_INDEX_MASK: u8 = (HEAT_PROFILE_COUNT - 1) as u8;

/// Thermal/combustion coefficients for one profile row.
///
/// Melting and hardening columns are pure lookup data: the rule engine
/// decides when a transition fires and which cell fields to rewrite with
/// the target index.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HeatProfile {
    /// Heat-transfer rate toward neighbors, 0.0 (insulator) to 1.0.
    pub conductive_index: f32,
    /// Chance per 10000 of losing one unit of ambient heat per step.
    pub heat_loss_chance: u16,
    /// Chance per 10000 of catching fire from a burning neighbor.
    pub flammability_chance: u16,
    /// Chance per 10000 of igniting with no neighbor involved.
    pub self_ignition_chance: u16,
    /// Temperature a flame on this profile radiates.
    pub flame_heat: u8,
    /// Chance per 10000 of a burning cell being consumed per step.
    pub burn_down_chance: u16,
    /// Temperature above which the cell melts.
    pub melting_point: u8,
    /// Profile index to switch to when melted.
    pub melting_target: u8,
    /// Temperature below which the cell hardens.
    pub hardening_point: u8,
    /// Profile index to switch to when hardened.
    pub hardening_target: u8,
}

impl HeatProfile {
    /// Conductivity of an unregistered row.
    pub const DEFAULT_CONDUCTIVE_INDEX: f32 = 0.25;

    /// The all-default row: no combustion, moderate conductivity, melting
    /// and hardening thresholds pushed past the temperature range so
    /// neither transition can ever trigger.
    pub const fn inert() -> Self {
        HeatProfile {
            conductive_index: Self::DEFAULT_CONDUCTIVE_INDEX,
            heat_loss_chance: 0,
            flammability_chance: 0,
            self_ignition_chance: 0,
            flame_heat: 0,
            burn_down_chance: 0,
            melting_point: u8::MAX,
            melting_target: 0,
            hardening_point: u8::MIN,
            hardening_target: 0,
        }
    }
}

impl Default for HeatProfile {
    fn default() -> Self {
        Self::inert()
    }
}

/// Registers profile rows in order; index = registration order.
pub struct HeatProfileTableBuilder {
    rows: [HeatProfile; HEAT_PROFILE_COUNT],
    registered: usize,
}

impl HeatProfileTableBuilder {
    pub fn new() -> Self {
        HeatProfileTableBuilder {
            rows: [HeatProfile::inert(); HEAT_PROFILE_COUNT],
            registered: 0,
        }
    }

    /// Register the next row and return its assigned index.
    ///
    /// Table capacity is fixed; registering more than 16 rows is a build-time
    /// programmer error.
    pub fn register(&mut self, profile: HeatProfile) -> u8 {
        assert!(
            self.registered < HEAT_PROFILE_COUNT,
            "heat profile table is full"
        );
        let index = self.registered as u8;
        self.rows[self.registered] = profile;
        self.registered += 1;
        index
    }

    pub fn registered(&self) -> usize {
        self.registered
    }

    pub fn build(self) -> HeatProfileTable {
        HeatProfileTable { rows: self.rows }
    }
}

impl Default for HeatProfileTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable 16-row table of heat profiles.
///
/// Every accessor masks the index to the table width, so lookups are total
/// over all 8-bit inputs - there is no missing-row error path.
#[derive(Clone, Debug)]
pub struct HeatProfileTable {
    rows: [HeatProfile; HEAT_PROFILE_COUNT],
}

impl HeatProfileTable {
    /// A table with nothing registered: all rows inert.
    pub fn empty() -> Self {
        HeatProfileTableBuilder::new().build()
    }

    #[inline]
    pub fn profile(&self, index: u8) -> &HeatProfile {
        &self.rows[(index & HEAT_INDEX_MASK) as usize]
    }

    // === Column lookups ===

    #[inline]
    pub fn conductive_index_of(&self, index: u8) -> f32 {
        self.profile(index).conductive_index
    }

    #[inline]
    pub fn heat_loss_chance_of(&self, index: u8) -> u16 {
        self.profile(index).heat_loss_chance
    }

    #[inline]
    pub fn flammability_chance_of(&self, index: u8) -> u16 {
        self.profile(index).flammability_chance
    }

    #[inline]
    pub fn self_ignition_chance_of(&self, index: u8) -> u16 {
        self.profile(index).self_ignition_chance
    }

    #[inline]
    pub fn flame_heat_of(&self, index: u8) -> u8 {
        self.profile(index).flame_heat
    }

    #[inline]
    pub fn burn_down_chance_of(&self, index: u8) -> u16 {
        self.profile(index).burn_down_chance
    }

    #[inline]
    pub fn melting_point_of(&self, index: u8) -> u8 {
        self.profile(index).melting_point
    }

    #[inline]
    pub fn melting_target_of(&self, index: u8) -> u8 {
        self.profile(index).melting_target
    }

    #[inline]
    pub fn hardening_point_of(&self, index: u8) -> u8 {
        self.profile(index).hardening_point
    }

    #[inline]
    pub fn hardening_target_of(&self, index: u8) -> u8 {
        self.profile(index).hardening_target
    }
}
