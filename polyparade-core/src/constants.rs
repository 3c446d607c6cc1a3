//! Fixed tuning values shared by the hero model and the showcase script.
//!
//! Keeping them together means the demonstrated numbers only change through
//! code review, never through a roster file.

// Hero vitals ----------------------------------------------------------------
pub const MAX_HEALTH: i32 = 100;
pub const FLIGHT_POWER: &str = "flight";

// Tech heroes ----------------------------------------------------------------
pub const FULL_BATTERY: i32 = 100;
pub const GADGET_BATTERY_COST: i32 = 10;

// Showcase script ------------------------------------------------------------
pub const SHOWCASE_DAMAGE: i32 = 30;
pub const SHOWCASE_ALTITUDE: u32 = 10_000;

// Movement -------------------------------------------------------------------
pub const NO_MOVEMENT_PLACEHOLDER: &str = "(no movement)";
