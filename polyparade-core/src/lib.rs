//! Polyparade core models
//!
//! Two independent object models: movers dispatched through the shared
//! [`Movable`] capability, and superheroes whose specializations build on a
//! common [`Superhero`] record through the [`Hero`] trait. Operations return
//! values and events; nothing here prints.

pub mod constants;
pub mod heroes;
pub mod movement;
pub mod roster;
pub mod showcase;

// Re-export commonly used types
pub use heroes::{
    AnyHero, FlyingSuperhero, GadgetEvents, Hero, HeroEvent, HeroKind, Superhero, TechHero,
};
pub use movement::{Animal, Category, Movable, MovementLine, Mover, Vehicle, demonstrate_movement};
pub use roster::{HeroProfile, HeroSpec, MoverRoster, Roster, RosterError};
pub use showcase::{
    Section, ShowcaseKind, Transcript, hero_showcase, movement_showcase, run_showcase,
};
