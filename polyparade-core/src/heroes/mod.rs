//! Superhero model: a base record plus flying and tech specializations.
//!
//! Specializations own a [`Superhero`] and expose it through [`Hero`], whose
//! provided methods delegate to the base record. A specialization overrides
//! a provided method when it needs different behaviour, and can still call
//! the base version through `self.base()`.

mod event;
mod flying;
mod superhero;
mod tech;

use serde::{Deserialize, Serialize};

pub use event::HeroEvent;
pub use flying::FlyingSuperhero;
pub use superhero::Superhero;
pub use tech::{GadgetEvents, TechHero};

/// Operations every hero supports.
pub trait Hero {
    fn base(&self) -> &Superhero;
    fn base_mut(&mut self) -> &mut Superhero;

    fn name(&self) -> &str {
        self.base().name()
    }

    fn health(&self) -> i32 {
        self.base().health()
    }

    fn introduce(&self) -> HeroEvent {
        self.base().introduce()
    }

    fn use_power(&self, index: usize) -> HeroEvent {
        self.base().use_power(index)
    }

    fn take_damage(&mut self, amount: i32) -> HeroEvent {
        self.base_mut().take_damage(amount)
    }

    fn heal(&mut self, amount: i32) -> HeroEvent {
        self.base_mut().heal(amount)
    }

    fn reveal_secret_identity(&self) -> HeroEvent {
        self.base().reveal_secret_identity()
    }
}

impl Hero for Superhero {
    fn base(&self) -> &Superhero {
        self
    }

    fn base_mut(&mut self) -> &mut Superhero {
        self
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroKind {
    Base,
    Flying,
    Tech,
}

/// Closed set of hero types, dispatching to the most specific implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyHero {
    Base(Superhero),
    Flying(FlyingSuperhero),
    Tech(TechHero),
}

impl AnyHero {
    #[must_use]
    pub const fn kind(&self) -> HeroKind {
        match self {
            Self::Base(_) => HeroKind::Base,
            Self::Flying(_) => HeroKind::Flying,
            Self::Tech(_) => HeroKind::Tech,
        }
    }

    pub const fn as_flying_mut(&mut self) -> Option<&mut FlyingSuperhero> {
        match self {
            Self::Flying(hero) => Some(hero),
            _ => None,
        }
    }

    pub const fn as_tech_mut(&mut self) -> Option<&mut TechHero> {
        match self {
            Self::Tech(hero) => Some(hero),
            _ => None,
        }
    }
}

impl From<Superhero> for AnyHero {
    fn from(hero: Superhero) -> Self {
        Self::Base(hero)
    }
}

impl From<FlyingSuperhero> for AnyHero {
    fn from(hero: FlyingSuperhero) -> Self {
        Self::Flying(hero)
    }
}

impl From<TechHero> for AnyHero {
    fn from(hero: TechHero) -> Self {
        Self::Tech(hero)
    }
}

impl Hero for AnyHero {
    fn base(&self) -> &Superhero {
        match self {
            Self::Base(hero) => hero,
            Self::Flying(hero) => hero.base(),
            Self::Tech(hero) => hero.base(),
        }
    }

    fn base_mut(&mut self) -> &mut Superhero {
        match self {
            Self::Base(hero) => hero,
            Self::Flying(hero) => hero.base_mut(),
            Self::Tech(hero) => hero.base_mut(),
        }
    }

    fn use_power(&self, index: usize) -> HeroEvent {
        match self {
            Self::Base(hero) => Hero::use_power(hero, index),
            Self::Flying(hero) => hero.use_power(index),
            Self::Tech(hero) => hero.use_power(index),
        }
    }
}
