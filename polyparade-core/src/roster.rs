//! Roster configuration: which movers and heroes a showcase runs with.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::heroes::{AnyHero, FlyingSuperhero, HeroKind, Superhero, TechHero};
use crate::movement::{Animal, Mover, Vehicle};

const BUILTIN_ROSTER: &str = include_str!("../assets/roster.json");

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("hero #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("{name} has an empty secret identity")]
    EmptySecretIdentity { name: String },
    #[error("hero name {name} appears more than once")]
    DuplicateHero { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MoverRoster {
    #[serde(default)]
    pub animals: Vec<Animal>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

impl MoverRoster {
    /// Every mover, animals first.
    #[must_use]
    pub fn all(&self) -> Vec<Mover> {
        self.animals
            .iter()
            .copied()
            .map(Mover::from)
            .chain(self.vehicles.iter().copied().map(Mover::from))
            .collect()
    }
}

/// Declarative description of one hero, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeroSpec {
    Base {
        #[serde(flatten)]
        profile: HeroProfile,
    },
    Flying {
        #[serde(flatten)]
        profile: HeroProfile,
        max_altitude: u32,
    },
    Tech {
        #[serde(flatten)]
        profile: HeroProfile,
        #[serde(default)]
        gadgets: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroProfile {
    pub name: String,
    pub secret_identity: String,
    #[serde(default)]
    pub powers: Vec<String>,
    #[serde(default)]
    pub base_of_operations: String,
}

impl HeroSpec {
    #[must_use]
    pub const fn profile(&self) -> &HeroProfile {
        match self {
            Self::Base { profile } | Self::Flying { profile, .. } | Self::Tech { profile, .. } => {
                profile
            }
        }
    }

    #[must_use]
    pub const fn kind(&self) -> HeroKind {
        match self {
            Self::Base { .. } => HeroKind::Base,
            Self::Flying { .. } => HeroKind::Flying,
            Self::Tech { .. } => HeroKind::Tech,
        }
    }

    #[must_use]
    pub fn build(&self) -> AnyHero {
        let HeroProfile {
            name,
            secret_identity,
            powers,
            base_of_operations,
        } = self.profile().clone();
        match self {
            Self::Base { .. } => {
                Superhero::new(name, secret_identity, powers, base_of_operations).into()
            }
            Self::Flying { max_altitude, .. } => FlyingSuperhero::new(
                name,
                secret_identity,
                powers,
                base_of_operations,
                *max_altitude,
            )
            .into(),
            Self::Tech { gadgets, .. } => TechHero::new(
                name,
                secret_identity,
                powers,
                base_of_operations,
                gadgets.clone(),
            )
            .into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Roster {
    #[serde(default)]
    pub movers: MoverRoster,
    #[serde(default)]
    pub heroes: Vec<HeroSpec>,
}

impl Roster {
    /// Parse and validate a roster from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a hero is missing its
    /// name or secret identity, or shares its name with another hero.
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let roster: Self = serde_json::from_str(json)?;
        roster.validate()?;
        log::debug!(
            "loaded roster with {} movers and {} heroes",
            roster.movers.animals.len() + roster.movers.vehicles.len(),
            roster.heroes.len()
        );
        Ok(roster)
    }

    /// The bundled cast: the seven movers plus Superman and Batman.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled asset fails validation.
    pub fn builtin() -> Result<Self, RosterError> {
        Self::from_json(BUILTIN_ROSTER)
    }

    /// Check hero names and identities.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in roster order.
    pub fn validate(&self) -> Result<(), RosterError> {
        let mut seen = HashSet::new();
        for (index, spec) in self.heroes.iter().enumerate() {
            let profile = spec.profile();
            if profile.name.trim().is_empty() {
                return Err(RosterError::EmptyName { index });
            }
            if profile.secret_identity.trim().is_empty() {
                return Err(RosterError::EmptySecretIdentity {
                    name: profile.name.clone(),
                });
            }
            if !seen.insert(profile.name.as_str()) {
                return Err(RosterError::DuplicateHero {
                    name: profile.name.clone(),
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn build_heroes(&self) -> Vec<AnyHero> {
        self.heroes.iter().map(HeroSpec::build).collect()
    }
}
