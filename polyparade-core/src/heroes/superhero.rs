use serde::Serialize;

use super::HeroEvent;
use crate::constants::MAX_HEALTH;

/// Base hero record shared by every specialization.
///
/// Health and the secret identity are private to this type; callers read
/// them through [`Superhero::health`] and [`Superhero::reveal_secret_identity`].
///
/// ```compile_fail
/// use polyparade_core::Superhero;
///
/// let hero = Superhero::new("Batman", "Bruce Wayne", Vec::new(), "Batcave");
/// let _ = hero.health;
/// ```
///
/// ```compile_fail
/// use polyparade_core::Superhero;
///
/// let hero = Superhero::new("Batman", "Bruce Wayne", Vec::new(), "Batcave");
/// let _ = &hero.secret_identity;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Superhero {
    name: String,
    #[serde(skip)]
    secret_identity: String,
    powers: Vec<String>,
    base_of_operations: String,
    health: i32,
}

impl Superhero {
    pub fn new(
        name: impl Into<String>,
        secret_identity: impl Into<String>,
        powers: Vec<String>,
        base_of_operations: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            secret_identity: secret_identity.into(),
            powers,
            base_of_operations: base_of_operations.into(),
            health: MAX_HEALTH,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn powers(&self) -> &[String] {
        &self.powers
    }

    #[must_use]
    pub fn base_of_operations(&self) -> &str {
        &self.base_of_operations
    }

    #[must_use]
    pub const fn health(&self) -> i32 {
        self.health
    }

    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    #[must_use]
    pub fn introduce(&self) -> HeroEvent {
        HeroEvent::Introduced {
            name: self.name.clone(),
            powers: self.powers.clone(),
        }
    }

    /// Use the power at `index`, reporting a missing power when out of range.
    #[must_use]
    pub fn use_power(&self, index: usize) -> HeroEvent {
        match self.powers.get(index) {
            Some(power) => HeroEvent::UsedPower {
                name: self.name.clone(),
                power: power.clone(),
            },
            None => HeroEvent::MissingPower {
                name: self.name.clone(),
            },
        }
    }

    /// Subtract `amount` from health. There is no floor; defeat is reported
    /// once health reaches zero or below.
    pub fn take_damage(&mut self, amount: i32) -> HeroEvent {
        self.health = self.health.saturating_sub(amount);
        log::debug!("{} took {amount} damage, health now {}", self.name, self.health);
        if self.is_defeated() {
            HeroEvent::Defeated {
                name: self.name.clone(),
            }
        } else {
            HeroEvent::Damaged {
                name: self.name.clone(),
                amount,
                health: self.health,
            }
        }
    }

    /// Restore health, capped at [`MAX_HEALTH`].
    pub fn heal(&mut self, amount: i32) -> HeroEvent {
        self.health = self.health.saturating_add(amount).min(MAX_HEALTH);
        log::debug!("{} healed {amount}, health now {}", self.name, self.health);
        HeroEvent::Healed {
            name: self.name.clone(),
            amount,
            health: self.health,
        }
    }

    #[must_use]
    pub fn reveal_secret_identity(&self) -> HeroEvent {
        HeroEvent::SecretRevealed {
            name: self.name.clone(),
            identity: self.secret_identity.clone(),
        }
    }
}
