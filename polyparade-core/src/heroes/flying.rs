use serde::Serialize;

use super::{Hero, HeroEvent, Superhero};
use crate::constants::FLIGHT_POWER;

/// A hero who can fly up to a fixed ceiling.
///
/// Construction appends [`FLIGHT_POWER`] to the supplied powers, so flight
/// is always the last power in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlyingSuperhero {
    #[serde(flatten)]
    base: Superhero,
    max_altitude: u32,
    current_altitude: u32,
}

impl FlyingSuperhero {
    pub fn new(
        name: impl Into<String>,
        secret_identity: impl Into<String>,
        mut powers: Vec<String>,
        base_of_operations: impl Into<String>,
        max_altitude: u32,
    ) -> Self {
        powers.push(FLIGHT_POWER.to_string());
        Self {
            base: Superhero::new(name, secret_identity, powers, base_of_operations),
            max_altitude,
            current_altitude: 0,
        }
    }

    #[must_use]
    pub const fn max_altitude(&self) -> u32 {
        self.max_altitude
    }

    #[must_use]
    pub const fn current_altitude(&self) -> u32 {
        self.current_altitude
    }

    #[must_use]
    pub const fn is_airborne(&self) -> bool {
        self.current_altitude > 0
    }

    /// Climb or descend to `altitude`; anything above the ceiling is refused.
    pub fn fly(&mut self, altitude: u32) -> HeroEvent {
        if altitude <= self.max_altitude {
            self.current_altitude = altitude;
            log::debug!("{} now flying at {altitude} feet", self.base.name());
            HeroEvent::Flew {
                name: self.base.name().to_string(),
                altitude,
            }
        } else {
            HeroEvent::CeilingExceeded {
                name: self.base.name().to_string(),
                max_altitude: self.max_altitude,
            }
        }
    }

    pub fn land(&mut self) -> HeroEvent {
        self.current_altitude = 0;
        log::debug!("{} landed", self.base.name());
        HeroEvent::Landed {
            name: self.base.name().to_string(),
        }
    }
}

impl Hero for FlyingSuperhero {
    fn base(&self) -> &Superhero {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Superhero {
        &mut self.base
    }

    // Positional: every index before the last goes to the base record, and
    // the last slot is expected to hold the flight power.
    fn use_power(&self, index: usize) -> HeroEvent {
        let powers = self.base.powers();
        if index < powers.len().saturating_sub(1) {
            return self.base.use_power(index);
        }
        match powers.get(index) {
            Some(power) if power == FLIGHT_POWER => HeroEvent::AlreadyFlying {
                name: self.base.name().to_string(),
                altitude: self.current_altitude,
            },
            _ => HeroEvent::MissingPower {
                name: self.base.name().to_string(),
            },
        }
    }
}
