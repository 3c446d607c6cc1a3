use serde::Serialize;
use smallvec::{SmallVec, smallvec};

use super::{Hero, HeroEvent, Superhero};
use crate::constants::{FULL_BATTERY, GADGET_BATTERY_COST};

/// Events from a single gadget use: the use itself plus an optional warning.
pub type GadgetEvents = SmallVec<[HeroEvent; 2]>;

/// A hero who relies on battery-powered gadgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechHero {
    #[serde(flatten)]
    base: Superhero,
    gadgets: Vec<String>,
    battery_level: i32,
}

impl TechHero {
    pub fn new(
        name: impl Into<String>,
        secret_identity: impl Into<String>,
        powers: Vec<String>,
        base_of_operations: impl Into<String>,
        gadgets: Vec<String>,
    ) -> Self {
        Self {
            base: Superhero::new(name, secret_identity, powers, base_of_operations),
            gadgets,
            battery_level: FULL_BATTERY,
        }
    }

    #[must_use]
    pub fn gadgets(&self) -> &[String] {
        &self.gadgets
    }

    #[must_use]
    pub const fn battery_level(&self) -> i32 {
        self.battery_level
    }

    /// Use the gadget at `index`, draining [`GADGET_BATTERY_COST`].
    ///
    /// A depleted battery only produces a warning; the gadget still fires
    /// and the level keeps dropping below zero on further use.
    pub fn use_gadget(&mut self, index: usize) -> GadgetEvents {
        let name = self.base.name().to_string();
        let Some(gadget) = self.gadgets.get(index) else {
            return smallvec![HeroEvent::MissingGadget { name }];
        };

        self.battery_level = self.battery_level.saturating_sub(GADGET_BATTERY_COST);
        log::debug!("{name} used {gadget}, battery at {}%", self.battery_level);

        let mut events: GadgetEvents = smallvec![HeroEvent::UsedGadget {
            name: name.clone(),
            gadget: gadget.clone(),
            battery: self.battery_level,
        }];
        if self.battery_level <= 0 {
            log::warn!("{name} has drained the gadget battery");
            events.push(HeroEvent::PowerDepleted);
        }
        events
    }

    pub fn recharge(&mut self) -> HeroEvent {
        self.battery_level = FULL_BATTERY;
        log::debug!("{} recharged", self.base.name());
        HeroEvent::Recharged {
            name: self.base.name().to_string(),
        }
    }
}

impl Hero for TechHero {
    fn base(&self) -> &Superhero {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Superhero {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batman() -> TechHero {
        TechHero::new(
            "Batman",
            "Bruce Wayne",
            vec!["martial arts".to_string(), "detective skills".to_string()],
            "Batcave",
            vec![
                "batarang".to_string(),
                "grappling gun".to_string(),
                "smoke pellets".to_string(),
            ],
        )
    }

    #[test]
    fn gadget_use_drains_battery() {
        let mut hero = batman();
        let events = hero.use_gadget(0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].to_string(), "Batman uses batarang! Battery: 90%");
        let events = hero.use_gadget(1);
        assert_eq!(events[0].to_string(), "Batman uses grappling gun! Battery: 80%");
        assert_eq!(hero.battery_level(), 80);
    }

    #[test]
    fn missing_gadget_leaves_battery_alone() {
        let mut hero = batman();
        let events = hero.use_gadget(3);
        assert_eq!(events.as_slice(), [HeroEvent::MissingGadget {
            name: "Batman".to_string()
        }]);
        assert_eq!(hero.battery_level(), FULL_BATTERY);
    }

    #[test]
    fn depletion_warns_without_locking_out() {
        let mut hero = batman();
        for _ in 0..9 {
            let events = hero.use_gadget(2);
            assert_eq!(events.len(), 1);
        }
        let events = hero.use_gadget(2);
        assert_eq!(hero.battery_level(), 0);
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1].to_string(),
            "Warning: Power depleted! Gadgets unavailable."
        );

        let events = hero.use_gadget(0);
        assert_eq!(hero.battery_level(), -10);
        assert!(matches!(events[0], HeroEvent::UsedGadget { battery: -10, .. }));
        assert_eq!(events[1], HeroEvent::PowerDepleted);
    }

    #[test]
    fn recharge_restores_full_battery() {
        let mut hero = batman();
        for _ in 0..12 {
            hero.use_gadget(0);
        }
        assert_eq!(
            hero.recharge().to_string(),
            "Batman's tech has been fully recharged!"
        );
        assert_eq!(hero.battery_level(), FULL_BATTERY);
    }

    #[test]
    fn base_power_rules_apply() {
        let hero = batman();
        assert_eq!(hero.use_power(0).to_string(), "Batman uses martial arts!");
        assert!(matches!(hero.use_power(2), HeroEvent::MissingPower { .. }));
    }
}
