//! Property tests for hero vitals, flight ceilings and gadget batteries.

use polyparade_core::constants::{FULL_BATTERY, GADGET_BATTERY_COST, MAX_HEALTH};
use polyparade_core::{FlyingSuperhero, Hero, HeroEvent, Superhero, TechHero};
use proptest::prelude::*;

fn powers_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,12}", 0..6)
}

/// Put a fresh hero at an arbitrary health by damaging from full.
fn hero_at(health: i32) -> Superhero {
    let mut hero = Superhero::new("Probe", "Jane Doe", vec!["x-ray".to_string()], "Lab");
    hero.take_damage(MAX_HEALTH - health);
    hero
}

proptest! {
    #[test]
    fn prop_damage_subtracts_and_flags_defeat(
        start in -200i32..=100,
        damage in 0i32..500,
    ) {
        let mut hero = hero_at(start);
        prop_assert_eq!(hero.health(), start);
        let event = hero.take_damage(damage);
        prop_assert_eq!(hero.health(), start - damage);
        let defeated = matches!(event, HeroEvent::Defeated { .. });
        prop_assert_eq!(defeated, start - damage <= 0);
    }

    #[test]
    fn prop_heal_caps_at_max_health(
        start in -200i32..=100,
        amount in 0i32..500,
    ) {
        let mut hero = hero_at(start);
        hero.heal(amount);
        prop_assert_eq!(hero.health(), (start + amount).min(MAX_HEALTH));
    }

    #[test]
    fn prop_use_power_fails_only_out_of_range(
        powers in powers_strategy(),
        index in 0usize..10,
    ) {
        let hero = Superhero::new("Probe", "Jane Doe", powers.clone(), "Lab");
        let missing = matches!(hero.use_power(index), HeroEvent::MissingPower { .. });
        prop_assert_eq!(missing, index >= powers.len());
    }

    #[test]
    fn prop_flying_powers_end_with_flight(powers in powers_strategy()) {
        let hero = FlyingSuperhero::new("Probe", "Jane Doe", powers.clone(), "Lab", 1_000);
        let mut expected = powers.clone();
        expected.push("flight".to_string());
        prop_assert_eq!(hero.base().powers(), expected.as_slice());
        let is_flight_report = matches!(
            hero.use_power(powers.len()),
            HeroEvent::AlreadyFlying { altitude: 0, .. }
        );
        prop_assert!(is_flight_report);
    }

    #[test]
    fn prop_fly_changes_state_only_under_the_ceiling(
        ceiling in 0u32..100_000,
        first in 0u32..100_000,
        second in 0u32..200_000,
    ) {
        let mut hero = FlyingSuperhero::new("Probe", "Jane Doe", Vec::new(), "Lab", ceiling);
        hero.fly(first);
        let before = hero.current_altitude();
        prop_assert_eq!(before, if first <= ceiling { first } else { 0 });

        let event = hero.fly(second);
        if second <= ceiling {
            prop_assert_eq!(hero.current_altitude(), second);
            prop_assert!(matches!(event, HeroEvent::Flew { .. }), "expected a flight event");
        } else {
            prop_assert_eq!(hero.current_altitude(), before);
            prop_assert!(event.is_soft_error());
        }
    }

    #[test]
    fn prop_gadgets_drain_only_in_range(
        gadgets in powers_strategy(),
        indices in prop::collection::vec(0usize..8, 0..20),
    ) {
        let mut hero = TechHero::new("Probe", "Jane Doe", Vec::new(), "Lab", gadgets.clone());
        let mut expected = FULL_BATTERY;
        for index in indices {
            hero.use_gadget(index);
            if index < gadgets.len() {
                expected -= GADGET_BATTERY_COST;
            }
            prop_assert_eq!(hero.battery_level(), expected);
        }
        hero.recharge();
        prop_assert_eq!(hero.battery_level(), FULL_BATTERY);
    }
}
