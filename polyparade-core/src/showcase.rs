//! Scripted demonstrations run against a roster.
//!
//! Each showcase returns titled sections of rendered lines; printing them is
//! left to the caller.
use serde::Serialize;

use crate::constants::{SHOWCASE_ALTITUDE, SHOWCASE_DAMAGE};
use crate::heroes::{AnyHero, Hero};
use crate::movement::demonstrate_movement;
use crate::roster::{MoverRoster, Roster};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    fn push(&mut self, line: impl ToString) {
        self.lines.push(line.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Transcript {
    pub sections: Vec<Section>,
}

impl Transcript {
    pub fn extend(&mut self, sections: impl IntoIterator<Item = Section>) {
        self.sections.extend(sections);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowcaseKind {
    Movement,
    Heroes,
}

impl ShowcaseKind {
    pub const ALL: [Self; 2] = [Self::Movement, Self::Heroes];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Movement => "movement",
            Self::Heroes => "heroes",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Movement => "Animals and vehicles moving through one shared capability",
            Self::Heroes => "Superheroes using powers, taking damage, flying and draining gadgets",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

pub fn movement_showcase(movers: &MoverRoster) -> Vec<Section> {
    let mut animals = Section::new("Animals in motion:");
    for line in demonstrate_movement(&movers.animals) {
        animals.push(line);
    }
    let mut vehicles = Section::new("Vehicles in motion:");
    for line in demonstrate_movement(&movers.vehicles) {
        vehicles.push(line);
    }
    vec![animals, vehicles]
}

/// Run the hero script. Sections with nothing to show are left out.
pub fn hero_showcase(heroes: &mut [AnyHero]) -> Vec<Section> {
    let mut action = Section::new("Heroes in action");
    for hero in heroes.iter_mut() {
        action.push(hero.introduce());
        action.push(hero.use_power(0));
        action.push(hero.take_damage(SHOWCASE_DAMAGE));
        action.push("");
    }

    let mut flight = Section::new("Flight drills");
    for hero in heroes.iter_mut().filter_map(AnyHero::as_flying_mut) {
        flight.push(hero.fly(SHOWCASE_ALTITUDE));
        flight.push(hero.land());
    }

    let mut gadgets = Section::new("Gadget drills");
    for hero in heroes.iter_mut().filter_map(AnyHero::as_tech_mut) {
        for event in hero.use_gadget(0).into_iter().chain(hero.use_gadget(1)) {
            gadgets.push(event);
        }
        gadgets.push(hero.recharge());
    }

    let mut identities = Section::new("Secret identities");
    for hero in heroes.iter() {
        identities.push(hero.reveal_secret_identity());
    }

    [action, flight, gadgets, identities]
        .into_iter()
        .filter(|section| !section.lines.is_empty())
        .collect()
}

pub fn run_showcase(kind: ShowcaseKind, roster: &Roster) -> Vec<Section> {
    log::debug!("running {} showcase", kind.key());
    match kind {
        ShowcaseKind::Movement => movement_showcase(&roster.movers),
        ShowcaseKind::Heroes => {
            let mut heroes = roster.build_heroes();
            hero_showcase(&mut heroes)
        }
    }
}
