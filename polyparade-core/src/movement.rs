//! Movement model: two category roots with closed sets of variants.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::NO_MOVEMENT_PLACEHOLDER;

/// Capability shared by everything that can take part in a movement demo.
pub trait Movable {
    /// Name of the concrete variant, e.g. `"Dog"`.
    fn variant_name(&self) -> &'static str;

    /// Description of how the entity moves.
    ///
    /// The category roots only declare this operation, so the provided
    /// implementation has nothing to say.
    fn movement(&self) -> Option<&'static str> {
        None
    }
}

/// The two category roots. They are never given a description of their own.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Animal,
    Vehicle,
}

impl Movable for Category {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::Animal => "Animal",
            Self::Vehicle => "Vehicle",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Animal {
    Dog,
    Fish,
    Bird,
}

impl Animal {
    pub const ALL: [Self; 3] = [Self::Dog, Self::Fish, Self::Bird];

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Dog => "Running 🐕",
            Self::Fish => "Swimming 🐟",
            Self::Bird => "Flying 🐦",
        }
    }
}

impl Movable for Animal {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::Dog => "Dog",
            Self::Fish => "Fish",
            Self::Bird => "Bird",
        }
    }

    fn movement(&self) -> Option<&'static str> {
        Some(self.description())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vehicle {
    Car,
    Bicycle,
    Plane,
    Boat,
}

impl Vehicle {
    pub const ALL: [Self; 4] = [Self::Car, Self::Bicycle, Self::Plane, Self::Boat];

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Car => "Driving 🚗",
            Self::Bicycle => "Pedaling 🚲",
            Self::Plane => "Flying ✈️",
            Self::Boat => "Sailing ⛵",
        }
    }
}

impl Movable for Vehicle {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Bicycle => "Bicycle",
            Self::Plane => "Plane",
            Self::Boat => "Boat",
        }
    }

    fn movement(&self) -> Option<&'static str> {
        Some(self.description())
    }
}

/// Closed carrier for mixing animals and vehicles in one collection.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Mover {
    Animal(Animal),
    Vehicle(Vehicle),
}

impl Mover {
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Animal(_) => Category::Animal,
            Self::Vehicle(_) => Category::Vehicle,
        }
    }
}

impl From<Animal> for Mover {
    fn from(animal: Animal) -> Self {
        Self::Animal(animal)
    }
}

impl From<Vehicle> for Mover {
    fn from(vehicle: Vehicle) -> Self {
        Self::Vehicle(vehicle)
    }
}

impl Movable for Mover {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::Animal(animal) => animal.variant_name(),
            Self::Vehicle(vehicle) => vehicle.variant_name(),
        }
    }

    fn movement(&self) -> Option<&'static str> {
        match self {
            Self::Animal(animal) => animal.movement(),
            Self::Vehicle(vehicle) => vehicle.movement(),
        }
    }
}

impl<M: Movable + ?Sized> Movable for &M {
    fn variant_name(&self) -> &'static str {
        (**self).variant_name()
    }

    fn movement(&self) -> Option<&'static str> {
        (**self).movement()
    }
}

/// One rendered line of a movement demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovementLine {
    pub variant: &'static str,
    pub description: Option<&'static str>,
}

impl fmt::Display for MovementLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = self.description.unwrap_or(NO_MOVEMENT_PLACEHOLDER);
        write!(f, "{}: {description}", self.variant)
    }
}

/// Produce one line per entity, in input order.
pub fn demonstrate_movement<I>(objects: I) -> Vec<MovementLine>
where
    I: IntoIterator,
    I::Item: Movable,
{
    objects
        .into_iter()
        .map(|object| MovementLine {
            variant: object.variant_name(),
            description: object.movement(),
        })
        .collect()
}
