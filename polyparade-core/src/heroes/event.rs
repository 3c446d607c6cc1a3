use serde::Serialize;
use std::fmt;

/// Everything a hero operation can report.
///
/// Soft failures (a missing power or gadget, an altitude above the ceiling)
/// are ordinary events rather than errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeroEvent {
    Introduced { name: String, powers: Vec<String> },
    UsedPower { name: String, power: String },
    MissingPower { name: String },
    Damaged { name: String, amount: i32, health: i32 },
    Defeated { name: String },
    Healed { name: String, amount: i32, health: i32 },
    SecretRevealed { name: String, identity: String },
    Flew { name: String, altitude: u32 },
    CeilingExceeded { name: String, max_altitude: u32 },
    Landed { name: String },
    AlreadyFlying { name: String, altitude: u32 },
    UsedGadget { name: String, gadget: String, battery: i32 },
    PowerDepleted,
    MissingGadget { name: String },
    Recharged { name: String },
}

impl HeroEvent {
    #[must_use]
    pub const fn is_soft_error(&self) -> bool {
        matches!(
            self,
            Self::MissingPower { .. } | Self::MissingGadget { .. } | Self::CeilingExceeded { .. }
        )
    }
}

impl fmt::Display for HeroEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Introduced { name, powers } => {
                write!(f, "I am {name}! My powers include: {}.", powers.join(", "))
            }
            Self::UsedPower { name, power } => write!(f, "{name} uses {power}!"),
            Self::MissingPower { name } => write!(f, "{name} doesn't have that power!"),
            Self::Damaged {
                name,
                amount,
                health,
            } => write!(f, "{name} takes {amount} damage. Health: {health}"),
            Self::Defeated { name } => write!(f, "{name} has been defeated!"),
            Self::Healed {
                name,
                amount,
                health,
            } => write!(f, "{name} heals {amount}. Health: {health}"),
            Self::SecretRevealed { name, identity } => {
                write!(f, "{name}'s secret identity is {identity}!")
            }
            Self::Flew { name, altitude } => write!(f, "{name} flies to {altitude} feet!"),
            Self::CeilingExceeded { name, max_altitude } => write!(
                f,
                "{name} can't fly that high! Max altitude is {max_altitude} feet."
            ),
            Self::Landed { name } => write!(f, "{name} lands safely."),
            Self::AlreadyFlying { name, altitude } => {
                write!(f, "{name} is already flying at {altitude} feet!")
            }
            Self::UsedGadget {
                name,
                gadget,
                battery,
            } => write!(f, "{name} uses {gadget}! Battery: {battery}%"),
            Self::PowerDepleted => f.write_str("Warning: Power depleted! Gadgets unavailable."),
            Self::MissingGadget { name } => write!(f, "{name} doesn't have that gadget!"),
            Self::Recharged { name } => write!(f, "{name}'s tech has been fully recharged!"),
        }
    }
}
