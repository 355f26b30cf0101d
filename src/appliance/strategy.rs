//! Start strategies
//!
//! An appliance with a strategy installed delegates its activation
//! narration to it instead of its model default.

use std::fmt;
use std::str::FromStr;

use crate::KitchenError;

/// Activation behavior pluggable into any appliance.
pub trait StartStrategy: fmt::Debug {
    /// Narrate starting the appliance called `name`.
    fn turn_on(&self, name: &str) -> String;
}

/// Regular start.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalStart;

impl StartStrategy for NormalStart {
    fn turn_on(&self, name: &str) -> String {
        format!("{name} is on in normal mode.")
    }
}

/// Energy-saving start.
#[derive(Debug, Clone, Copy, Default)]
pub struct EcoStart;

impl StartStrategy for EcoStart {
    fn turn_on(&self, name: &str) -> String {
        format!("{name} is on in energy-saving mode.")
    }
}

/// Start with preheating.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreheatStart;

impl StartStrategy for PreheatStart {
    fn turn_on(&self, name: &str) -> String {
        format!("{name} is on with preheating.")
    }
}

/// Named start strategy, parseable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum StartMode {
    /// [`NormalStart`]
    Normal,
    /// [`EcoStart`]
    Eco,
    /// [`PreheatStart`]
    Preheat,
}

impl StartMode {
    /// All modes, in factory order.
    pub const ALL: [StartMode; 3] = [StartMode::Normal, StartMode::Eco, StartMode::Preheat];

    /// Instantiate the strategy.
    pub fn strategy(self) -> Box<dyn StartStrategy> {
        match self {
            StartMode::Normal => Box::new(NormalStart),
            StartMode::Eco => Box::new(EcoStart),
            StartMode::Preheat => Box::new(PreheatStart),
        }
    }
}

impl fmt::Display for StartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StartMode::Normal => "normal",
            StartMode::Eco => "eco",
            StartMode::Preheat => "preheat",
        };
        f.write_str(name)
    }
}

impl FromStr for StartMode {
    type Err = KitchenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(StartMode::Normal),
            "eco" => Ok(StartMode::Eco),
            "preheat" => Ok(StartMode::Preheat),
            _ => Err(KitchenError::UnknownStartMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip_names() {
        for mode in StartMode::ALL {
            assert_eq!(mode.to_string().parse::<StartMode>(), Ok(mode));
        }
        assert!("turbo".parse::<StartMode>().is_err());
    }

    #[test]
    fn test_strategy_text() {
        assert_eq!(
            StartMode::Eco.strategy().turn_on("Blender"),
            "Blender is on in energy-saving mode."
        );
        assert_eq!(
            PreheatStart.turn_on("Coffee machine"),
            "Coffee machine is on with preheating."
        );
    }
}
