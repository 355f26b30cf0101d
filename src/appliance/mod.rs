//! Kitchen appliances
//!
//! The item side of the object model. Traversal code only relies on the
//! capability set exposed by [`Appliance`]: describe, turn on, turn off,
//! plus a [`ApplianceKind`] tag used by kind filters.

mod factory;
mod models;
mod strategy;

pub use factory::{preset, ApplianceFactory};
pub use models::{Blender, CoffeeMachine, Microwave};
pub use strategy::{EcoStart, NormalStart, PreheatStart, StartMode, StartStrategy};

use std::fmt;
use std::str::FromStr;

use crate::KitchenError;

/// Concrete appliance family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum ApplianceKind {
    /// Countertop blender
    Blender,
    /// Microwave oven
    Microwave,
    /// Espresso/coffee machine
    CoffeeMachine,
}

impl ApplianceKind {
    /// All kinds, in factory order.
    pub const ALL: [ApplianceKind; 3] = [
        ApplianceKind::Blender,
        ApplianceKind::Microwave,
        ApplianceKind::CoffeeMachine,
    ];

    /// Display name used in narration.
    pub fn label(self) -> &'static str {
        match self {
            ApplianceKind::Blender => "Blender",
            ApplianceKind::Microwave => "Microwave",
            ApplianceKind::CoffeeMachine => "Coffee machine",
        }
    }
}

impl fmt::Display for ApplianceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ApplianceKind {
    type Err = KitchenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "blender" => Ok(ApplianceKind::Blender),
            "microwave" => Ok(ApplianceKind::Microwave),
            "coffeemachine" | "coffee" => Ok(ApplianceKind::CoffeeMachine),
            _ => Err(KitchenError::UnknownKind(s.to_string())),
        }
    }
}

/// Attributes shared by every appliance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Spec {
    /// Display name (the kind label by default)
    pub name: String,
    /// Rated power in watts
    pub power_watts: u32,
    /// Brand
    pub manufacturer: String,
    /// Housing material
    pub material: String,
}

impl Spec {
    /// Build a spec named after `kind`.
    pub fn new(
        kind: ApplianceKind,
        power_watts: u32,
        manufacturer: impl Into<String>,
        material: impl Into<String>,
    ) -> Self {
        Self {
            name: kind.label().to_string(),
            power_watts,
            manufacturer: manufacturer.into(),
            material: material.into(),
        }
    }

    /// Lines common to every description.
    pub fn describe(&self) -> String {
        format!(
            "Name: {}\nPower: {} W\nManufacturer: {}\nHousing material: {}",
            self.name, self.power_watts, self.manufacturer, self.material
        )
    }
}

/// Capability set of a traversable item.
pub trait Appliance: fmt::Debug {
    /// Shared attributes.
    fn spec(&self) -> &Spec;

    /// Appliance family.
    fn kind(&self) -> ApplianceKind;

    /// Activation narration.
    fn turn_on(&self) -> String;

    /// Full description: shared attributes then model-specific ones.
    fn describe(&self) -> String;

    /// Install the strategy used by [`Appliance::turn_on`].
    fn set_start_mode(&mut self, mode: StartMode);

    /// Display name.
    fn name(&self) -> &str {
        &self.spec().name
    }

    /// Deactivation narration.
    fn turn_off(&self) -> String {
        format!("{} is off.", self.name())
    }

    /// Template method: turn on, describe, turn off.
    fn use_appliance(&self) -> Vec<String> {
        vec![self.turn_on(), self.describe(), self.turn_off()]
    }
}

impl<A: Appliance + ?Sized> Appliance for Box<A> {
    fn spec(&self) -> &Spec {
        (**self).spec()
    }

    fn kind(&self) -> ApplianceKind {
        (**self).kind()
    }

    fn turn_on(&self) -> String {
        (**self).turn_on()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn set_start_mode(&mut self, mode: StartMode) {
        (**self).set_start_mode(mode)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn turn_off(&self) -> String {
        (**self).turn_off()
    }

    fn use_appliance(&self) -> Vec<String> {
        (**self).use_appliance()
    }
}

/// Owned, type-erased appliance as stored in collections.
pub type BoxAppliance = Box<dyn Appliance>;

/// The five-appliance lineup narrated by the demo.
pub fn showcase() -> Vec<BoxAppliance> {
    vec![
        Box::new(Blender::new("Philips", 600, "Plastic", 5, 1.5)),
        Box::new(Microwave::new("Samsung", 1000, "Metal", 20.0, true)),
        Box::new(CoffeeMachine::new("DeLonghi", 1200, "Steel", "whole-bean", 15)),
        Box::new(Blender::new("Bosch", 700, "Steel", 3, 2.0)),
        Box::new(Microwave::new("LG", 900, "Plastic", 25.0, false)),
    ]
}
