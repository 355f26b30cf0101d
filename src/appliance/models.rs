use super::{Appliance, ApplianceKind, Spec, StartMode, StartStrategy};

/// Blender with a number of speed levels and a cup volume.
#[derive(Debug)]
pub struct Blender {
    spec: Spec,
    speed_levels: u32,
    cup_volume_liters: f64,
    strategy: Option<Box<dyn StartStrategy>>,
}

impl Blender {
    /// Create a blender without a start strategy.
    pub fn new(
        manufacturer: impl Into<String>,
        power_watts: u32,
        material: impl Into<String>,
        speed_levels: u32,
        cup_volume_liters: f64,
    ) -> Self {
        Self {
            spec: Spec::new(ApplianceKind::Blender, power_watts, manufacturer, material),
            speed_levels,
            cup_volume_liters,
            strategy: None,
        }
    }
}

impl Appliance for Blender {
    fn spec(&self) -> &Spec {
        &self.spec
    }

    fn kind(&self) -> ApplianceKind {
        ApplianceKind::Blender
    }

    fn turn_on(&self) -> String {
        match &self.strategy {
            Some(strategy) => strategy.turn_on(self.name()),
            None => format!(
                "{} is on. Blades spinning at {} speeds.",
                self.name(),
                self.speed_levels
            ),
        }
    }

    fn describe(&self) -> String {
        format!(
            "{}\nSpeed levels: {}\nCup volume: {} l",
            self.spec.describe(),
            self.speed_levels,
            self.cup_volume_liters
        )
    }

    fn set_start_mode(&mut self, mode: StartMode) {
        self.strategy = Some(mode.strategy());
    }
}

/// Microwave with a chamber volume and optional grill.
#[derive(Debug)]
pub struct Microwave {
    spec: Spec,
    volume_liters: f64,
    has_grill: bool,
    strategy: Option<Box<dyn StartStrategy>>,
}

impl Microwave {
    /// Create a microwave without a start strategy.
    pub fn new(
        manufacturer: impl Into<String>,
        power_watts: u32,
        material: impl Into<String>,
        volume_liters: f64,
        has_grill: bool,
    ) -> Self {
        Self {
            spec: Spec::new(ApplianceKind::Microwave, power_watts, manufacturer, material),
            volume_liters,
            has_grill,
            strategy: None,
        }
    }
}

impl Appliance for Microwave {
    fn spec(&self) -> &Spec {
        &self.spec
    }

    fn kind(&self) -> ApplianceKind {
        ApplianceKind::Microwave
    }

    fn turn_on(&self) -> String {
        match &self.strategy {
            Some(strategy) => strategy.turn_on(self.name()),
            None => format!(
                "{} is on. Heating {}.",
                self.name(),
                if self.has_grill { "with grill" } else { "without grill" }
            ),
        }
    }

    fn describe(&self) -> String {
        format!(
            "{}\nChamber volume: {} l\nGrill: {}",
            self.spec.describe(),
            self.volume_liters,
            if self.has_grill { "yes" } else { "no" }
        )
    }

    fn set_start_mode(&mut self, mode: StartMode) {
        self.strategy = Some(mode.strategy());
    }
}

/// Coffee machine brewing one coffee type at a fixed pump pressure.
#[derive(Debug)]
pub struct CoffeeMachine {
    spec: Spec,
    coffee_type: String,
    pressure_bar: u32,
    strategy: Option<Box<dyn StartStrategy>>,
}

impl CoffeeMachine {
    /// Create a coffee machine without a start strategy.
    pub fn new(
        manufacturer: impl Into<String>,
        power_watts: u32,
        material: impl Into<String>,
        coffee_type: impl Into<String>,
        pressure_bar: u32,
    ) -> Self {
        Self {
            spec: Spec::new(
                ApplianceKind::CoffeeMachine,
                power_watts,
                manufacturer,
                material,
            ),
            coffee_type: coffee_type.into(),
            pressure_bar,
            strategy: None,
        }
    }
}

impl Appliance for CoffeeMachine {
    fn spec(&self) -> &Spec {
        &self.spec
    }

    fn kind(&self) -> ApplianceKind {
        ApplianceKind::CoffeeMachine
    }

    fn turn_on(&self) -> String {
        match &self.strategy {
            Some(strategy) => strategy.turn_on(self.name()),
            None => format!(
                "{} is on. Brewing {} coffee at {} bar.",
                self.name(),
                self.coffee_type,
                self.pressure_bar
            ),
        }
    }

    fn describe(&self) -> String {
        format!(
            "{}\nCoffee type: {}\nPump pressure: {} bar",
            self.spec.describe(),
            self.coffee_type,
            self.pressure_bar
        )
    }

    fn set_start_mode(&mut self, mode: StartMode) {
        self.strategy = Some(mode.strategy());
    }
}
