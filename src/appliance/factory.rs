//! Random appliance creation

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{ApplianceKind, BoxAppliance, Blender, CoffeeMachine, Microwave, StartMode};
use crate::collection::Collection;

/// Build the factory preset for `kind`.
pub fn preset(kind: ApplianceKind) -> BoxAppliance {
    match kind {
        ApplianceKind::Blender => Box::new(Blender::new("Philips", 600, "Plastic", 5, 1.5)),
        ApplianceKind::Microwave => Box::new(Microwave::new("Samsung", 1000, "Metal", 20.0, true)),
        ApplianceKind::CoffeeMachine => Box::new(CoffeeMachine::new(
            "DeLonghi",
            1200,
            "Steel",
            "whole-bean",
            15,
        )),
    }
}

/// Creates random presets and start modes from a pluggable RNG.
#[derive(Debug)]
pub struct ApplianceFactory<R = StdRng> {
    rng: R,
}

impl ApplianceFactory<StdRng> {
    /// Factory seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible factory.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ApplianceFactory<R> {
    /// Wrap an existing RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniformly chosen kind.
    pub fn random_kind(&mut self) -> ApplianceKind {
        ApplianceKind::ALL[self.rng.gen_range(0..ApplianceKind::ALL.len())]
    }

    /// Preset of a uniformly chosen kind.
    pub fn random_appliance(&mut self) -> BoxAppliance {
        let kind = self.random_kind();
        debug!(%kind, "factory created appliance");
        preset(kind)
    }

    /// Uniformly chosen start mode.
    pub fn random_start_mode(&mut self) -> StartMode {
        *StartMode::ALL
            .choose(&mut self.rng)
            .unwrap_or(&StartMode::Normal)
    }

    /// Append `count` random appliances to `collection`.
    pub fn populate<C>(&mut self, collection: &mut C, count: usize)
    where
        C: Collection<BoxAppliance> + ?Sized,
    {
        for _ in 0..count {
            let appliance = self.random_appliance();
            collection.add(appliance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appliance::Appliance;
    use crate::collection::VecCollection;

    #[test]
    fn test_seeded_factory_is_reproducible() {
        let kinds = |seed| {
            let mut factory = ApplianceFactory::seeded(seed);
            (0..32).map(|_| factory.random_kind()).collect::<Vec<_>>()
        };
        assert_eq!(kinds(7), kinds(7));
    }

    #[test]
    fn test_populate_appends() {
        let mut factory = ApplianceFactory::seeded(1);
        let mut kitchen: VecCollection<BoxAppliance> = VecCollection::new();
        factory.populate(&mut kitchen, 12);
        assert_eq!(kitchen.count(), 12);
        assert!(kitchen.as_slice().iter().all(|a| ApplianceKind::ALL.contains(&a.kind())));
    }

    #[test]
    fn test_presets_match_kind() {
        for kind in ApplianceKind::ALL {
            assert_eq!(preset(kind).kind(), kind);
        }
    }
}
