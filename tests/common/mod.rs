//! Shared helpers for integration tests

#![allow(dead_code)]

use kitchen_cursor::appliance::{Appliance, ApplianceKind, BoxAppliance, Blender, CoffeeMachine, Microwave};
use kitchen_cursor::cursor::Cursor;

/// Drive `cursor` by hand through the raw contract, collecting every item.
pub fn drain<C: Cursor + ?Sized>(cursor: &mut C) -> Vec<C::Item> {
    let mut seen = Vec::new();
    cursor.first();
    while !cursor.is_done() {
        if let Some(item) = cursor.current() {
            seen.push(item);
        }
        cursor.advance();
    }
    seen
}

/// Appliance of `kind` whose manufacturer field carries `tag`.
pub fn tagged(kind: ApplianceKind, tag: &str) -> BoxAppliance {
    match kind {
        ApplianceKind::Blender => Box::new(Blender::new(tag, 600, "Plastic", 5, 1.5)),
        ApplianceKind::Microwave => Box::new(Microwave::new(tag, 1000, "Metal", 20.0, true)),
        ApplianceKind::CoffeeMachine => {
            Box::new(CoffeeMachine::new(tag, 1200, "Steel", "whole-bean", 15))
        }
    }
}

/// Manufacturer tags of the given appliances.
pub fn tags<'a, I, A>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a A>,
    A: Appliance + ?Sized + 'a,
{
    items
        .into_iter()
        .map(|appliance| appliance.spec().manufacturer.clone())
        .collect()
}
