//! Traversal driver
//!
//! The only place that couples cursors to the appliance capability set.
//! It is blind to concrete appliance models and concrete cursor types.

use std::collections::LinkedList;

use tracing::{debug, info};

use crate::appliance::{showcase, Appliance, ApplianceFactory, BoxAppliance};
use crate::collection::{ArrayCollection, Collection, VecCollection};
use crate::config::{Backend, Decoration, TraversalConfig};
use crate::cursor::{BoxCursor, Counting, Cursor, CursorExt, Filter, ForeignCursor, Tally};
use crate::KitchenError;

/// Narration produced for one visited appliance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Visit {
    /// Zero-based visit number
    pub ordinal: usize,
    /// `describe()` output
    pub description: String,
    /// `turn_on()` output
    pub turned_on: String,
    /// `turn_off()` output
    pub turned_off: String,
}

/// Drive `cursor` from the start, narrating every non-sentinel item.
///
/// For each item `describe`, `turn_on` and `turn_off` are invoked in that
/// order and handed to `on_visit`. Returns the number of items visited.
pub fn visit_all<'a, C, A, F>(cursor: &mut C, mut on_visit: F) -> usize
where
    C: Cursor<Item = &'a A> + ?Sized,
    A: Appliance + ?Sized + 'a,
    F: FnMut(Visit),
{
    let mut visited = 0;
    cursor.first();
    while !cursor.is_done() {
        if let Some(appliance) = cursor.current() {
            let description = appliance.describe();
            let turned_on = appliance.turn_on();
            let turned_off = appliance.turn_off();
            debug!(ordinal = visited, name = appliance.name(), "visiting appliance");
            on_visit(Visit {
                ordinal: visited,
                description,
                turned_on,
                turned_off,
            });
            visited += 1;
        }
        cursor.advance();
    }
    visited
}

/// [`visit_all`], collecting the visits.
pub fn collect_visits<'a, C, A>(cursor: &mut C) -> Vec<Visit>
where
    C: Cursor<Item = &'a A> + ?Sized,
    A: Appliance + ?Sized + 'a,
{
    let mut visits = Vec::new();
    visit_all(cursor, |visit| visits.push(visit));
    visits
}

/// Stack `decorations` on `cursor`, innermost first.
///
/// Returns the chain plus one [`Tally`] per counting layer, in order.
pub fn decorate<'a, A>(
    cursor: BoxCursor<'a, &'a A>,
    decorations: &[Decoration],
) -> (BoxCursor<'a, &'a A>, Vec<Tally>)
where
    A: Appliance + ?Sized + 'a,
{
    let mut tallies = Vec::new();
    let chain = decorations
        .iter()
        .fold(cursor, |chain, decoration| match decoration {
            Decoration::Count => {
                let counting = Counting::new(chain);
                tallies.push(counting.tally());
                counting.boxed()
            }
            Decoration::Skip => chain.skipping().boxed(),
            Decoration::Kind(kind) => Filter::kind(chain, *kind).boxed(),
        });
    (chain, tallies)
}

/// Outcome of [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalReport {
    /// Visits in traversal order
    pub visits: Vec<Visit>,
    /// Final value of each counting layer, innermost first
    pub counts: Vec<usize>,
}

/// Build the configured collection and cursor chain, then visit everything.
pub fn run(config: &TraversalConfig) -> Result<TraversalReport, KitchenError> {
    config.validate()?;

    let appliances: Vec<BoxAppliance> = match config.items {
        None => showcase(),
        Some(items) => {
            let mut factory = match config.seed {
                Some(seed) => ApplianceFactory::seeded(seed),
                None => ApplianceFactory::from_entropy(),
            };
            let mut generated = VecCollection::new();
            factory.populate(&mut generated, items);
            generated.into_vec()
        }
    };
    info!(
        backend = %config.backend,
        items = appliances.len(),
        layers = config.decorations.len(),
        "starting traversal"
    );

    let report = match config.backend {
        Backend::Array => {
            let collection: ArrayCollection<BoxAppliance> = appliances.into_iter().collect();
            traverse(collection.make_cursor(), &config.decorations)
        }
        Backend::Vec => {
            let collection: VecCollection<BoxAppliance> = appliances.into_iter().collect();
            traverse(collection.make_cursor(), &config.decorations)
        }
        Backend::List => {
            let foreign: LinkedList<BoxAppliance> = appliances.into_iter().collect();
            traverse(ForeignCursor::new(&foreign).boxed(), &config.decorations)
        }
    };
    Ok(report)
}

fn traverse<'a, A>(cursor: BoxCursor<'a, &'a A>, decorations: &[Decoration]) -> TraversalReport
where
    A: Appliance + ?Sized + 'a,
{
    let (mut chain, tallies) = decorate(cursor, decorations);
    let visits = collect_visits(&mut chain);
    TraversalReport {
        visits,
        counts: tallies.iter().map(Tally::get).collect(),
    }
}
