//! Foreign container adapter

use std::collections::{LinkedList, VecDeque};

use kitchen_cursor::appliance::{ApplianceKind, BoxAppliance};
use kitchen_cursor::cursor::{Cursor, CursorExt, Filter, ForeignCursor};
use kitchen_cursor::driver::collect_visits;

mod common;
use common::{drain, tagged, tags};

fn foreign_list() -> LinkedList<BoxAppliance> {
    [
        (ApplianceKind::Blender, "Philips"),
        (ApplianceKind::Microwave, "Samsung"),
        (ApplianceKind::CoffeeMachine, "DeLonghi"),
        (ApplianceKind::Blender, "Bosch"),
    ]
    .into_iter()
    .map(|(kind, tag)| tagged(kind, tag))
    .collect()
}

#[test]
fn adapter_reproduces_native_order() {
    let list = foreign_list();
    let native = tags(list.iter());
    let mut cursor = ForeignCursor::new(&list);
    assert_eq!(tags(drain(&mut cursor)), native);
    assert_eq!(native, vec!["Philips", "Samsung", "DeLonghi", "Bosch"]);
}

#[test]
fn adapter_composes_with_decorators() {
    let list = foreign_list();
    let mut blenders = Filter::kind(ForeignCursor::new(&list), ApplianceKind::Blender).counting();
    assert_eq!(tags(drain(&mut blenders)), vec!["Philips", "Bosch"]);
    assert_eq!(blenders.count_seen(), 1);
}

#[test]
fn adapter_feeds_the_driver() {
    let list = foreign_list();
    let visits = collect_visits(&mut ForeignCursor::new(&list));
    assert_eq!(visits.len(), 4);
    assert_eq!(visits[2].turned_on, "Coffee machine is on. Brewing whole-bean coffee at 15 bar.");
}

#[test]
fn adapter_over_deque_of_values() {
    let deque: VecDeque<u16> = (10..14).collect();
    let adapted: Vec<u16> = ForeignCursor::new(&deque).walk().copied().collect();
    let native: Vec<u16> = deque.iter().copied().collect();
    assert_eq!(adapted, native);

    let mut cursor = ForeignCursor::new(&deque);
    assert_eq!(cursor.container().len(), 4);
    cursor.first();
    cursor.advance();
    assert_eq!(cursor.current(), Some(&11));
}
