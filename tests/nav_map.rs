use std::collections::BTreeMap;
use std::ops::Bound;

use navigable::compare::{self, Reverse};
use navigable::{Direction, Error, NavMap, Natural};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 10_000;

/// Keys drawn from a range smaller than `TEST_SIZE` so operations collide.
fn key_strategy() -> impl Strategy<Value = i64> {
    -5_000i64..5_000i64
}

fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

fn bound_strategy() -> impl Strategy<Value = Bound<i64>> {
    prop_oneof![
        Just(Bound::Unbounded),
        key_strategy().prop_map(Bound::Included),
        key_strategy().prop_map(Bound::Excluded),
    ]
}

/// Whether `std` would panic on these bounds, which is exactly when `range` must fail.
fn is_invalid(start: Bound<i64>, end: Bound<i64>) -> bool {
    match (start, end) {
        (Bound::Excluded(s), Bound::Excluded(e)) => s >= e,
        (Bound::Included(s) | Bound::Excluded(s), Bound::Included(e) | Bound::Excluded(e)) => s > e,
        _ => false,
    }
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Insert(i64, i64),
    Remove(i64),
    Get(i64),
    ContainsKey(i64),
    GetKeyValue(i64),
    First,
    Last,
    PopFirst,
    PopLast,
    Floor(i64),
    Ceiling(i64),
    Lower(i64),
    Higher(i64),
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        6 => (key_strategy(), value_strategy()).prop_map(|(k, v)| MapOp::Insert(k, v)),
        3 => key_strategy().prop_map(MapOp::Remove),
        1 => key_strategy().prop_map(MapOp::Get),
        1 => key_strategy().prop_map(MapOp::ContainsKey),
        1 => key_strategy().prop_map(MapOp::GetKeyValue),
        1 => Just(MapOp::First),
        1 => Just(MapOp::Last),
        1 => Just(MapOp::PopFirst),
        1 => Just(MapOp::PopLast),
        1 => key_strategy().prop_map(MapOp::Floor),
        1 => key_strategy().prop_map(MapOp::Ceiling),
        1 => key_strategy().prop_map(MapOp::Lower),
        1 => key_strategy().prop_map(MapOp::Higher),
    ]
}

// ─── Model comparisons ───────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random operation sequence on both NavMap and BTreeMap and
    /// asserts identical results at every step.
    #[test]
    fn map_ops_match_btreemap(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut nav: NavMap<i64, i64> = NavMap::new();
        let mut bt: BTreeMap<i64, i64> = BTreeMap::new();

        for op in &ops {
            match op {
                MapOp::Insert(k, v) => prop_assert_eq!(nav.insert(*k, *v), bt.insert(*k, *v), "insert({})", k),
                MapOp::Remove(k) => prop_assert_eq!(nav.remove(k), bt.remove(k), "remove({})", k),
                MapOp::Get(k) => prop_assert_eq!(nav.get(k), bt.get(k), "get({})", k),
                MapOp::ContainsKey(k) => prop_assert_eq!(nav.contains_key(k), bt.contains_key(k)),
                MapOp::GetKeyValue(k) => prop_assert_eq!(nav.get_key_value(k), bt.get_key_value(k)),
                MapOp::First => prop_assert_eq!(nav.first().ok(), bt.first_key_value()),
                MapOp::Last => prop_assert_eq!(nav.last().ok(), bt.last_key_value()),
                MapOp::PopFirst => prop_assert_eq!(nav.pop_first(), bt.pop_first()),
                MapOp::PopLast => prop_assert_eq!(nav.pop_last(), bt.pop_last()),
                MapOp::Floor(k) => prop_assert_eq!(nav.floor(k), bt.range(..=k).next_back().map(|(k, _)| k)),
                MapOp::Ceiling(k) => prop_assert_eq!(nav.ceiling(k), bt.range(k..).next().map(|(k, _)| k)),
                MapOp::Lower(k) => prop_assert_eq!(nav.lower(k), bt.range(..k).next_back().map(|(k, _)| k)),
                MapOp::Higher(k) => prop_assert_eq!(
                    nav.higher(k),
                    bt.range((Bound::Excluded(k), Bound::Unbounded)).next().map(|(k, _)| k)
                ),
            }
            prop_assert_eq!(nav.len(), bt.len(), "len mismatch after {:?}", op);
        }
        prop_assert!(nav.iter().eq(bt.iter()));
    }

    /// Views built from random bounds match `BTreeMap::range` or fail exactly
    /// where it would panic.
    #[test]
    fn range_matches_btreemap(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..2_000),
        bounds in proptest::collection::vec((bound_strategy(), bound_strategy()), 50),
    ) {
        let nav: NavMap<i64, i64> = entries.iter().copied().collect();
        let bt: BTreeMap<i64, i64> = entries.iter().copied().collect();

        for (start, end) in bounds {
            match nav.range((start, end)) {
                Ok(view) => {
                    prop_assert!(!is_invalid(start, end), "{:?}..{:?} accepted", start, end);
                    prop_assert!(view.clone().eq(bt.range((start, end))));
                    prop_assert!(view.rev().eq(bt.range((start, end)).rev()));
                }
                Err(error) => {
                    prop_assert_eq!(error, Error::InvalidRange);
                    prop_assert!(is_invalid(start, end), "{:?}..{:?} rejected", start, end);
                }
            }
        }
    }

    /// Head and tail views agree with the corresponding `BTreeMap` ranges.
    #[test]
    fn head_and_tail_views_match_btreemap(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..2_000),
        probes in proptest::collection::vec((key_strategy(), any::<bool>()), 50),
    ) {
        let nav: NavMap<i64, i64> = entries.iter().copied().collect();
        let bt: BTreeMap<i64, i64> = entries.iter().copied().collect();

        for (bound, inclusive) in probes {
            let (head_end, tail_start) = if inclusive {
                (Bound::Included(bound), Bound::Included(bound))
            } else {
                (Bound::Excluded(bound), Bound::Excluded(bound))
            };
            prop_assert!(nav.head_view(&bound, inclusive).eq(bt.range((Bound::Unbounded, head_end))));
            prop_assert!(nav.tail_view(&bound, inclusive).eq(bt.range((tail_start, Bound::Unbounded))));
        }
    }

    /// A reversed map iterates the model backwards and mirrors its navigation.
    #[test]
    fn reverse_comparator_mirrors_btreemap(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..2_000),
        probes in proptest::collection::vec(key_strategy(), 50),
    ) {
        let nav: NavMap<i64, i64, Reverse<Natural>> = entries.iter().copied().collect();
        let bt: BTreeMap<i64, i64> = entries.iter().copied().collect();

        prop_assert!(nav.iter().eq(bt.iter().rev()));
        prop_assert!(nav.descending().eq(bt.iter()));
        for k in &probes {
            prop_assert_eq!(nav.floor(k), bt.range(k..).next().map(|(k, _)| k));
            prop_assert_eq!(nav.lower(k), bt.range((Bound::Excluded(k), Bound::Unbounded)).next().map(|(k, _)| k));
            prop_assert_eq!(nav.ceiling(k), bt.range(..=k).next_back().map(|(k, _)| k));
        }
    }

    /// Ascending iteration is the reverse of descending iteration.
    #[test]
    fn descending_is_reversed_ascending(entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..2_000)) {
        let nav: NavMap<i64, i64> = entries.into_iter().collect();
        let mut down: Vec<_> = nav.iter_in(Direction::Descending).collect();
        down.reverse();
        prop_assert_eq!(down, nav.iter().collect::<Vec<_>>());
        prop_assert!(nav.keys().zip(nav.keys().skip(1)).all(|(a, b)| a < b));
    }
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

fn sample() -> NavMap<i32, &'static str> {
    NavMap::from([(50, "fifty"), (20, "twenty"), (80, "eighty"), (10, "ten"), (30, "thirty")])
}

#[test]
fn navigation_scenario() {
    let map = sample();
    assert_eq!(map.first(), Ok((&10, &"ten")));
    assert_eq!(map.last(), Ok((&80, &"eighty")));
    assert_eq!(map.floor(&25), Some(&20));
    assert_eq!(map.ceiling(&25), Some(&30));
    assert_eq!(map.lower(&30), Some(&20));
    assert_eq!(map.higher(&30), Some(&50));
    assert_eq!(map.floor(&30), Some(&30));
    assert_eq!(map.floor(&5), None);
    assert_eq!(map.higher(&80), None);
}

#[test]
fn duplicate_insert_keeps_size() {
    let mut map = sample();
    assert_eq!(map.insert(20, "TWENTY"), Some("twenty"));
    assert_eq!(map.len(), 5);
    assert_eq!(map[&20], "TWENTY");
}

#[test]
fn views_scenario() {
    let map = sample();
    let keys = |view: navigable::nav_map::Range<'_, i32, &str>| view.map(|(k, _)| *k).collect::<Vec<_>>();
    assert_eq!(keys(map.head_view(&30, false)), [10, 20]);
    assert_eq!(keys(map.head_view(&30, true)), [10, 20, 30]);
    assert_eq!(keys(map.tail_view(&30, false)), [50, 80]);
    assert_eq!(keys(map.range_view(&20, &80).expect("ordered bounds")), [20, 30, 50]);
    assert_eq!(keys(map.range_view(&30, &30).expect("equal bounds")), Vec::<i32>::new());
    assert_eq!(map.range_view(&80, &20).err(), Some(Error::InvalidRange));
}

#[test]
fn empty_map_errors() {
    let map: NavMap<i32, i32> = NavMap::new();
    assert_eq!(map.first(), Err(Error::EmptyContainer));
    assert_eq!(map.last(), Err(Error::EmptyContainer));
    assert_eq!(map.first().map_err(|e| e.to_string()), Err("the collection is empty".to_owned()));
}

#[test]
fn removed_keys_are_gone() {
    let mut map = sample();
    assert_eq!(map.remove(&20), Some("twenty"));
    assert!(!map.contains_key(&20));
    assert_eq!(map.get(&20), None);
    assert_eq!(map.remove(&20), None);
    assert_eq!(map.floor(&25), Some(&10));
}

#[test]
fn collected_view_is_a_snapshot() {
    let mut map = sample();
    let snapshot: Vec<(i32, &str)> = map.tail_view(&20, true).map(|(k, v)| (*k, *v)).collect();
    map.remove(&30);
    map.insert(60, "sixty");
    assert_eq!(snapshot, [(20, "twenty"), (30, "thirty"), (50, "fifty"), (80, "eighty")]);
    assert_eq!(map.tail_view(&20, true).map(|(k, _)| *k).collect::<Vec<_>>(), [20, 50, 60, 80]);
}

#[test]
fn views_are_restartable() {
    let map = sample();
    let view = map.range(20..=50).expect("ordered bounds");
    let first_pass: Vec<_> = view.clone().collect();
    let second_pass: Vec<_> = view.collect();
    assert_eq!(first_pass, second_pass);
    assert_eq!(map.iter().count(), map.iter().count());
}

#[test]
fn string_keys_with_borrowed_lookups() {
    let mut stock: NavMap<String, u32> = NavMap::new();
    for (name, count) in [("laptop", 15), ("mouse", 50), ("keyboard", 30), ("monitor", 8)] {
        stock.insert(name.to_owned(), count);
    }
    if let Some(count) = stock.get_mut("laptop") {
        *count -= 3;
    }
    assert_eq!(stock.get("laptop"), Some(&12));
    assert_eq!(stock.ceiling("mo").map(String::as_str), Some("monitor"));
    let m_items: Vec<&str> = stock
        .range::<str, _>((Bound::Included("m"), Bound::Excluded("n")))
        .expect("ordered bounds")
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(m_items, ["monitor", "mouse"]);
}

#[test]
fn word_frequencies() {
    let text = "the quick brown fox jumps over the lazy dog the end";
    let mut counts = NavMap::new();
    for word in text.split_whitespace() {
        *counts.get_or_insert_with(word, || 0u32) += 1;
    }
    assert_eq!(counts[&"the"], 3);
    assert_eq!(counts.first(), Ok((&"brown", &1)));
    assert_eq!(counts.len(), 9);
}

#[test]
fn by_key_comparator_orders_records() {
    #[derive(Clone, Debug, PartialEq)]
    struct Student {
        name: &'static str,
        grade: u8,
    }

    let mut roster = NavMap::with_comparator(compare::by_key(|s: &Student| s.grade));
    roster.insert(Student { name: "Ana", grade: 85 }, "B");
    roster.insert(Student { name: "Luis", grade: 92 }, "A");
    roster.insert(Student { name: "Eva", grade: 78 }, "C");

    let names: Vec<_> = roster.keys().map(|s| s.name).collect();
    assert_eq!(names, ["Eva", "Ana", "Luis"]);
    let probe = Student { name: "", grade: 90 };
    assert_eq!(roster.ceiling(&probe).map(|s| s.name), Some("Luis"));
}

#[test]
fn owned_iteration_and_equality() {
    let map = sample();
    let copy = map.clone();
    assert_eq!(map, copy);
    let drained: Vec<_> = map.into_iter().map(|(k, _)| k).collect();
    assert_eq!(drained, [10, 20, 30, 50, 80]);
    assert_ne!(copy, NavMap::new());
}

#[test]
fn grows_and_shrinks_through_many_levels() {
    let mut map: NavMap<u32, u32> = NavMap::with_capacity(1_000);
    for k in 0..50_000 {
        map.insert(k, k * 2);
    }
    assert_eq!(map.len(), 50_000);
    assert_eq!(map.range(1_000..1_010).map(Iterator::count), Ok(10));
    for k in (0..50_000).filter(|k| k % 3 != 0) {
        assert_eq!(map.remove(&k), Some(k * 2));
    }
    assert_eq!(map.len(), 16_667);
    assert!(map.keys().all(|k| k % 3 == 0));
    while map.pop_last().is_some() {}
    assert!(map.is_empty());
    assert_eq!(map.first(), Err(Error::EmptyContainer));
}
