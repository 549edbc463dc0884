use pretty_assertions::assert_eq;

use super::CharRangeMap;

#[test]
fn lookup_on_empty_table_finds_nothing() {
    let map: CharRangeMap<u8> = CharRangeMap::new();
    assert_eq!(map.lookup('a'), None);
}

#[test]
fn lookup_is_inclusive_on_both_ends() {
    let mut map = CharRangeMap::new();
    map.add_interval('a', 'z', 1u8);
    assert_eq!(map.lookup('a'), Some(&1));
    assert_eq!(map.lookup('z'), Some(&1));
    assert_eq!(map.lookup('A'), None);
}

#[test]
fn later_registration_wins_on_overlap() {
    let mut map = CharRangeMap::new();
    map.add_interval('\u{0000}', '\u{ffff}', "symbol");
    map.add_interval('a', 'z', "word");
    map.add_interval('0', '9', "number");
    assert_eq!(map.lookup('q'), Some(&"word"));
    assert_eq!(map.lookup('7'), Some(&"number"));
    assert_eq!(map.lookup('+'), Some(&"symbol"));
}

#[test]
fn narrower_override_inside_wider_range() {
    let mut map = CharRangeMap::new();
    map.add_interval('a', 'z', 1u8);
    map.add_interval('m', 'p', 2u8);
    assert_eq!(map.lookup('l'), Some(&1));
    assert_eq!(map.lookup('n'), Some(&2));
    assert_eq!(map.lookup('q'), Some(&1));
}

#[test]
fn clear_removes_all_intervals() {
    let mut map = CharRangeMap::new();
    map.add_interval('a', 'z', 1u8);
    map.clear();
    assert_eq!(map.lookup('a'), None);
}

#[test]
#[should_panic(expected = "invalid interval")]
fn reversed_interval_panics() {
    let mut map = CharRangeMap::new();
    map.add_interval('z', 'a', 1u8);
}

#[test]
fn bool_table_supports_carve_outs() {
    let mut map = CharRangeMap::new();
    map.add_interval('a', 'z', true);
    map.add_interval('x', 'x', false);
    assert!(map.contains('a'));
    assert!(!map.contains('x'));
    assert!(map.contains('y'));
    assert!(!map.contains('0'));
}
