use growflow::geometry::PixelIndex;
use growflow::overrides::{OverrideKey, SelectionIdentity, SprinklingOverrides};
use growflow::selection::Selection;
use std::collections::HashSet;

fn plot_key(id: &str, day: usize) -> OverrideKey {
    OverrideKey::new(SelectionIdentity::Plot(id.to_string()), day)
}

fn pixel_key(row: usize, col: usize, day: usize) -> OverrideKey {
    OverrideKey::new(SelectionIdentity::Pixel(PixelIndex::new(row, col)), day)
}

#[test]
fn test_unset_key_reads_zero() {
    let store = SprinklingOverrides::new();
    assert_eq!(store.get(&plot_key("A", 0)), 0.0);
    assert!(store.is_empty());
}

#[test]
fn test_set_then_get() {
    let store = SprinklingOverrides::new()
        .set(plot_key("A", 1), 5.0)
        .set(pixel_key(2, 3, 0), 1.5)
        .set(plot_key("A", 1), 7.0);

    assert_eq!(store.get(&plot_key("A", 1)), 7.0);
    assert_eq!(store.get(&pixel_key(2, 3, 0)), 1.5);
    assert_eq!(store.get(&plot_key("A", 0)), 0.0);
    assert_eq!(store.len(), 2);
    assert_eq!(store.total(), 8.5);
}

#[test]
fn test_set_leaves_earlier_handles_untouched() {
    let before = SprinklingOverrides::new().set(plot_key("A", 0), 2.0);
    let after = before.set(plot_key("A", 0), 9.0);

    assert_eq!(before.get(&plot_key("A", 0)), 2.0);
    assert_eq!(after.get(&plot_key("A", 0)), 9.0);
    assert_eq!(before.len(), 1);
}

#[test]
fn test_keys_are_injective() {
    // Plot ids shaped like pixel identities must not collide with pixels.
    let keys = [
        plot_key("1,2", 3),
        pixel_key(1, 2, 3),
        plot_key("1", 23),
        plot_key("1-2", 3),
        plot_key("1", 2),
        pixel_key(12, 3, 0),
        pixel_key(1, 23, 0),
    ];
    let unique: HashSet<_> = keys.iter().cloned().collect();
    assert_eq!(unique.len(), keys.len());

    let store = keys
        .iter()
        .enumerate()
        .fold(SprinklingOverrides::new(), |s, (i, k)| s.set(k.clone(), i as f64));
    for (i, key) in keys.iter().enumerate() {
        assert_eq!(store.get(key), i as f64);
    }
}

#[test]
fn test_key_display() {
    assert_eq!(plot_key("A7", 4).to_string(), "A7-4");
    assert_eq!(pixel_key(3, 12, 0).to_string(), "3,12-0");
}

#[test]
fn test_identity_from_selection() {
    assert_eq!(SelectionIdentity::from_selection(&Selection::None), None);
    assert_eq!(
        SelectionIdentity::from_selection(&Selection::Pixel(PixelIndex::new(1, 1))),
        Some(SelectionIdentity::Pixel(PixelIndex::new(1, 1)))
    );
}

#[test]
fn test_iter_lists_entries() {
    let store = SprinklingOverrides::new()
        .set(plot_key("A", 0), 1.0)
        .set(plot_key("B", 0), 2.0);
    let mut entries: Vec<_> = store.iter().map(|(k, v)| (k.to_string(), v)).collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(entries, vec![("A-0".to_string(), 1.0), ("B-0".to_string(), 2.0)]);
}
