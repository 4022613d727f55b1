#![no_main]

use libfuzzer_sys::fuzz_target;
use orderkit::collection::ordered::{OrderedCollection, OrderedOptions};
use orderkit::traits::CaseInsensitive;

// Linear-only and binary-only collections must end up identical
//
// Case-insensitive comparison makes equal-but-distinct items, so any
// disagreement about where a run of equal items starts shows up here.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let allow = data[0] & 1 != 0;
    let reverse = data[0] & 2 != 0;
    let base = OrderedOptions::new(allow, reverse);

    let mut linear =
        OrderedCollection::with_comparer(CaseInsensitive, base.with_linear_search_threshold(usize::MAX));
    let mut binary =
        OrderedCollection::with_comparer(CaseInsensitive, base.with_linear_search_threshold(0));

    for &byte in &data[1..] {
        // Map to a small alphabet with both cases.
        let letter = char::from(b'a' + (byte % 6));
        let item = if byte & 0x80 != 0 {
            letter.to_ascii_uppercase().to_string()
        } else {
            letter.to_string()
        };

        let l = linear.insert(item.clone()).is_ok();
        let b = binary.insert(item).is_ok();
        assert_eq!(l, b);
    }

    assert_eq!(linear.as_slice(), binary.as_slice());
});
