#![no_main]

use libfuzzer_sys::fuzz_target;
use orderkit::collection::ordered::{OrderedCollection, OrderedOptions};

// Fuzz arbitrary operation sequences on OrderedCollection
//
// The first byte picks the duplicate policy, direction and search threshold;
// every following pair is (op, value).
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let flags = data[0];
    let options = OrderedOptions::new(flags & 1 != 0, flags & 2 != 0)
        .with_linear_search_threshold(usize::from(flags >> 2));
    let mut coll: OrderedCollection<u8> = OrderedCollection::with_options(options);

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 5;
        let value = data[idx + 1];

        match op {
            0 => {
                let before = coll.len();
                match coll.insert(value) {
                    Ok(at) => {
                        assert_eq!(coll.len(), before + 1);
                        assert_eq!(coll.get(at), Some(&value));
                    },
                    Err(rejected) => {
                        assert!(!coll.allow_duplicates());
                        assert_eq!(rejected.into_inner(), value);
                        assert_eq!(coll.len(), before);
                    },
                }
            },
            1 => {
                if !coll.is_empty() {
                    let index = usize::from(value) % coll.len();
                    let snapshot = coll.as_slice().to_vec();
                    if coll.set(index, value).is_err() {
                        assert_eq!(coll.as_slice(), snapshot.as_slice());
                    }
                }
            },
            2 => {
                let _ = coll.remove(&value);
            },
            3 => {
                let _ = coll.remove_at(usize::from(value));
            },
            4 => {
                let _ = coll.index_of(&value);
                let _ = coll.insertion_index(&value);
            },
            _ => unreachable!(),
        }

        assert!(coll.check_invariants().is_ok());
        idx += 2;
    }
});
