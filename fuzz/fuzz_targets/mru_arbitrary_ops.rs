#![no_main]

use libfuzzer_sys::fuzz_target;
use orderkit::collection::mru::{MruCollection, MruTriggers};

// Fuzz arbitrary operation sequences on MruCollection
//
// First byte: capacity (1-32); second byte: trigger bits.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let capacity = usize::from(data[0] % 32) + 1;
    let triggers = MruTriggers::from_bits_truncate(data[1]);
    let mut coll: MruCollection<u8> = MruCollection::builder(capacity).triggers(triggers).build();

    let mut idx = 2;
    while idx + 1 < data.len() {
        let op = data[idx] % 7;
        let value = data[idx + 1];

        match op {
            0 => {
                let was_full = coll.len() == coll.capacity();
                let present = coll.contains(&value);
                let out = coll.insert(value);
                if !present && !was_full {
                    assert!(out.is_none());
                }
                assert_eq!(coll.most_recent(), Some(&value));
            },
            1 => {
                let _ = coll.set(usize::from(value), value);
                assert_eq!(coll.most_recent(), Some(&value));
            },
            2 => {
                let before = coll.as_slice().to_vec();
                let index = usize::from(value);
                let got = coll.get(index).copied();
                assert_eq!(got, before.get(index).copied());
                if !triggers.contains(MruTriggers::ON_ACCESS) {
                    assert_eq!(coll.as_slice(), before.as_slice());
                }
            },
            3 => {
                let before = coll.as_slice().to_vec();
                let _ = coll.peek(usize::from(value));
                assert_eq!(coll.as_slice(), before.as_slice());
            },
            4 => {
                let _ = coll.remove(&value);
            },
            5 => {
                let new_capacity = usize::from(value % 32) + 1;
                let before = coll.len();
                let evicted = coll.set_capacity(new_capacity).unwrap();
                assert_eq!(before - evicted.len(), coll.len());
            },
            6 => {
                let _ = coll.pop_least_recent();
            },
            _ => unreachable!(),
        }

        assert!(coll.check_invariants().is_ok());
        idx += 2;
    }
});
