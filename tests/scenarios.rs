// ==============================================
// COLLECTION SCENARIO TESTS (integration)
// ==============================================
//
// End-to-end behavior through the public API only, the way a downstream
// crate would use it.

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// ==============================================
// Ordered Collection
// ==============================================

mod ordered {
    use orderkit::prelude::*;

    #[test]
    fn heroes_stay_sorted_and_reject_duplicates() {
        let mut heroes = OrderedCollection::new();

        heroes.insert("Spiderman").unwrap();
        assert_eq!(heroes.as_slice(), &["Spiderman"]);

        heroes.insert("Ironman").unwrap();
        assert_eq!(heroes.as_slice(), &["Ironman", "Spiderman"]);

        heroes.insert("Thor").unwrap();
        assert_eq!(heroes.as_slice(), &["Ironman", "Spiderman", "Thor"]);

        heroes.insert("Hawkeye").unwrap();
        assert_eq!(
            heroes.as_slice(),
            &["Hawkeye", "Ironman", "Spiderman", "Thor"]
        );

        let err = heroes.insert("Thor").unwrap_err();
        assert_eq!(err.op(), RejectedOp::Insert);
        assert_eq!(err.into_inner(), "Thor");
        assert_eq!(heroes.len(), 4);
    }

    #[test]
    fn reverse_order_with_duplicates() {
        let mut scores = OrderedCollection::with_options(OrderedOptions::new(true, true));
        scores.try_extend([70, 95, 70, 88, 100, 95]).unwrap();
        assert_eq!(scores.as_slice(), &[100, 95, 95, 88, 70, 70]);
        scores.check_invariants().unwrap();
    }

    #[test]
    fn case_insensitive_names() {
        let mut names = OrderedCollection::with_comparer(CaseInsensitive, OrderedOptions::default());
        names.try_extend(["wasp", "Hulk", "ant-man"]).unwrap();
        assert_eq!(names.as_slice(), &["ant-man", "Hulk", "wasp"]);
        assert!(names.insert("HULK").is_err());
    }

    #[test]
    fn set_rejection_keeps_collection_intact() {
        let mut c = OrderedCollection::new();
        c.try_extend(["a", "c", "e"]).unwrap();

        let err = c.set(0, "e").unwrap_err();
        assert_eq!(err.op(), RejectedOp::Set);
        assert_eq!(c.as_slice(), &["a", "c", "e"]);

        assert_eq!(c.set(0, "d"), Ok("a"));
        assert_eq!(c.as_slice(), &["c", "d", "e"]);
    }

    #[test]
    fn sequence_view_is_shared() {
        fn render<S: SequenceView<u32>>(seq: &S) -> Vec<u32> {
            seq.as_slice().to_vec()
        }

        let mut sorted: OrderedCollection<u32> = OrderedCollection::new();
        sorted.try_extend([3, 1, 2]).unwrap();
        let mut recent: MruCollection<u32> = MruCollection::new(3);
        recent.extend([3, 1, 2]);

        assert_eq!(render(&sorted), vec![1, 2, 3]);
        assert_eq!(render(&recent), vec![2, 1, 3]);
    }
}

// ==============================================
// MRU Collection
// ==============================================

mod mru {
    use orderkit::prelude::*;

    use super::MONTHS;

    #[test]
    fn seeded_months_most_recent_is_last_seeded() {
        let c = MruCollection::builder(12).initial_data(MONTHS).build();
        assert_eq!(c.peek(0), Some(&"December"));
        assert_eq!(c.len(), 12);
    }

    #[test]
    fn default_triggers_do_not_promote_on_access() {
        let mut c = MruCollection::builder(12)
            .initial_data(MONTHS.iter().rev().copied())
            .build();
        assert_eq!(c.peek(0), Some(&"January"));
        assert_eq!(c.get(5), Some(&"June"));
        assert_eq!(c.peek(0), Some(&"January"));
    }

    #[test]
    fn on_access_promotes_read_item() {
        let mut c = MruCollection::builder(12)
            .initial_data(MONTHS.iter().rev().copied())
            .triggers(MruTriggers::ON_ACCESS)
            .build();
        assert_eq!(c.get(5), Some(&"June"));
        assert_eq!(c.peek(0), Some(&"June"));
    }

    #[test]
    fn full_collection_evicts_one_tail_item() {
        let mut c = MruCollection::builder(12).initial_data(MONTHS).build();
        let tail = c.least_recent().copied();
        assert_eq!(c.insert("Undecimber"), tail);
        assert_eq!(c.len(), 12);
        assert!(!c.contains(&"January"));
    }

    #[test]
    fn reinsert_relocates_instead_of_duplicating() {
        let mut c = MruCollection::builder(12).initial_data(MONTHS).build();
        c.insert("March");
        assert_eq!(c.len(), 12);
        assert_eq!(c.peek(0), Some(&"March"));
        assert_eq!(c.iter().filter(|m| **m == "March").count(), 1);
    }

    #[test]
    fn reinsert_promotes_with_access_only_triggers() {
        let mut c = MruCollection::builder(12)
            .initial_data(MONTHS)
            .triggers(MruTriggers::ON_ACCESS)
            .build();
        assert_eq!(c.insert("March"), Some("March"));
        assert_eq!(c.peek(0), Some(&"March"));
        assert_eq!(c.peek(1), Some(&"December"));

        c.set(0, "July");
        assert_eq!(c.peek(0), Some(&"July"));
        assert_eq!(c.len(), 12);
    }

    #[test]
    fn zero_capacity_is_a_config_error() {
        let err: ConfigError = MruCollection::<&str>::try_new(0).unwrap_err();
        assert!(err.to_string().contains("capacity"));

        let err = MruCollection::builder(0)
            .equality_fn(|a: &f64, b: &f64| a.to_bits() == b.to_bits())
            .try_build()
            .unwrap_err();
        assert!(err.message().contains("capacity"));
    }

    #[test]
    fn custom_equality_on_key_field() {
        #[derive(Debug, Clone)]
        struct Session {
            user: u32,
            token: &'static str,
        }

        let mut sessions = MruCollection::builder(2)
            .equality_fn(|a: &Session, b: &Session| a.user == b.user)
            .build();
        sessions.insert(Session { user: 1, token: "a" });
        sessions.insert(Session { user: 2, token: "b" });
        let replaced = sessions.insert(Session { user: 1, token: "c" });

        assert_eq!(replaced.map(|s| s.token), Some("a"));
        assert_eq!(sessions.most_recent().map(|s| s.token), Some("c"));
        assert_eq!(sessions.len(), 2);
    }
}
