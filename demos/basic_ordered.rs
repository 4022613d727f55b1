//! Example demonstrating the always-sorted `OrderedCollection`.
//!
//! Every insert lands at its sorted position. Duplicates are rejected unless
//! the collection allows them, and the rejected item comes back in the error.
//!
//! Run with: cargo run --example basic_ordered

use orderkit::prelude::*;

fn main() {
    println!("=== Ordered Collection Example ===\n");

    let mut heroes = OrderedCollection::new();
    if let Err(err) = heroes.try_extend(["Spiderman", "Ironman", "Thor", "Hawkeye"]) {
        println!("unexpected duplicate: {}", err.into_inner());
    }
    println!("Heroes: {:?}", heroes.as_slice());

    match heroes.insert("Thor") {
        Ok(index) => println!("Inserted \"Thor\" at index {}", index),
        Err(err) => println!("Insert \"Thor\" again: {}", err),
    }

    if let Ok(index) = heroes.insert("Black Widow") {
        println!("Inserted \"Black Widow\" at index {}", index);
    }

    // set replaces by index but the new item still goes to its sorted slot
    if let Ok(old) = heroes.set(2, "Vision") {
        println!("set(2, \"Vision\") replaced {:?}", old);
    }
    println!("Heroes: {:?}", heroes.as_slice());

    if let Err(err) = heroes.set(0, "Thor") {
        println!("set(0, \"Thor\") rejected: {}", err);
        println!("  unchanged: {:?}", heroes.as_slice());
    }

    println!("\n=== Reverse Order With Duplicates ===\n");

    let mut scores = OrderedCollection::with_options(OrderedOptions::new(true, true));
    for score in [3, 1, 3, 2] {
        let _ = scores.insert(score);
    }
    println!("Scores: {:?}", scores.as_slice());

    println!("\n=== Custom Comparers ===\n");

    let mut names: OrderedCollection<&str, CaseInsensitive> =
        OrderedCollection::with_comparer(CaseInsensitive, OrderedOptions::default());
    for name in ["thor", "Hulk", "ant-man"] {
        let _ = names.insert(name);
    }
    println!("Case-insensitive: {:?}", names.as_slice());
    println!("  insert \"THOR\" rejected? {}", names.insert("THOR").is_err());

    let mut by_len = OrderedCollection::with_comparison(
        |a: &&str, b: &&str| a.len().cmp(&b.len()),
        OrderedOptions::new(true, false),
    );
    for name in ["Vision", "Thor", "Hulk", "Wanda"] {
        let _ = by_len.insert(name);
    }
    println!("By length: {:?}", by_len.as_slice());
}

// Expected output:
// === Ordered Collection Example ===
//
// Heroes: ["Hawkeye", "Ironman", "Spiderman", "Thor"]
// Insert "Thor" again: attempted to insert a duplicate value
// Inserted "Black Widow" at index 0
// set(2, "Vision") replaced "Ironman"
// Heroes: ["Black Widow", "Hawkeye", "Spiderman", "Thor", "Vision"]
// set(0, "Thor") rejected: attempted to set a duplicate value
//   unchanged: ["Black Widow", "Hawkeye", "Spiderman", "Thor", "Vision"]
//
// === Reverse Order With Duplicates ===
//
// Scores: [3, 3, 2, 1]
//
// === Custom Comparers ===
//
// Case-insensitive: ["ant-man", "Hulk", "thor"]
//   insert "THOR" rejected? true
// By length: ["Hulk", "Thor", "Wanda", "Vision"]
