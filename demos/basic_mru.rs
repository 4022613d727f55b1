//! Example demonstrating the bounded `MruCollection`.
//!
//! Index 0 is the most recently used item. Inserting moves an item to the
//! front, and overflowing the capacity evicts from the tail.
//!
//! Run with: cargo run --example basic_mru

use orderkit::prelude::*;

fn main() {
    println!("=== MRU Collection Example ===\n");

    let mut recent = MruCollection::new(3);
    println!("Created MRU collection: capacity={}\n", recent.capacity());

    for file in ["a.txt", "b.txt", "c.txt"] {
        recent.insert(file);
    }
    println!("Opened a.txt, b.txt, c.txt");
    println!("  recent: {:?}", recent.as_slice());

    // Re-inserting relocates; nothing is duplicated
    let replaced = recent.insert("a.txt");
    println!("\nOpened a.txt again (returned {:?})", replaced);
    println!("  recent: {:?}", recent.as_slice());

    let evicted = recent.insert("d.txt");
    println!("\nOpened d.txt (evicted {:?})", evicted);
    println!("  recent: {:?}", recent.as_slice());

    println!("\n=== Access Triggers ===\n");

    let mut lookups = MruCollection::builder(3)
        .triggers(MruTriggers::ON_ACCESS)
        .initial_data(["x", "y", "z"])
        .build();
    println!("Seeded x, y, z: {:?}", lookups.as_slice());

    println!("  peek(2) = {:?}", lookups.peek(2));
    println!("  after peek: {:?}", lookups.as_slice());

    println!("  get(2)  = {:?}", lookups.get(2).copied());
    println!("  after get:  {:?}", lookups.as_slice());

    println!("\n=== Shrinking Capacity ===\n");

    match lookups.set_capacity(1) {
        Ok(evicted) => println!("set_capacity(1) evicted {:?}", evicted),
        Err(err) => println!("set_capacity(1) failed: {}", err),
    }
    println!("  remaining: {:?}", lookups.as_slice());

    if let Err(err) = lookups.set_capacity(0) {
        println!("set_capacity(0) rejected: {}", err);
    }
}

// Expected output:
// === MRU Collection Example ===
//
// Created MRU collection: capacity=3
//
// Opened a.txt, b.txt, c.txt
//   recent: ["c.txt", "b.txt", "a.txt"]
//
// Opened a.txt again (returned Some("a.txt"))
//   recent: ["a.txt", "c.txt", "b.txt"]
//
// Opened d.txt (evicted Some("b.txt"))
//   recent: ["d.txt", "a.txt", "c.txt"]
//
// === Access Triggers ===
//
// Seeded x, y, z: ["z", "y", "x"]
//   peek(2) = Some("x")
//   after peek: ["z", "y", "x"]
//   get(2)  = Some("x")
//   after get:  ["x", "z", "y"]
//
// === Shrinking Capacity ===
//
// set_capacity(1) evicted ["z", "y"]
//   remaining: ["x"]
// set_capacity(0) rejected: capacity must be greater than zero
