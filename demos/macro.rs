//! Using the toon! macro for dynamic value construction.
//!
//! Run with: cargo run --example macro

use std::error::Error;
use toon_encoder::{encode, toon, Value};

fn main() -> Result<(), Box<dyn Error>> {
    let null_val = toon!(null);
    let bool_val = toon!(true);
    let number = toon!(42);
    let text = toon!("Hello, TOON!");

    println!("Primitives:");
    println!("  null:   {}", encode(&null_val)?);
    println!("  bool:   {}", encode(&bool_val)?);
    println!("  number: {}", encode(&number)?);
    println!("  text:   {}\n", encode(&text)?);

    let numbers = toon!([1, 2, 3, 4, 5]);
    let mixed = toon!([1, "two", true, null]);

    println!("Arrays:");
    println!("  Numbers: {}", encode(&numbers)?);
    println!("  Mixed:   {}\n", encode(&mixed)?);

    let matrix = toon!([[1, 0, 0], [0, 1, 0], [0, 0, 1]]);
    println!("Rows:");
    println!("{}", encode(&matrix)?);

    let statuses = vec![
        toon!({"id": 1, "status": "active"}),
        toon!({"status": "pending", "id": 2}),
        toon!({"id": 3, "status": "completed"}),
    ];
    let table = Value::Array(statuses);

    println!("Records:");
    println!("{}", encode(&table)?);

    let nested = toon!([{"id": 1, "tags": ["a", "b"]}]);
    if let Err(err) = encode(&nested) {
        println!("Nested record fields are rejected: {}", err);
    }

    Ok(())
}
