//! Basic TOON encoding of primitives, arrays and structs.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use std::error::Error;
use toon_encoder::to_string;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("Primitives:");
    println!("  {}", to_string(&42)?);
    println!("  {}", to_string(&f64::INFINITY)?);
    println!("  {}", to_string("plain text")?);
    println!("  {}\n", to_string("needs, quoting")?);

    println!("Inline array:");
    println!("{}\n", to_string(&vec!["red", "green", "blue"])?);

    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
        },
    ];

    println!("Record table:");
    print!("{}", to_string(&users)?);

    Ok(())
}
