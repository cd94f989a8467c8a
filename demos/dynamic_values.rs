//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::Serialize;
use std::error::Error;
use toon_encoder::{encode, to_value, toon, Record, Value};

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Build a record table at runtime
    let mut rows = Vec::new();
    for (host, port) in [("alpha", 8080), ("beta", 8081), ("gamma", 9000)] {
        let mut record = Record::new();
        record.insert("host", Value::from(host));
        record.insert("port", Value::from(port));
        record.insert("tls", Value::from(port != 8080));
        rows.push(Value::Object(record));
    }
    let hosts = Value::Array(rows);
    println!("Hosts:\n{}", encode(&hosts)?);

    // Inspect values dynamically
    if let Some(first) = hosts.as_array().and_then(|rows| rows.first()) {
        if let Some(record) = first.as_object() {
            println!("Fields of the first row: {:?}", record.sorted_keys());
            println!("Signature: {:?}\n", record.signature());
        }
    }

    // Convert an existing struct to Value
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };
    let user_value = to_value(&user)?;

    println!("Type checks:");
    println!("  is_object: {}", user_value.is_object());
    println!("  is_array:  {}", user_value.is_array());

    // A lone record is not a TOON document
    match encode(&user_value) {
        Ok(text) => println!("Unexpected output: {}", text),
        Err(err) => println!("  encode(user): {}\n", err),
    }

    // Its roles field on its own is
    let roles = toon!(["admin", "developer"]);
    println!("Roles:\n{}", encode(&roles)?);

    Ok(())
}
