//! Customizing TOON output with ToonOptions.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use std::error::Error;
use toon_encoder::{to_string_with_options, Delimiter, ToonOptions};

#[derive(Debug, Serialize)]
struct DataRow {
    id: u32,
    value: String,
    active: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let data = vec![
        DataRow {
            id: 1,
            value: "test, staging".to_string(),
            active: true,
        },
        DataRow {
            id: 2,
            value: "prod".to_string(),
            active: false,
        },
    ];

    // Default format (comma delimiter)
    println!("Default (comma):");
    println!("{}", toon_encoder::to_string(&data)?);

    // Tab delimiter; commas inside values no longer need quotes
    println!("Tab delimiter:");
    let tab_options = ToonOptions::new().with_delimiter(Delimiter::Tab);
    println!("{}", to_string_with_options(&data, tab_options)?);

    println!("Pipe delimiter:");
    let pipe_options = ToonOptions::new().with_delimiter(Delimiter::Pipe);
    println!("{}", to_string_with_options(&data, pipe_options)?);

    println!("Custom key and length marker (#):");
    let marked_options = ToonOptions::new().with_key("rows").with_length_marker('#');
    print!("{}", to_string_with_options(&data, marked_options)?);

    Ok(())
}
