//! Tabular array format for homogeneous structs.
//!
//! Run with: cargo run --example tabular_arrays

use serde::Serialize;
use std::error::Error;
use toon_encoder::to_string;

#[derive(Debug, Serialize)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    in_stock: bool,
    discount: Option<f64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let products = vec![
        Product {
            sku: "WIDGET-001".into(),
            name: "Super Widget".into(),
            price: 29.99,
            in_stock: true,
            discount: None,
        },
        Product {
            sku: "GADGET-002".into(),
            name: "Mega Gadget".into(),
            price: 49.99,
            in_stock: false,
            discount: Some(0.15),
        },
        Product {
            sku: "TOOL-003".into(),
            name: "Ultra Tool".into(),
            price: 19.99,
            in_stock: true,
            discount: None,
        },
    ];

    // Fields are sorted in the header; each record becomes one row
    let toon = to_string(&products)?;
    println!("TOON tabular output:\n{}", toon);

    let json = serde_json::to_string(&products)?;
    println!("{} bytes as TOON, {} bytes as JSON", toon.len(), json.len());

    Ok(())
}
