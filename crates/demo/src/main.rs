//! Walks a small store through every inventory operation and prints the reports.

mod config;

use serde::Serialize;

use stockroom_inventory::{Inventory, Item};

use crate::config::{DemoConfig, OutputFormat};

fn render<T>(output: OutputFormat, value: &T) -> anyhow::Result<()>
where
    T: core::fmt::Display + Serialize,
{
    match output {
        OutputFormat::Text => println!("\n{value}"),
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
    }
    Ok(())
}

fn print_items(output: OutputFormat, store: &Inventory) -> anyhow::Result<()> {
    match output {
        OutputFormat::Text => {
            println!("\nALL Items:");
            for item in store.iter() {
                println!("{item}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(store.items())?),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = DemoConfig::from_env()?;
    tracing::info!(?config, "starting inventory demo");

    let mut store = Inventory::new();

    store.insert(Item::new(101, "Milk", 10, 40.5))?;
    store.insert(Item::new(102, "Bread", 2, 25.0))?;
    store.insert(Item::new(103, "Eggs", 1, 6.0))?;
    if let Err(err) = store.insert(Item::new(101, "DuplicateMilk", 5, 41.0)) {
        tracing::info!(error = %err, "duplicate id rejected");
    }

    print_items(config.output, &store)?;

    store.search(102)?;
    store.search("eggs")?;

    store.restock(103, 5, Some(6.5))?;
    store.sell(101, 3)?;
    store.update_price(102, 27.0)?;
    store.delete(101)?;

    let table = store.price_quantity_table();
    match config.output {
        OutputFormat::Text => println!("\n{table}"),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "row_major": table, "column_major": table.column_major() })
        ),
    }

    render(config.output, &store.sparse_representation(config.sparse_threshold))?;
    render(config.output, &store.low_stock_report(config.low_stock_threshold))?;
    render(config.output, &store.summary())?;

    Ok(())
}
