//! # Craft Quote
//!
//! Prints the journal fill and setup fee of one crafting batch.
//!
//! ```text
//! craft_quote <config.toml> <UNIQUE_NAME> <resource_count> <quantity>
//!             [--food <n>] [--sprite <name>] [--artifact <UNIQUE_NAME>]
//! ```
//!
//! The item's tier and enchantment are read from its unique name
//! (`T5_2H_BOW@1` is T5, Level1). Set `RUST_LOG=debug` for lookup details.

use std::process::ExitCode;

use artisan::{
    economy::SimpleItemRecord, CraftableItem, CraftingEngine, CraftingRequirements,
    DataSourceConfig, RecipeResource,
};
use tracing_subscriber::EnvFilter;

fn option_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn print_usage() {
    println!("Usage: craft_quote <config.toml> <UNIQUE_NAME> <resource_count> <quantity>");
    println!();
    println!("Options:");
    println!("  --food <n>                 Station food value (default 0)");
    println!("  --sprite <name>            Item sprite, resolves the journal to bring");
    println!("  --artifact <UNIQUE_NAME>   Artifact favor token consumed by the recipe");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 5 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let config = match DataSourceConfig::from_toml_file(&args[1]) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let record = SimpleItemRecord::new(args[2].as_str(), 0);
    let (Some(tier), Some(level)) = (record.tier(), record.level()) else {
        eprintln!("Error: cannot read tier and enchantment from '{}'", args[2]);
        return ExitCode::FAILURE;
    };

    let (Ok(resource_count), Ok(quantity)) = (args[3].parse::<u32>(), args[4].parse::<u32>())
    else {
        eprintln!("Error: resource_count and quantity must be non-negative integers");
        return ExitCode::FAILURE;
    };

    let food_value = match option_value(&args, "--food").map(str::parse::<i32>) {
        None => 0,
        Some(Ok(food)) => food,
        Some(Err(_)) => {
            eprintln!("Error: --food must be an integer");
            return ExitCode::FAILURE;
        }
    };

    let resources = option_value(&args, "--artifact")
        .map(|token| vec![RecipeResource::new(token, 1)])
        .unwrap_or_default();
    let item = CraftableItem::new(record.unique_name.as_str(), tier, level).with_requirements(
        CraftingRequirements {
            total_amount_resources: resource_count,
            resources,
        },
    );

    tracing::info!(items = %config.items_path().display(), "loading reference data");
    let engine = CraftingEngine::standalone(config);
    if !engine.load_reference_data().await {
        println!("Warning: reference data incomplete, journal lookups may be empty");
    }

    let quote = engine.quote(&item, quantity, food_value, option_value(&args, "--sprite"));

    println!();
    println!("Item:               {} ({tier}, {level})", item.unique_name);
    println!("Quantity:           {quantity}");
    println!("Fame per craft:     {:.1}", quote.total_base_fame);
    println!("Journals filled:    {:.4}", quote.journal_fraction);
    println!("Setup fee / craft:  {:.2}", quote.per_food_setup_fee);
    println!("Setup fee (batch):  {:.2}", quote.crafting_tax);
    match quote.journal_item {
        Some(journal) => {
            println!("Journal:            {} (#{})", journal.unique_name, journal.index);
        }
        None => println!("Journal:            -"),
    }

    ExitCode::SUCCESS
}
