//! Feature listing command implementation.

use anyhow::Result;
use salescast::features::FeatureCategory;
use salescast::features::registry::features_by_category;

/// List the features a model receives, optionally filtered by category.
pub(crate) fn list_features(category: Option<&str>, verbose: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Available Features                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let categories = [
        (FeatureCategory::Calendar, "Calendar"),
        (FeatureCategory::Seasonal, "Seasonal"),
        (FeatureCategory::History, "History"),
    ];

    for (cat, cat_name) in categories {
        if let Some(filter) = category
            && !cat_name.to_lowercase().contains(&filter.to_lowercase())
        {
            continue;
        }

        println!("{} - {}", cat_name, cat.description());
        println!("{}", "-".repeat(60));

        for feature in features_by_category(&cat) {
            if verbose {
                println!(
                    "  {:22} - {} (lookback: {} rows)",
                    feature.name, feature.description, feature.lookback
                );
            } else {
                println!("  {}", feature.name);
            }
        }
        println!();
    }

    if !verbose {
        println!("Use --verbose for detailed feature descriptions.\n");
    }

    println!("History features are only produced when sales values are present.");
    println!();

    Ok(())
}
