//! Seed command handler

use crate::config::Config;
use crate::db::Store;
use crate::db::seed::seed_demo_data;

pub async fn cmd_seed(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;

    match seed_demo_data(&store).await? {
        Some(summary) => {
            println!("Seeded demo data:");
            println!("  Categories: {}", summary.categories);
            println!("  Businesses: {}", summary.businesses);
            println!("  Complaints: {}", summary.complaints);
        }
        None => {
            println!("Database already has categories, nothing to seed.");
        }
    }

    Ok(())
}
