//! Check command handler

use anyhow::Context;

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_check(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path)
        .await
        .with_context(|| format!("Failed to open database {}", config.general.database_path))?;
    store.ping().await.context("Database ping failed")?;

    let categories = store.count_categories().await?;
    let businesses = store.count_businesses().await?;
    let complaints = store.count_complaints().await?;

    println!("Database: {}", config.general.database_path);
    println!("{:-<40}", "");
    println!("  Categories: {categories}");
    println!("  Businesses: {businesses}");
    println!("  Complaints: {complaints}");

    if categories == 0 {
        println!();
        println!("No categories yet. Load demo data with: bizdir seed");
    }

    Ok(())
}
