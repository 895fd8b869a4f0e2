//! Init command handler

use crate::config::Config;

pub fn cmd_init() -> anyhow::Result<()> {
    if Config::create_default_if_missing()? {
        println!("Created config.toml with default settings.");
        println!("Edit [site] to set your directory name and base URL.");
    } else {
        println!("config.toml already exists, leaving it unchanged.");
    }
    Ok(())
}
