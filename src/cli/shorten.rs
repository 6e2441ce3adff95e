use crate::services::display::shorten_url_for_display;
use crate::Config;
use anyhow::Result;
use std::path::Path;

pub fn run(config_path: &Path, url: &str, max: Option<usize>) -> Result<()> {
    let config = Config::load_or_default(config_path)?;

    let budget = max.unwrap_or(config.ui.display_max_chars);
    println!("{}", shorten_url_for_display(url, budget));
    Ok(())
}
