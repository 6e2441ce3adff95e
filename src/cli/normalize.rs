use crate::{Config, UrlEditDialog};
use anyhow::Result;
use std::path::Path;

/// Runs the argument through the same keystroke filter the edit dialog
/// applies, length limit included.
pub fn run(config_path: &Path, raw: &str) -> Result<()> {
    let config = Config::load_or_default(config_path)?;

    let mut dialog = UrlEditDialog::new(config, "");
    dialog.handle_input(raw);
    println!("{}", dialog.text());
    Ok(())
}
