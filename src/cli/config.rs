//! Show the resolved configuration.

use crate::config::Config;
use crate::error::Error;

/// Print the effective configuration (file plus env overrides) as TOML.
pub fn show(config: &Config) -> Result<(), Error> {
    match Config::path() {
        Ok(path) if path.exists() => println!("# {}", path.display()),
        Ok(path) => println!("# {} (not found, using defaults)", path.display()),
        Err(_) => println!("# (no home directory, using defaults)"),
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
