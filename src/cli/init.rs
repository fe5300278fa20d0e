use log::info;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::store::Store;

/// Create an empty data file holding only the header line
pub fn run(data_file: &Path) -> Result<String> {
    if data_file.exists() {
        return Ok(format!(
            "Data file already exists: {}",
            data_file.display()
        ));
    }

    if let Some(parent) = data_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    Store::new(data_file).flush()?;
    info!("Initialized {}", data_file.display());

    Ok(format!("Data file created: {}", data_file.display()))
}
