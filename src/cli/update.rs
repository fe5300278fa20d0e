use crate::error::Result;
use crate::store::Store;

/// Validate the five record arguments and replace the existing record
pub fn run(store: &mut Store, args: &[String]) -> Result<String> {
    let record = super::candidate(args)?.into_record()?;
    let name = record.name.clone();
    store.update(record)?;
    Ok(format!("Updated {}", name))
}
