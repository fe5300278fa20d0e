use crate::error::Result;
use crate::store::Store;

/// Remove one record by name
pub fn run(store: &mut Store, args: &[String]) -> Result<String> {
    let name = super::single_name(args)?;
    let removed = store.delete(name)?;
    Ok(format!("Deleted {}", removed.name))
}
