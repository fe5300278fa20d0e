use crate::display::format_record;
use crate::error::Result;
use crate::store::Store;

/// Show one record by name
pub fn run(store: &Store, args: &[String]) -> Result<String> {
    let name = super::single_name(args)?;
    let record = store.read(name)?;
    Ok(format_record(record))
}
