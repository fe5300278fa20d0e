//! Text layout for the `read` command

use super::units::{inches_to_cm, pounds_to_kg, two_places};
use crate::models::Record;

/// Render a record as the lines printed by `read`
pub fn format_record(record: &Record) -> String {
    format!(
        "name: {}\nsex: {}\nage: {}\nheight: inches: {} centimeters: {}\nweight: pounds: {} kilograms: {}",
        record.name,
        record.sex,
        record.age,
        record.height,
        two_places(inches_to_cm(record.height)),
        record.weight,
        two_places(pounds_to_kg(record.weight)),
    )
}
