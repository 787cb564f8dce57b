use chrono::NaiveDate;

use crate::extract::descriptor::{ControlKind, FieldDescriptor};

/// Date rendering convention for a free-text date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    Iso,
    DayFirst,
    MonthFirst,
}

/// Type-specific value transform, applied after matching and before
/// injection. Total: anything unparseable or non-date passes through
/// unchanged, never an error.
///
/// Only date-typed matches are transformed. Native date inputs take the
/// stored ISO value as-is; free-text fields get the order their own
/// placeholder/name hints at, defaulting to DD/MM/YYYY.
pub fn format_value(field: &FieldDescriptor, is_date: bool, value: &str) -> String {
    if !is_date && field.kind != ControlKind::Date {
        return value.to_string();
    }

    let Ok(date) = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") else {
        // Not the ISO form we store; pass through rather than corrupt.
        return value.to_string();
    };

    if field.kind == ControlKind::Date {
        return value.trim().to_string();
    }

    match detect_order(field) {
        DateOrder::Iso => date.format("%Y-%m-%d").to_string(),
        DateOrder::DayFirst => date.format("%d/%m/%Y").to_string(),
        DateOrder::MonthFirst => date.format("%m/%d/%Y").to_string(),
    }
}

/// Inspect the field's own hint text for a date-order convention.
pub fn detect_order(field: &FieldDescriptor) -> DateOrder {
    let hint = format!(
        "{} {} {}",
        field.raw.placeholder.to_lowercase(),
        field.raw.name.to_lowercase(),
        field.search_text
    );

    if hint.contains("yyyy-mm-dd") || hint.contains("yyyy mm dd") {
        DateOrder::Iso
    } else if hint.contains("mm/dd") || hint.contains("mm dd") {
        DateOrder::MonthFirst
    } else {
        DateOrder::DayFirst
    }
}
