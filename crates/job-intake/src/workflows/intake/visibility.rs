use std::collections::BTreeSet;

use super::domain::{FormField, Position};

/// Conditional fields shown for a position. Adding a position fails to compile until it is
/// listed here.
pub const fn conditional_fields(position: Position) -> &'static [FormField] {
    match position {
        Position::Developer => &[FormField::RelevantExperience],
        Position::Designer => &[FormField::RelevantExperience, FormField::PortfolioUrl],
        Position::Manager => &[FormField::ManagementExperience],
    }
}

/// Set of conditional fields active for the current selection; empty when nothing is selected.
pub fn visible_fields(position: Option<Position>) -> BTreeSet<FormField> {
    position
        .map(|position| conditional_fields(position).iter().copied().collect())
        .unwrap_or_default()
}

/// Unconditional fields are always active.
pub fn is_active(field: FormField, position: Option<Position>) -> bool {
    if !field.is_conditional() {
        return true;
    }

    position
        .map(|position| conditional_fields(position).contains(&field))
        .unwrap_or(false)
}

/// Every field the form renders for the current selection, in display order.
pub fn rendered_fields(position: Option<Position>) -> Vec<FormField> {
    FormField::ALL
        .into_iter()
        .filter(|field| is_active(*field, position))
        .collect()
}
