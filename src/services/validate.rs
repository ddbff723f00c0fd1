use crate::table::Table;
use std::collections::HashSet;

pub const EMPLOYEE_COLUMNS: [&str; 11] = [
    "EMPLOYEE_ID",
    "FIRST_NAME",
    "LAST_NAME",
    "EMAIL",
    "PHONE_NUMBER",
    "HIRE_DATE",
    "JOB_ID",
    "SALARY",
    "COMMISSION_PCT",
    "MANAGER_ID",
    "DEPARTMENT_ID",
];

pub const DEPARTMENT_COLUMNS: [&str; 4] = [
    "DEPARTMENT_ID",
    "DEPARTMENT_NAME",
    "MANAGER_ID",
    "LOCATION_ID",
];

#[derive(thiserror::Error, Debug)]
pub enum SchemaError {
    #[error("{label} data columns mismatch (missing: [{missing}], unexpected: [{unexpected}])")]
    ColumnMismatch {
        label: String,
        missing: String,
        unexpected: String,
    },
    #[error("no records in the {label} data")]
    Empty { label: String },
}

/// The table's column set must exactly equal `expected` (order-independent,
/// no extras, no missing) and the table must have at least one row.
pub fn check_columns(table: &Table, expected: &[&str], label: &str) -> Result<(), SchemaError> {
    let have: HashSet<&str> = table.columns().iter().map(|c| c.as_str()).collect();
    let want: HashSet<&str> = expected.iter().copied().collect();

    if have != want {
        let mut missing: Vec<&str> = want.difference(&have).copied().collect();
        let mut unexpected: Vec<&str> = have.difference(&want).copied().collect();
        missing.sort_unstable();
        unexpected.sort_unstable();
        return Err(SchemaError::ColumnMismatch {
            label: label.to_string(),
            missing: missing.join(", "),
            unexpected: unexpected.join(", "),
        });
    }
    if table.is_empty() {
        return Err(SchemaError::Empty {
            label: label.to_string(),
        });
    }
    Ok(())
}
