use crate::domain::models::JsonOut;
use crate::table::Table;
use serde::Serialize;

pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

/// Tab-separated header plus rows; null cells print as blanks.
pub fn print_table(table: &Table) {
    println!("{}", table.columns().join("\t"));
    for row in table.rows() {
        let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        println!("{}", line.join("\t"));
    }
}
