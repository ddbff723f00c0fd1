use crate::table::{Cell, Table};
use anyhow::bail;

/// Coerce every SALARY cell to a number. A value that does not parse as
/// a float is a hard error: continuing with an uncoerced salary column
/// would make every downstream numeric step undefined.
pub fn prepare_employees(emp: &mut Table) -> anyhow::Result<()> {
    let idx = emp.column_index("SALARY")?;
    for (row_no, row) in emp.rows_mut().iter_mut().enumerate() {
        match &row[idx] {
            Cell::Number(_) | Cell::Null => {}
            Cell::Text(s) => match s.trim().parse::<f64>() {
                Ok(v) => row[idx] = Cell::Number(v),
                Err(_) => bail!("SALARY value {:?} in row {} is not numeric", s, row_no + 1),
            },
        }
    }
    Ok(())
}

/// Rename the legacy department key column when present. Absence is fine.
pub fn prepare_departments(dept: &mut Table) {
    dept.rename_column("DEPARTMENT_IDENTIFIER", "DEPARTMENT_ID");
}

#[cfg(test)]
mod tests {
    use super::prepare_employees;
    use crate::table::{Cell, Table};

    #[test]
    fn textual_salaries_are_coerced() {
        let mut t = Table::new(vec!["SALARY".to_string()]);
        t.push_row(vec![Cell::Text(" 2600 ".to_string())]);
        t.push_row(vec![Cell::Null]);
        prepare_employees(&mut t).expect("coerce");
        assert_eq!(t.rows()[0][0], Cell::Number(2600.0));
        assert_eq!(t.rows()[1][0], Cell::Null);
    }

    #[test]
    fn non_numeric_salary_halts() {
        let mut t = Table::new(vec!["SALARY".to_string()]);
        t.push_row(vec![Cell::Text("a lot".to_string())]);
        let err = prepare_employees(&mut t).unwrap_err();
        assert!(err.to_string().contains("a lot"));
    }
}
