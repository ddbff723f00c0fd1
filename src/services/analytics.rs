use crate::domain::models::{DeptAverage, SalaryStats};
use crate::table::{Cell, Table};
use anyhow::bail;
use std::collections::{BTreeMap, HashMap};

/// Mean, median and quartiles of SALARY across all employees. Null
/// salaries are skipped; quartiles interpolate linearly between order
/// statistics.
pub fn salary_stats(emp: &Table) -> anyhow::Result<SalaryStats> {
    let idx = emp.column_index("SALARY")?;
    let mut values: Vec<f64> = emp
        .rows()
        .iter()
        .filter_map(|r| r[idx].as_number())
        .filter(|v| !v.is_nan())
        .collect();
    if values.is_empty() {
        bail!("no numeric SALARY values to aggregate");
    }
    values.sort_by(f64::total_cmp);

    let average = values.iter().sum::<f64>() / values.len() as f64;
    Ok(SalaryStats {
        average,
        median: quantile(&values, 0.5),
        lower_quartile: quantile(&values, 0.25),
        upper_quartile: quantile(&values, 0.75),
    })
}

/// Average salary per department, preserving both sides of the join:
/// every department appears (absent average when it has no employees),
/// and employees with a null or unmatched department id aggregate under
/// an absent department name, ordered last. Averages are rounded to two
/// decimal places.
pub fn avg_salary_per_dept(emp: &Table, dept: &Table) -> anyhow::Result<Vec<DeptAverage>> {
    let e_dept = emp.column_index("DEPARTMENT_ID")?;
    let e_sal = emp.column_index("SALARY")?;
    let d_id = dept.column_index("DEPARTMENT_ID")?;
    let d_name = dept.column_index("DEPARTMENT_NAME")?;

    let mut id_to_name: HashMap<String, String> = HashMap::new();
    let mut named: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for row in dept.rows() {
        let (Some(key), Cell::Text(name)) = (group_key(&row[d_id]), &row[d_name]) else {
            continue;
        };
        id_to_name.insert(key, name.clone());
        named.entry(name.clone()).or_insert((0.0, 0));
    }

    let mut orphan = (0.0, 0usize);
    let mut orphan_seen = false;
    for row in emp.rows() {
        let name = group_key(&row[e_dept]).and_then(|k| id_to_name.get(&k));
        let salary = row[e_sal].as_number();
        match name {
            Some(name) => {
                let entry = named.entry(name.clone()).or_insert((0.0, 0));
                if let Some(s) = salary {
                    entry.0 += s;
                    entry.1 += 1;
                }
            }
            None => {
                orphan_seen = true;
                if let Some(s) = salary {
                    orphan.0 += s;
                    orphan.1 += 1;
                }
            }
        }
    }

    let mut out: Vec<DeptAverage> = named
        .into_iter()
        .map(|(name, (sum, count))| DeptAverage {
            department_name: Some(name),
            average_salary: (count > 0).then(|| round2(sum / count as f64)),
        })
        .collect();
    if orphan_seen {
        out.push(DeptAverage {
            department_name: None,
            average_salary: (orphan.1 > 0).then(|| round2(orphan.0 / orphan.1 as f64)),
        });
    }
    Ok(out)
}

/// Append `<COLUMN>_CATEGORY`, labeling each row against a fixed
/// reference value.
pub fn categorize_by_avg(df: &mut Table, column: &str, reference: f64) -> anyhow::Result<()> {
    let idx = df.column_index(column)?;
    let labels: Vec<Cell> = df
        .rows()
        .iter()
        .map(|row| Cell::Text(bucket(row[idx].as_number(), Some(reference)).to_string()))
        .collect();
    df.add_column(&format!("{}_CATEGORY", column), labels);
    Ok(())
}

/// Append `SALARY_CATEGORY_AMONG_DEPARTMENT`, labeling each employee
/// against the mean salary of their own department.
pub fn categorize_salary_within_dept(emp: &mut Table) -> anyhow::Result<()> {
    let e_dept = emp.column_index("DEPARTMENT_ID")?;
    let e_sal = emp.column_index("SALARY")?;

    let mut sums: HashMap<String, (f64, usize)> = HashMap::new();
    for row in emp.rows() {
        let (Some(key), Some(salary)) = (group_key(&row[e_dept]), row[e_sal].as_number()) else {
            continue;
        };
        let entry = sums.entry(key).or_insert((0.0, 0));
        entry.0 += salary;
        entry.1 += 1;
    }
    let means: HashMap<String, f64> = sums
        .into_iter()
        .map(|(k, (sum, count))| (k, sum / count as f64))
        .collect();

    let labels: Vec<Cell> = emp
        .rows()
        .iter()
        .map(|row| {
            let reference = group_key(&row[e_dept]).and_then(|k| means.get(&k).copied());
            Cell::Text(bucket(row[e_sal].as_number(), reference).to_string())
        })
        .collect();
    emp.add_column("SALARY_CATEGORY_AMONG_DEPARTMENT", labels);
    Ok(())
}

/// The employee rows of one department, original order and all columns
/// (derived ones included) preserved.
pub fn find_dept_employees(emp: &Table, dept_id: f64) -> anyhow::Result<Table> {
    let e_dept = emp.column_index("DEPARTMENT_ID")?;
    let mut out = Table::new(emp.columns().to_vec());
    for row in emp.rows() {
        if row[e_dept].as_number() == Some(dept_id) {
            out.push_row(row.clone());
        }
    }
    Ok(out)
}

/// Multiply SALARY by `1 + pct/100` for every employee of the given
/// department, in place. Returns the number of rows touched. Applying
/// the same raise twice compounds.
pub fn increase_dept_salary(emp: &mut Table, dept_id: f64, pct: f64) -> anyhow::Result<usize> {
    let e_dept = emp.column_index("DEPARTMENT_ID")?;
    let e_sal = emp.column_index("SALARY")?;
    let factor = 1.0 + pct / 100.0;

    let mut updated = 0;
    for (row_no, row) in emp.rows_mut().iter_mut().enumerate() {
        if row[e_dept].as_number() != Some(dept_id) {
            continue;
        }
        match &mut row[e_sal] {
            Cell::Number(v) => *v *= factor,
            Cell::Null => {}
            Cell::Text(s) => bail!("SALARY value {:?} in row {} is not numeric", s, row_no + 1),
        }
        updated += 1;
    }
    Ok(updated)
}

/// Rows where the given column is null or trims to the empty string.
pub fn count_empty_values(df: &Table, column: &str) -> anyhow::Result<usize> {
    let idx = df.column_index(column)?;
    Ok(df.rows().iter().filter(|row| row[idx].is_blank()).count())
}

/// Strictly below the reference is "low"; ties and missing values on
/// either side land "high".
fn bucket(value: Option<f64>, reference: Option<f64>) -> &'static str {
    match (value, reference) {
        (Some(v), Some(r)) if v < r => "low",
        _ => "high",
    }
}

fn group_key(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Null => None,
        Cell::Number(n) => Some(n.to_string()),
        Cell::Text(s) => Some(s.clone()),
    }
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
