use crate::cli::{
    Cli, DEFAULT_DEPARTMENTS_SOURCE, DEFAULT_DEPT_ID, DEFAULT_EMPLOYEES_SOURCE, DEFAULT_RAISE_PCT,
};
use crate::domain::models::{AnalysisReport, RaiseSummary};
use crate::services::analytics::{
    avg_salary_per_dept, categorize_by_avg, categorize_salary_within_dept, count_empty_values,
    find_dept_employees, increase_dept_salary, salary_stats,
};
use crate::services::loader::load_table;
use crate::services::output::{print_json, print_table};
use crate::services::prepare::{prepare_departments, prepare_employees};
use crate::services::settings::Settings;
use crate::services::validate::{check_columns, DEPARTMENT_COLUMNS, EMPLOYEE_COLUMNS};

struct RunOptions {
    employees: String,
    departments: String,
    dept_id: i64,
    raise_pct: f64,
    json: bool,
    pause: bool,
}

fn resolve_options(cli: &Cli, settings: &Settings) -> RunOptions {
    RunOptions {
        employees: cli
            .employees
            .clone()
            .or_else(|| settings.sources.employees.clone())
            .unwrap_or_else(|| DEFAULT_EMPLOYEES_SOURCE.to_string()),
        departments: cli
            .departments
            .clone()
            .or_else(|| settings.sources.departments.clone())
            .unwrap_or_else(|| DEFAULT_DEPARTMENTS_SOURCE.to_string()),
        dept_id: cli.dept_id.or(settings.analysis.dept_id).unwrap_or(DEFAULT_DEPT_ID),
        raise_pct: cli
            .raise_pct
            .or(settings.analysis.raise_pct)
            .unwrap_or(DEFAULT_RAISE_PCT),
        json: cli.json,
        pause: !cli.json && !cli.no_pause,
    }
}

fn pause(opts: &RunOptions, which: &str) {
    if !opts.pause {
        return;
    }
    println!("\nPress Enter to continue to the {} answer...", which);
    let mut line = String::new();
    // EOF counts as acknowledgment, so piped input works
    let _ = std::io::stdin().read_line(&mut line);
}

/// The fixed seven-question run: load both tables, validate both,
/// prepare both, then answer in order. Any failure in any step halts
/// the run; no step continues on an absent input.
pub fn run_analysis(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let opts = resolve_options(cli, settings);
    let text = !opts.json;
    let dept_id = opts.dept_id as f64;

    let mut employees = load_table(&opts.employees)?;
    let mut departments = load_table(&opts.departments)?;

    check_columns(&employees, &EMPLOYEE_COLUMNS, "employees")?;
    check_columns(&departments, &DEPARTMENT_COLUMNS, "departments")?;

    prepare_employees(&mut employees)?;
    prepare_departments(&mut departments);

    if text {
        println!("Data loaded and prepared.");
    }

    pause(&opts, "first");
    let stats = salary_stats(&employees)?;
    if text {
        println!("\n 1 - The average, median, lower and upper quartiles of employee salaries:");
        println!("Average salary        : {}", stats.average);
        println!("Median salary         : {}", stats.median);
        println!("Lower quartile salary : {}", stats.lower_quartile);
        println!("Upper quartile salary : {}", stats.upper_quartile);
    }

    pause(&opts, "next");
    let dept_averages = avg_salary_per_dept(&employees, &departments)?;
    if text {
        println!("\n 2 - The average salary per department:");
        for d in &dept_averages {
            println!(
                "{}\t{}",
                d.department_name.as_deref().unwrap_or("(no department)"),
                d.average_salary
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "n/a".to_string())
            );
        }
    }

    pause(&opts, "next");
    categorize_by_avg(&mut employees, "SALARY", stats.average)?;
    let salary_categories = employees.select(&["EMPLOYEE_ID", "SALARY", "SALARY_CATEGORY"])?;
    if text {
        println!("\n 3 - Salaries against the global average:");
        print_table(&salary_categories);
    }

    pause(&opts, "next");
    categorize_salary_within_dept(&mut employees)?;
    let dept_salary_categories = employees.select(&[
        "EMPLOYEE_ID",
        "DEPARTMENT_ID",
        "SALARY",
        "SALARY_CATEGORY_AMONG_DEPARTMENT",
    ])?;
    if text {
        println!("\n 4 - Salaries against each department's average:");
        print_table(&dept_salary_categories);
    }

    pause(&opts, "next");
    let roster = find_dept_employees(&employees, dept_id)?.select(&[
        "EMPLOYEE_ID",
        "DEPARTMENT_ID",
        "SALARY",
        "SALARY_CATEGORY_AMONG_DEPARTMENT",
    ])?;
    if text {
        println!("\n 5 - Employees of department {}:", opts.dept_id);
        print_table(&roster);
    }

    pause(&opts, "next");
    let rows_updated = increase_dept_salary(&mut employees, dept_id, opts.raise_pct)?;
    let raised_rows =
        find_dept_employees(&employees, dept_id)?.select(&["EMPLOYEE_ID", "DEPARTMENT_ID", "SALARY"])?;
    if text {
        println!(
            "\n 6 - Salaries in department {} raised by {}%:",
            opts.dept_id, opts.raise_pct
        );
        print_table(&raised_rows);
    }

    pause(&opts, "next");
    let empty_phone_count = count_empty_values(&employees, "PHONE_NUMBER")?;
    if text {
        println!("\n 7 - Employees with an empty PHONE_NUMBER:");
        println!("No. of employees with an empty phone number: {}", empty_phone_count);
    }

    if opts.json {
        print_json(AnalysisReport {
            salary_stats: stats,
            dept_averages,
            salary_categories: salary_categories.to_json_rows(),
            dept_salary_categories: dept_salary_categories.to_json_rows(),
            dept_employees: roster.to_json_rows(),
            raise: RaiseSummary {
                department_id: opts.dept_id,
                pct: opts.raise_pct,
                rows_updated,
            },
            raised_rows: raised_rows.to_json_rows(),
            empty_phone_count,
        })?;
    }

    Ok(())
}
