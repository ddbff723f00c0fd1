use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SalaryStats {
    pub average: f64,
    pub median: f64,
    pub lower_quartile: f64,
    pub upper_quartile: f64,
}

/// One row of the per-department average. `department_name` is `None`
/// for the bucket of employees with a null or unmatched department id;
/// `average_salary` is `None` for a department with no employees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeptAverage {
    pub department_name: Option<String>,
    pub average_salary: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RaiseSummary {
    pub department_id: i64,
    pub pct: f64,
    pub rows_updated: usize,
}

/// The combined `--json` report: one object covering all seven answers,
/// printed once inside the `JsonOut` envelope.
#[derive(Serialize)]
pub struct AnalysisReport {
    pub salary_stats: SalaryStats,
    pub dept_averages: Vec<DeptAverage>,
    pub salary_categories: Vec<serde_json::Value>,
    pub dept_salary_categories: Vec<serde_json::Value>,
    pub dept_employees: Vec<serde_json::Value>,
    pub raise: RaiseSummary,
    pub raised_rows: Vec<serde_json::Value>,
    pub empty_phone_count: usize,
}
