use clap::Parser;

pub const DEFAULT_EMPLOYEES_SOURCE: &str = "https://gist.githubusercontent.com/kevin336/acbb2271e66c10a5b73aacf82ca82784/raw/e38afe62e088394d61ed30884dd50a6826eee0a8/employees.csv";
pub const DEFAULT_DEPARTMENTS_SOURCE: &str = "https://gist.githubusercontent.com/kevin336/5ea0e96813aa88871c20d315b5bf445c/raw/d8fcf5c2630ba12dd8802a2cdd5480621b6a0ea6/departments.csv";

pub const DEFAULT_DEPT_ID: i64 = 20;
pub const DEFAULT_RAISE_PCT: f64 = 10.0;

#[derive(Parser, Debug)]
#[command(
    name = "headcount",
    version,
    about = "Employee and department salary analytics over CSV sources"
)]
pub struct Cli {
    #[arg(long, help = "Output one machine-readable JSON report (never pauses)")]
    pub json: bool,
    #[arg(long, help = "Employees CSV source (url or local path)")]
    pub employees: Option<String>,
    #[arg(long, help = "Departments CSV source (url or local path)")]
    pub departments: Option<String>,
    #[arg(long, help = "Do not wait for Enter between answers")]
    pub no_pause: bool,
    #[arg(long, help = "Department targeted by the roster and raise questions")]
    pub dept_id: Option<i64>,
    #[arg(long, help = "Raise percentage applied to the targeted department")]
    pub raise_pct: Option<f64>,
}
