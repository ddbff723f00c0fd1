use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub employees: PathBuf,
    pub departments: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let (employees, departments) = write_fixture_csvs(tmp.path());

        Self {
            _tmp: tmp,
            home,
            employees,
            departments,
        }
    }

    /// Binary with an isolated HOME, no source args.
    pub fn raw_cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("headcount");
        cmd.env("HOME", &self.home);
        cmd
    }

    /// Binary pointed at the fixture CSV files.
    pub fn cmd(&self) -> Command {
        let mut cmd = self.raw_cmd();
        cmd.arg("--employees")
            .arg(&self.employees)
            .arg("--departments")
            .arg(&self.departments);
        cmd
    }

    pub fn run_json(&self, extra: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(extra)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn overwrite_employees(&self, content: &str) {
        fs::write(&self.employees, content).expect("overwrite employees fixture");
    }
}

/// Five employees across departments 20 and 30, one with no department,
/// plus an employee-less department 40. Salaries are picked so the
/// quartiles land on whole order statistics:
/// [1000, 3000, 3000, 5000, 9000] -> mean 4200, median 3000, q25 3000, q75 5000.
fn write_fixture_csvs(base: &Path) -> (PathBuf, PathBuf) {
    let employees = base.join("employees.csv");
    let departments = base.join("departments.csv");

    fs::write(
        &employees,
        "EMPLOYEE_ID,FIRST_NAME,LAST_NAME,EMAIL,PHONE_NUMBER,HIRE_DATE,JOB_ID,SALARY,COMMISSION_PCT,MANAGER_ID,DEPARTMENT_ID\n\
         1,Steven,King,SKING,515.123.4567,17-JUN-03,AD_PRES,1000,,100,20\n\
         2,Neena,Kochhar,NKOCHHAR,,21-SEP-05,AD_VP,3000,,100,30\n\
         3,Lex,De Haan,LDEHAAN,   ,13-JAN-01,AD_VP,3000,,100,20\n\
         4,Alexander,Hunold,AHUNOLD,801.111.2222,03-JAN-06,IT_PROG,5000,,102,30\n\
         5,Bruce,Ernst,BERNST,,21-MAY-07,IT_PROG,9000,,103,\n",
    )
    .expect("write employees fixture");

    fs::write(
        &departments,
        "DEPARTMENT_ID,DEPARTMENT_NAME,MANAGER_ID,LOCATION_ID\n\
         20,Marketing,201,1800\n\
         30,Purchasing,114,1700\n\
         40,Human Resources,203,2400\n",
    )
    .expect("write departments fixture");

    (employees, departments)
}
