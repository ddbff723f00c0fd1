use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn full_run_prints_all_seven_answers() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--no-pause")
        .assert()
        .success()
        .stdout(contains("Data loaded and prepared."))
        .stdout(contains("1 - The average, median, lower and upper quartiles"))
        .stdout(contains("2 - The average salary per department"))
        .stdout(contains("3 - Salaries against the global average"))
        .stdout(contains("4 - Salaries against each department's average"))
        .stdout(contains("5 - Employees of department 20"))
        .stdout(contains("6 - Salaries in department 20 raised by 10%"))
        .stdout(contains("7 - Employees with an empty PHONE_NUMBER"));
}

#[test]
fn pauses_accept_piped_input() {
    let env = TestEnv::new();
    env.cmd()
        .write_stdin("\n\n\n\n\n\n\n")
        .assert()
        .success()
        .stdout(contains("Press Enter to continue to the first answer"));
}

#[test]
fn missing_employees_file_fails_with_message() {
    let env = TestEnv::new();
    env.raw_cmd()
        .arg("--employees")
        .arg("/nonexistent/employees.csv")
        .arg("--departments")
        .arg(&env.departments)
        .assert()
        .failure()
        .stderr(contains("file not found"))
        .stderr(contains("Ending the session."));
}

#[test]
fn empty_employees_csv_fails_with_message() {
    let env = TestEnv::new();
    env.overwrite_employees("");
    env.cmd()
        .arg("--no-pause")
        .assert()
        .failure()
        .stderr(contains("empty CSV content"));
}

#[test]
fn schema_mismatch_names_the_offending_column() {
    let env = TestEnv::new();
    env.overwrite_employees(
        "EMPLOYEE_ID,NICKNAME,FIRST_NAME,LAST_NAME,EMAIL,PHONE_NUMBER,HIRE_DATE,JOB_ID,SALARY,COMMISSION_PCT,MANAGER_ID,DEPARTMENT_ID\n\
         1,Stevie,Steven,King,SKING,515.123.4567,17-JUN-03,AD_PRES,1000,,100,20\n",
    );
    env.cmd()
        .arg("--no-pause")
        .assert()
        .failure()
        .stderr(contains("employees data columns mismatch"))
        .stderr(contains("NICKNAME"));
}
