//! Runs of the `fastbound-import` binary: exit status, stderr and output file.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

fn fastbound_import() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fastbound-import"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_sheet(path: &Path, headers: &[&str], rows: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).expect("write header");
    }
    for (row_idx, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            sheet
                .write_string((row_idx + 1) as u32, col as u16, *value)
                .expect("write cell");
        }
    }
    workbook.save(path).expect("save workbook");
}

struct Run {
    dir: TempDir,
    atf: PathBuf,
    fastbound: PathBuf,
    out: PathBuf,
}

impl Run {
    fn new(template: &[&str]) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let atf = dir.path().join("atf.xlsx");
        let fastbound = dir.path().join("fastbound.xlsx");
        let out = dir.path().join("out.xlsx");
        write_sheet(
            &atf,
            &["Serial", "Maker"],
            &[&["A100", "Ruger"], &["B200", "Colt"]],
        );
        write_sheet(&fastbound, template, &[]);
        Self {
            dir,
            atf,
            fastbound,
            out,
        }
    }

    fn run(&self, extra: &[&str]) -> Output {
        fastbound_import()
            .arg("--atf")
            .arg(&self.atf)
            .arg("--fastbound")
            .arg(&self.fastbound)
            .arg("--out")
            .arg(&self.out)
            .args(["--color", "never"])
            .args(extra)
            .current_dir(self.dir.path())
            .output()
            .expect("run fastbound-import")
    }
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn success_logs_done_and_totals() {
    let run = Run::new(&["Serial Number", "Manufacturer"]);

    let output = run.run(&["--strict"]);

    let stderr = stderr(&output);
    assert_eq!(output.status.code(), Some(0), "stderr: {stderr}");
    assert!(stderr.contains("Done"), "stderr: {stderr}");
    assert!(stderr.contains("FastBound columns"), "stderr: {stderr}");
    assert!(run.out.exists());
}

#[test]
fn unmapped_columns_without_strict_still_succeed() {
    let run = Run::new(&["Serial Number", "Cost"]);

    let output = run.run(&[]);

    let stderr = stderr(&output);
    assert_eq!(output.status.code(), Some(0), "stderr: {stderr}");
    assert!(stderr.contains("Done"), "stderr: {stderr}");
}

#[test]
fn strict_failure_exits_two_without_done() {
    let run = Run::new(&["Serial Number", "Cost"]);

    let output = run.run(&["--strict"]);

    let stderr = stderr(&output);
    assert_eq!(output.status.code(), Some(2), "stderr: {stderr}");
    assert!(
        stderr.contains("error: 1 FastBound columns were not mapped. See 'Mapping Report'."),
        "stderr: {stderr}"
    );
    assert!(!stderr.contains("Done"), "stderr: {stderr}");
    assert!(run.out.exists());
}

#[test]
fn missing_input_exits_one() {
    let run = Run::new(&["Serial Number"]);
    std::fs::remove_file(&run.atf).expect("remove atf");

    let output = run.run(&[]);

    let stderr = stderr(&output);
    assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
    assert!(stderr.contains("error: ATF record not found"), "stderr: {stderr}");
    assert!(!stderr.contains("Done"), "stderr: {stderr}");
    assert!(!run.out.exists());
}
