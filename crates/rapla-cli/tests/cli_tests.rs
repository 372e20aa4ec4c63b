//! End-to-end CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const EXPORT: &str = r##"
<table class="week_table">
  <tr>
    <th class="week_number">KW 37</th>
    <td class="week_header" colspan="3">Mo 08.09.</td>
    <td class="week_header" colspan="3">Di 09.09.</td>
  </tr>
  <tr>
    <td class="week_block" colspan="2">
      <a href="#">09:00&#160;-&#160;10:30<br>Algorithms</a>
      <span class="resource">CS101</span><span class="resource">Room 4</span>
    </td>
    <td class="week_smallseparatorcell"></td>
    <td class="week_block" colspan="2">
      <a href="#">14:00&#160;-&#160;15:30<br>Databases</a>
    </td>
  </tr>
</table>
"##;

fn export_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(EXPORT.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn rapla() -> Command {
    Command::cargo_bin("rapla").unwrap()
}

#[test]
fn convert_to_json() {
    let file = export_file();
    rapla()
        .args(["convert", file.path().to_str().unwrap()])
        .args(["--to", "json", "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"weeks\""))
        .stdout(predicate::str::contains("\"title\": \"Algorithms\""))
        .stdout(predicate::str::contains("\"date\": \"2025-09-08\""))
        .stdout(predicate::str::contains("\"room\": \"Room 4\""));
}

#[test]
fn convert_summary_lists_week() {
    let file = export_file();
    rapla()
        .args(["convert", file.path().to_str().unwrap(), "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("KW 37"))
        .stdout(predicate::str::contains("Algorithms"))
        .stdout(predicate::str::contains("Databases"));
}

#[test]
fn convert_reads_stdin() {
    rapla()
        .args(["convert", "-", "--to", "json", "--year", "2025"])
        .write_stdin(EXPORT)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Databases\""));
}

#[test]
fn titles_are_sorted_and_distinct() {
    let file = export_file();
    rapla()
        .args(["titles", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("Algorithms\nDatabases\n");
}

#[test]
fn agenda_filters_by_date() {
    let file = export_file();
    rapla()
        .args(["agenda", file.path().to_str().unwrap()])
        .args(["--from", "2025-09-09", "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Databases"))
        .stdout(predicate::str::contains("Algorithms").not());
}

#[test]
fn missing_file_fails_with_context() {
    rapla()
        .args(["convert", "/no/such/export.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn empty_input_fails_with_parse_error() {
    rapla()
        .args(["convert", "-"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty document"));
}
