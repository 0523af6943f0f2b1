use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("csv2sql"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn inserts_use_file_stem_as_table() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("people.csv");
    fs::write(&input, "1,\"O'Brien, Pat\",\n\n2,null,NOW()\r\n")?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("csv2sql"))
        .arg(&input)
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    assert_eq!(
        out,
        "insert into people values ('1','O''Brien, Pat',null);\n\n\
         insert into people values ('2',null,NOW());\n\n"
    );
    Ok(())
}

#[test]
fn delete_skip_and_columns() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("data.csv");
    fs::write(&input, "id,name\n7,x\n")?;

    Command::new(assert_cmd::cargo::cargo_bin!("csv2sql"))
        .arg(&input)
        .args(["--table", "items", "--delete", "--skip", "1", "--columns", "id, name"])
        .assert()
        .success()
        .stdout("\ndelete from items;\n\ninsert into items (id, name) values ('7','x');\n\n");
    Ok(())
}

#[test]
fn saved_columns_are_reused() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("t.csv");
    fs::write(&input, "a\n")?;

    Command::new(assert_cmd::cargo::cargo_bin!("csv2sql"))
        .arg(&input)
        .args(["--columns", "c1", "--save-columns"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(dir.path().join("t.clm.txt"))?, "c1");

    Command::new(assert_cmd::cargo::cargo_bin!("csv2sql"))
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("insert into t (c1) values ('a');"));

    Command::new(assert_cmd::cargo::cargo_bin!("csv2sql"))
        .arg(&input)
        .arg("--no-columns")
        .assert()
        .success()
        .stdout(predicate::str::contains("insert into t values ('a');"));
    Ok(())
}

#[test]
fn column_specs_and_output_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("t.csv");
    let out_path = dir.path().join("t.sql");
    fs::write(&input, "a|42|\n")?;

    Command::new(assert_cmd::cargo::cargo_bin!("csv2sql"))
        .arg(&input)
        .args(["--delimiter", "pipe", "--column", "1=noquote", "--column", "2=blank"])
        .arg("--crlf")
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert_eq!(
        fs::read_to_string(&out_path)?,
        "insert into t values ('a',42,'');\r\n\r\n"
    );
    Ok(())
}

#[test]
fn formats_file_is_applied() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("t.csv");
    let formats = dir.path().join("formats.json");
    fs::write(&input, "5,x\n")?;
    fs::write(&formats, r#"{"0": {"quote_output": false}}"#)?;

    Command::new(assert_cmd::cargo::cargo_bin!("csv2sql"))
        .arg(&input)
        .arg("--formats")
        .arg(&formats)
        .assert()
        .success()
        .stdout("insert into t values (5,'x');\n\n");
    Ok(())
}

#[test]
fn preview_prints_raw_rows_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("t.csv");
    fs::write(&input, "\"a,b\",c\n\"multi\nline\"\n")?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("csv2sql"))
        .arg(&input)
        .arg("--preview")
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    let rows: Vec<serde_json::Value> = out
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;
    assert_eq!(
        rows,
        vec![
            serde_json::json!(["a,b", "c"]),
            serde_json::json!(["multi\nline"]),
        ]
    );
    Ok(())
}

#[test]
fn bad_column_spec_and_missing_input_fail() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("t.csv");
    fs::write(&input, "a\n")?;

    Command::new(assert_cmd::cargo::cargo_bin!("csv2sql"))
        .arg(&input)
        .args(["--column", "1=sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sideways"));

    Command::new(assert_cmd::cargo::cargo_bin!("csv2sql"))
        .arg(dir.path().join("missing.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.csv"));
    Ok(())
}

#[test]
fn empty_input_yields_empty_script() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("t.csv");
    fs::write(&input, "")?;

    Command::new(assert_cmd::cargo::cargo_bin!("csv2sql"))
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}
