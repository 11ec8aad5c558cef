//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

//! Exit codes and output of the renaming binaries.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const ADDER: &str = "module adder(a, b, sum);\nendmodule // adder\n";

#[allow(deprecated)]
fn rename_module() -> Command {
    Command::cargo_bin("rename-module").unwrap()
}

#[allow(deprecated)]
fn rtlcurate() -> Command {
    Command::cargo_bin("rtlcurate").unwrap()
}

fn write_adder(dir: &Path) -> String {
    let file = dir.join("foo.v");
    fs::write(&file, ADDER).unwrap();
    file.display().to_string()
}

#[test]
fn too_few_arguments_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_adder(dir.path());
    rename_module()
        .args([file.as_str(), "adder"])
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&file).unwrap(), ADDER);
}

#[test]
fn too_many_arguments_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_adder(dir.path());
    rename_module()
        .args([file.as_str(), "adder", "adder2", "adder3"])
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&file).unwrap(), ADDER);
    assert_eq!(dir.path().join("foo.v.bak").exists(), false);
}

#[test]
fn rename_module_renames() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_adder(dir.path());
    rename_module()
        .args([file.as_str(), "adder", "adder2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("renamed module \"adder\" to \"adder2\""));
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "module adder2(a, b, sum);\nendmodule // adder2\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("foo.v.bak")).unwrap(),
        ADDER
    );
}

#[test]
fn no_match_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_adder(dir.path());
    rename_module()
        .args([file.as_str(), "relu", "relu2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no module named \"relu\""));
    assert_eq!(fs::read_to_string(&file).unwrap(), ADDER);
}

#[test]
fn missing_file_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("nope.v");
    rename_module()
        .arg(&file)
        .args(["adder", "adder2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("does not exist"));
    assert_eq!(file.exists(), false);
}

#[test]
fn directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    rename_module()
        .arg(dir.path())
        .args(["adder", "adder2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a directory"));
}

#[test]
fn strict_no_match_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_adder(dir.path());
    rtlcurate()
        .args(["rename", "--strict", file.as_str(), "relu", "relu2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no module named \"relu\""));
    assert_eq!(fs::read_to_string(&file).unwrap(), ADDER);
}

#[test]
fn strict_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("nope.v");
    rtlcurate()
        .args(["rename", "--strict"])
        .arg(&file)
        .args(["adder", "adder2"])
        .assert()
        .failure();
}

#[test]
fn rename_without_strict_exits_zero_on_no_match() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_adder(dir.path());
    rtlcurate()
        .args(["rename", file.as_str(), "relu", "relu2"])
        .assert()
        .success();
}
