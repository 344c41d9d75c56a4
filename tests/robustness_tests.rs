use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_malformed_rows_are_skipped() {
    let file = common::script(&[
        "add, , Watch, 500",
        "shoplift, , ,",
        "edit, one, ,",
        "add, , Bag, 200",
    ]);

    let mut cmd = Command::new(cargo_bin!("shoplist"));
    cmd.arg(file.path());

    // Both bad rows are reported; the adds on either side still land.
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading action"))
        .stdout(predicate::str::contains("+ 0. Watch: 500 $"))
        .stdout(predicate::str::contains("+ 1. Bag: 200 $"))
        .stdout(predicate::str::contains("total: 700 $"));
}

#[test]
fn test_add_with_empty_name_is_rejected() {
    let file = common::script(&["add, , , 500", "add, , Watch, 500"]);

    let mut cmd = Command::new(cargo_bin!("shoplist"));
    cmd.arg(file.path());

    // The rejected add consumes no id.
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Action rejected"))
        .stdout(predicate::str::contains("+ 0. Watch: 500 $"))
        .stdout(predicate::str::contains("total: 500 $"));
}

#[test]
fn test_add_with_unparsable_price_is_rejected() {
    let file = common::script(&["add, , Watch, expensive"]);

    let mut cmd = Command::new(cargo_bin!("shoplist"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Invalid price"))
        .stdout(predicate::str::contains("+").not())
        .stdout(predicate::str::contains("total: 0 $"));
}

#[test]
fn test_empty_script_shows_only_the_initial_screen() {
    let file = common::script(&[]);

    let mut cmd = Command::new(cargo_bin!("shoplist"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(no items)"))
        .stdout(predicate::str::contains("total: 0 $"));
}

#[test]
fn test_negative_prices_flow_into_the_total() {
    let file = common::script(&["add, , Watch, 500", "add, , Voucher, -100"]);

    let mut cmd = Command::new(cargo_bin!("shoplist"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("+ 1. Voucher: -100 $"))
        .stdout(predicate::str::contains("total: 400 $"));
}
