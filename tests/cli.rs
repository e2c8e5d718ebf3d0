extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn writes_the_requested_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.ppm");
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["-o", path.to_str().unwrap(), "-s", "32x20", "-i", "50", "-t", "3"])
        .assert()
        .success();

    let bytes = fs::read(&path).unwrap();
    let header = b"P6\n32 20\n65535\n";
    assert_eq!(&bytes[..header.len()], &header[..]);
    assert_eq!(bytes.len(), header.len() + 32 * 20 * 6);
}

#[test]
fn accepts_a_negative_viewport_origin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zoom.ppm");
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["-o", path.to_str().unwrap(), "-s", "8x8", "-m", "-0.8,-0.2", "-w", "0.4"])
        .assert()
        .success();
    assert!(path.exists());
}

#[test]
fn rejects_a_malformed_size() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["-o", "never.ppm", "-s", "32by20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
}

#[test]
fn rejects_zero_threads() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["-o", "never.ppm", "-t", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread count must be between 1 and"));
}

#[test]
fn reports_an_unwritable_destination() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.ppm");
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["-o", path.to_str().unwrap(), "-s", "4x4", "-i", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure"));
}
