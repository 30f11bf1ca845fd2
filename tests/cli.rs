// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn write_sample(path: &Path) {
    let image = RgbImage::from_fn(8, 6, |x, y| {
        Rgb([(x * 30) as u8, (y * 40) as u8, ((x * y) % 256) as u8])
    });
    image.save(path).unwrap();
}

#[test]
fn carves_to_the_requested_size() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_sample(&input);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(["--width", "5", "--height", "4"])
        .assert()
        .success();

    let carved = image::open(&output).unwrap().to_rgb8();
    assert_eq!(carved.dimensions(), (5, 4));
}

#[test]
fn writes_an_energy_map() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("energy.png");
    write_sample(&input);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .arg("--energy")
        .assert()
        .success();

    let energy = image::open(&output).unwrap().to_luma8();
    assert_eq!(energy.dimensions(), (8, 6));
    // The border is the brightest thing in the map.
    assert_eq!(energy.get_pixel(0, 0).0, [255]);
}

#[test]
fn refuses_to_enlarge() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_sample(&input);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(["--width", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot enlarge"));
    assert!(!output.exists());
}

#[test]
fn reports_a_missing_input() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(dir.path().join("nowhere.png"))
        .arg(dir.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}
