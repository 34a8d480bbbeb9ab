mod common;

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use common::write_uniform_png;
use imgconv::image::TENSOR_BYTES;

fn imgconv(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_imgconv"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn imgconv_in(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_imgconv"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn converts_image_to_tensor_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_uniform_png(dir.path(), "in.png", 400, 300, [128, 128, 128]);
    let output = dir.path().join("out.bin");

    let result = imgconv(&[input.as_os_str(), output.as_os_str()]);

    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    assert_eq!(fs::metadata(&output).unwrap().len(), TENSOR_BYTES as u64);
}

#[test]
fn one_argument_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_uniform_png(dir.path(), "in.png", 4, 4, [0, 0, 0]);

    let result = imgconv(&[input.as_os_str()]);

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stdout).starts_with("Usage: imgconv"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn three_arguments_print_usage() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_uniform_png(dir.path(), "in.png", 4, 4, [0, 0, 0]);
    let output = dir.path().join("out.bin");
    let extra = dir.path().join("extra.bin");

    let result = imgconv(&[input.as_os_str(), output.as_os_str(), extra.as_os_str()]);

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stdout).starts_with("Usage: imgconv"));
    assert!(!output.exists());
    assert!(!extra.exists());
}

#[test]
fn no_arguments_print_usage() {
    let result = imgconv(&[]);

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stdout).starts_with("Usage: imgconv"));
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nope.png");
    let output = dir.path().join("out.bin");

    let result = imgconv(&[input.as_os_str(), output.as_os_str()]);

    assert!(!result.status.success());
    assert!(!output.exists());
    assert!(String::from_utf8_lossy(&result.stderr).contains("nope.png"));
}

#[test]
fn hyphen_prefixed_paths_are_positionals() {
    let dir = tempfile::tempdir().unwrap();
    write_uniform_png(dir.path(), "-dash.png", 10, 12, [5, 6, 7]);

    let result = imgconv_in(dir.path(), &["-dash.png", "-dash.bin"]);

    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    assert_eq!(
        fs::metadata(dir.path().join("-dash.bin")).unwrap().len(),
        TENSOR_BYTES as u64
    );
}

#[test]
fn help_flag_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = imgconv_in(dir.path(), &["--help"]);

    assert_eq!(result.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&result.stdout),
        "Usage: imgconv <input file> <output file>\n"
    );
}

#[test]
fn trailing_flag_counts_as_third_argument() {
    let dir = tempfile::tempdir().unwrap();
    write_uniform_png(dir.path(), "in.png", 4, 4, [0, 0, 0]);

    let result = imgconv_in(dir.path(), &["in.png", "out.bin", "-v"]);

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stdout).starts_with("Usage: imgconv"));
    assert!(!dir.path().join("out.bin").exists());
}
