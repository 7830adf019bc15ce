//! Runs the built fixture the way a debug session would

use std::process::Command;

use code_dbg_core::fixture::{Status, VerificationBlock, LOG_FILE_NAME, OUTPUT_DIR_ENV};

fn hello_target() -> Command
{
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hello-target"));
    cmd.env_remove("CODE_DBG_LOG_FILE");
    cmd
}

#[test]
fn test_report_and_log_with_arguments()
{
    let dir = tempfile::tempdir().unwrap();
    let out = hello_target()
        .args(["alpha", "beta gamma", "--flag=1"])
        .env(OUTPUT_DIR_ENV, dir.path())
        .output()
        .expect("failed to run hello-target");

    assert!(
        out.status.success(),
        "hello-target exited non-zero: {:?}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stderr)
    );

    let stdout = String::from_utf8_lossy(&out.stdout);
    let log_path = dir.path().join(LOG_FILE_NAME);
    assert!(stdout.contains(&format!("Output Log File: {}", log_path.display())));
    assert!(stdout.contains("  Command Line Arguments: 4\n"));
    assert!(stdout.contains("    [2]: beta gamma\n"));
    assert!(stdout.contains("  Loop iteration 5: sum = 30\n"));
    assert!(stdout.contains("Application completed successfully!"));
    assert!(!stdout.contains("E2E_TEST_OUTPUT"));

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("  PID: "));
    let block = VerificationBlock::parse(&log).unwrap();
    assert_eq!(block.argc, 4);
    assert_eq!(&block.argv[1..], ["alpha", "beta gamma", "--flag=1"]);
    assert_eq!(block.sum, 30);
    assert_eq!(block.status, Status::Success);
}

#[test]
fn test_no_arguments()
{
    let dir = tempfile::tempdir().unwrap();
    let out = hello_target()
        .env(OUTPUT_DIR_ENV, dir.path())
        .output()
        .expect("failed to run hello-target");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("  Command Line Arguments: 1\n  (no arguments)\n"));

    let log = std::fs::read_to_string(dir.path().join(LOG_FILE_NAME)).unwrap();
    let block = VerificationBlock::parse(&log).unwrap();
    assert_eq!(block.argc, 1);
}

#[test]
fn test_empty_output_dir_uses_working_directory()
{
    let dir = tempfile::tempdir().unwrap();
    let out = hello_target()
        .current_dir(dir.path())
        .env(OUTPUT_DIR_ENV, "")
        .output()
        .expect("failed to run hello-target");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with(&format!("📝 Output Log File: {LOG_FILE_NAME}\n")));
    assert!(dir.path().join(LOG_FILE_NAME).exists());
}

#[test]
fn test_unwritable_log_still_succeeds()
{
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-dir");
    let out = hello_target()
        .arg("x")
        .env(OUTPUT_DIR_ENV, &missing)
        .output()
        .expect("failed to run hello-target");

    assert!(out.status.success(), "a missing log directory must not fail the run");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("ERROR: Could not create log file at: "));
    assert!(stdout.contains("Final Result: 30"));
    assert!(!missing.exists());
}

#[test]
fn test_unusable_diagnostic_log_still_succeeds()
{
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the diagnostic log's directory should be
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_hello-target"))
        .env("CODE_DBG_LOG_FILE", blocker.join("diag.log"))
        .env(OUTPUT_DIR_ENV, dir.path())
        .output()
        .expect("failed to run hello-target");

    assert!(
        out.status.success(),
        "a broken diagnostic log must not fail the run: {:?}",
        out.status.code()
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Final Result: 30"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to initialize logging"));

    let log = std::fs::read_to_string(dir.path().join(LOG_FILE_NAME)).unwrap();
    assert_eq!(VerificationBlock::parse(&log).unwrap().sum, 30);
}

#[cfg(target_os = "linux")]
#[test]
fn test_full_disk_log_still_succeeds()
{
    let dir = tempfile::tempdir().unwrap();
    std::os::unix::fs::symlink("/dev/full", dir.path().join(LOG_FILE_NAME)).unwrap();

    let out = hello_target()
        .arg("x")
        .env(OUTPUT_DIR_ENV, dir.path())
        .output()
        .expect("failed to run hello-target");

    assert!(out.status.success(), "a full disk must not fail the run");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("ERROR: Could not create log file"));
    assert!(stdout.contains("  Loop iteration 5: sum = 30\n"));
    assert!(stdout.contains("Application completed successfully!"));
}
