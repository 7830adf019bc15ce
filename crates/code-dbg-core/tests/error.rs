//! Tests for error handling

use std::path::PathBuf;

use code_dbg_core::error::{CodeDbgError, CodeDbgResult};

#[test]
fn test_executable_not_found_display()
{
    let error = CodeDbgError::ExecutableNotFound(PathBuf::from("/opt/missing/app"));
    let message = format!("{}", error);
    assert_eq!(message, "Executable not found: /opt/missing/app");
}

#[test]
fn test_editor_not_found_names_command()
{
    let error = CodeDbgError::EditorNotFound {
        command: "code-insiders".to_string(),
    };
    let message = format!("{}", error);
    assert!(message.contains("code-insiders"));
    assert!(message.contains("PATH"));
}

#[test]
fn test_launch_failed_display()
{
    let error = CodeDbgError::LaunchFailed("exit status: 1".to_string());
    let message = format!("{}", error);
    assert!(message.starts_with("Failed to launch VS Code"));
    assert!(message.contains("exit status: 1"));
}

#[test]
fn test_io_error_converts()
{
    fn fails() -> CodeDbgResult<()>
    {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))?;
        Ok(())
    }

    match fails() {
        Err(CodeDbgError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
        other => panic!("Expected Io variant, got {other:?}"),
    }
}

#[test]
fn test_json_error_converts()
{
    let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
    let error: CodeDbgError = json_err.into();
    assert!(matches!(error, CodeDbgError::PayloadJson(_)));
}

#[test]
fn test_result_type()
{
    // Test that Result type is properly aliased
    let _result: CodeDbgResult<()> = Ok(());
    let _error_result: CodeDbgResult<()> = Err(CodeDbgError::Verification("no header".to_string()));
}
