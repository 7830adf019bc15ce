//! Tests for shared value types

use code_dbg_core::types::{EditorChannel, ProcessId};

#[test]
fn test_process_id_from_u32()
{
    let pid = ProcessId::from(12345);
    assert_eq!(pid.0, 12345);
    assert_eq!(pid.to_string(), "12345");
}

#[test]
fn test_process_id_to_u32()
{
    let pid = ProcessId::from(54321);
    let value: u32 = pid.into();
    assert_eq!(value, 54321);
}

#[test]
fn test_process_id_current()
{
    assert_eq!(ProcessId::current().raw(), std::process::id());
}

#[test]
fn test_channel_scheme_and_command()
{
    assert_eq!(EditorChannel::Stable.scheme(), "vscode");
    assert_eq!(EditorChannel::Stable.command(), "code");
    assert_eq!(EditorChannel::Insiders.scheme(), "vscode-insiders");
    assert_eq!(EditorChannel::Insiders.command(), "code-insiders");
    assert_eq!(EditorChannel::default(), EditorChannel::Stable);
}

#[test]
fn test_channel_from_scheme()
{
    assert_eq!(EditorChannel::from_scheme("vscode"), Some(EditorChannel::Stable));
    assert_eq!(EditorChannel::from_scheme("vscode-insiders"), Some(EditorChannel::Insiders));
    assert_eq!(EditorChannel::from_scheme("https"), None);
}

#[test]
fn test_channel_from_str()
{
    assert_eq!("Insiders".parse::<EditorChannel>().unwrap(), EditorChannel::Insiders);
    assert_eq!("code".parse::<EditorChannel>().unwrap(), EditorChannel::Stable);
    assert!("nightly".parse::<EditorChannel>().is_err());
}
