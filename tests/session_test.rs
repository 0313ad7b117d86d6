use std::io::Cursor;
use volume_calc::{
    DimensionInputs, OutputFormat, Session, Settings, SharedWriter, TomlConfig, ViewState,
};

fn quiet_settings(output: OutputFormat) -> Settings {
    Settings {
        output,
        prompt: String::new(),
        ..Settings::default()
    }
}

fn transcript(session: &Session<Vec<u8>>) -> String {
    session
        .output()
        .with(|buf| String::from_utf8_lossy(buf).into_owned())
}

#[test]
fn test_interactive_session_computes_and_rotates() {
    let script = "\
length 2
width 3
height 4
calc
rotate
show
height 0.5
=
quit
length 99
calc
";
    let mut session = Session::new(quiet_settings(OutputFormat::Text), Vec::new());
    session.run(Cursor::new(script)).unwrap();

    let out = transcript(&session);
    assert_eq!(
        out,
        "Volume: 24\n\
         Volume: 24\n\
         length='2' width='3' height='4' result=24\n\
         Volume: 3\n"
    );
    assert_eq!(session.computations(), 2);
    assert_eq!(session.scope().views_attached(), 2);
    assert_eq!(session.finish(), 2);
}

#[test]
fn test_bad_input_never_surfaces_an_error() {
    let script = "length abc\nwidth\nheight 4\ncalc\n";
    let mut session = Session::new(quiet_settings(OutputFormat::Text), Vec::new());
    session.run(Cursor::new(script)).unwrap();

    assert_eq!(transcript(&session), "Volume: 0\n");
}

#[test]
fn test_unknown_command_prints_hint() {
    let mut session = Session::new(quiet_settings(OutputFormat::Text), Vec::new());
    session.run(Cursor::new("depth 3\n\nshow\n")).unwrap();

    let out = transcript(&session);
    assert!(out.contains("Unknown command 'depth'"));
    assert!(out.contains("result=(none)"));
}

#[test]
fn test_json_output() {
    let mut session = Session::new(quiet_settings(OutputFormat::Json), Vec::new());
    session.run(Cursor::new("l 1\nw 1\nh 1.005\ncalc\n")).unwrap();

    let out = transcript(&session);
    let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(value["volume"], "1.01");
}

#[test]
fn test_json_output_stays_clean_of_messages() {
    let messages = SharedWriter::new(Vec::new());
    let mut session = Session::new(quiet_settings(OutputFormat::Json), Vec::new())
        .with_messages(messages.clone());
    session
        .run(Cursor::new("help\nl 2\nw 3\nh 4\ncalc\nshow\ndepth 1\n"))
        .unwrap();

    let out = transcript(&session);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 1);
    let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(value["volume"], "24");

    let notes = messages.with(|buf| String::from_utf8_lossy(buf).into_owned());
    assert!(notes.contains("Commands:"));
    assert!(notes.contains("length='2' width='3' height='4' result=24"));
    assert!(notes.contains("Unknown command 'depth'"));
}

#[test]
fn test_prompt_is_written_in_text_mode() {
    let settings = Settings {
        prompt: "box> ".to_string(),
        ..Settings::default()
    };
    let mut session = Session::new(settings, Vec::new());
    session.run(Cursor::new("quit\n")).unwrap();

    assert_eq!(transcript(&session), "box> ");
}

#[test]
fn test_run_once_with_configured_tolerance() {
    let file = TomlConfig::from_toml_str("[format]\ninteger_tolerance = 0.0\n").unwrap();
    let settings = Settings::from_toml(&file).unwrap();
    let mut session = Session::new(settings, Vec::new());

    let shown = session.run_once(DimensionInputs::new("0.1", "3", "10"));

    assert_eq!(shown.as_deref(), Some("3.00"));
    assert_eq!(
        session.view().map(|v| v.state()),
        Some(ViewState::ResultShown("3.00".to_string()))
    );
}
