use pretty_assertions::assert_eq;

use super::{Mode, Options, UsageError};

fn parse(args: &[&str]) -> Result<Options, UsageError> {
    let owned: Vec<String> = args.iter().map(|s| (*s).to_owned()).collect();
    Options::parse(&owned)
}

#[test]
fn no_args_reads_stdin() {
    assert_eq!(parse(&[]).unwrap(), Options::default());
}

#[test]
fn text_is_joined_with_spaces() {
    let options = parse(&["say", "'hi", "there'"]).unwrap();
    assert_eq!(options.text.as_deref(), Some("say 'hi there'"));
    assert_eq!(options.mode, Mode::Standard);
}

#[test]
fn lenient_flag() {
    assert_eq!(parse(&["--lenient"]).unwrap().mode, Mode::Lenient);
    assert_eq!(parse(&["-l", "x"]).unwrap().mode, Mode::Lenient);
}

#[test]
fn double_dash_ends_flags() {
    let options = parse(&["--", "--lenient", "-x"]).unwrap();
    assert_eq!(options.mode, Mode::Standard);
    assert_eq!(options.text.as_deref(), Some("--lenient -x"));
}

#[test]
fn lone_dash_is_text() {
    assert_eq!(parse(&["-"]).unwrap().text.as_deref(), Some("-"));
}

#[test]
fn help_flag() {
    assert_eq!(parse(&["x", "--help"]), Err(UsageError::Help));
}

#[test]
fn unknown_option_is_rejected() {
    assert_eq!(
        parse(&["--strict"]),
        Err(UsageError::UnknownOption("--strict".to_owned()))
    );
}

#[test]
fn mode_selects_entry_point() {
    assert_eq!(Mode::Standard.tokenize("").unwrap(), Vec::<String>::new());
    assert_eq!(Mode::Lenient.tokenize("").unwrap(), vec![String::new()]);
}
