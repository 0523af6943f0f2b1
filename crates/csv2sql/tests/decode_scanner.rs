use csv2sql::decode::scanner::{Action, ScanState, scan};

#[test]
fn scan_quoted_field_with_separator_and_newline() {
    let actions: Vec<Action> = scan("\"a,\n\",b\n", ',').collect();
    assert_eq!(
        actions,
        vec![
            Action::Enter(ScanState::InQuote),
            Action::Keep('a'),
            Action::Keep(','),
            Action::Keep('\n'),
            Action::Enter(ScanState::Normal),
            Action::EndField,
            Action::Keep('b'),
            Action::EndLine,
        ]
    );
}

#[test]
fn crlf_is_two_line_ends() {
    let actions: Vec<Action> = scan("x\r\n", ',').collect();
    assert_eq!(actions, vec![Action::Keep('x'), Action::EndLine, Action::EndLine]);
}

#[test]
fn empty_quotes_read_as_one_literal_quote() {
    let actions: Vec<Action> = scan("\"\"", ',').collect();
    assert_eq!(actions, vec![Action::LiteralQuote]);
}

#[test]
fn backslash_is_ordinary_text() {
    let actions: Vec<Action> = scan("\\,", ',').collect();
    assert_eq!(actions, vec![Action::Keep('\\'), Action::EndField]);
}
