use csv2sql::ParseOptions;
use csv2sql::decode::parser::Parser;
use csv2sql::decode::scanner::Action;

#[test]
fn parser_builds_records_from_actions() {
    let options = ParseOptions::default();
    let mut parser = Parser::new(&options);
    for action in [
        Action::Keep('a'),
        Action::EndField,
        Action::Keep(' '),
        Action::Keep('b'),
        Action::EndLine,
        Action::EndLine,
        Action::Keep('c'),
    ] {
        parser.feed(action);
    }
    let records = parser.finish();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].raw_values(), vec!["a", "b"]);
    assert_eq!(records[1].raw_values(), vec!["c"]);
}

#[test]
fn lone_literal_quote_becomes_empty_field() {
    let options = ParseOptions::default();
    let mut parser = Parser::new(&options);
    parser.feed(Action::LiteralQuote);
    let records = parser.finish();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].raw_values(), vec![""]);
}

#[test]
fn no_actions_no_records() {
    let options = ParseOptions::default();
    assert!(Parser::new(&options).finish().is_empty());
}
