use core::iter::Peekable;
use core::str::Chars;

pub const QUOTE: char = '"';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Normal,
    InQuote,
}

impl ScanState {
    fn toggled(self) -> Self {
        match self {
            ScanState::Normal => ScanState::InQuote,
            ScanState::InQuote => ScanState::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append one literal `"`; the second quote of the pair is consumed.
    LiteralQuote,
    /// Enter the given state. The quote itself is dropped.
    Enter(ScanState),
    /// Unquoted separator.
    EndField,
    /// Unquoted `\n` or `\r`.
    EndLine,
    /// Append the character to the field text.
    Keep(char),
}

/// One transition. `next` is only consulted to spot a doubled quote.
pub fn step(state: ScanState, ch: char, next: Option<char>, separator: char) -> Action {
    match (ch, state) {
        (QUOTE, _) if next == Some(QUOTE) => Action::LiteralQuote,
        (QUOTE, s) => Action::Enter(s.toggled()),
        (c, ScanState::Normal) if c == separator => Action::EndField,
        ('\n' | '\r', ScanState::Normal) => Action::EndLine,
        (c, _) => Action::Keep(c),
    }
}

/// Walks the input left to right, yielding one [`Action`] per transition.
pub struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    state: ScanState,
    separator: char,
}

pub fn scan(input: &str, separator: char) -> Scanner<'_> {
    Scanner {
        chars: input.chars().peekable(),
        state: ScanState::Normal,
        separator,
    }
}

impl Scanner<'_> {
    pub fn state(&self) -> ScanState {
        self.state
    }
}

impl Iterator for Scanner<'_> {
    type Item = Action;

    fn next(&mut self) -> Option<Action> {
        let ch = self.chars.next()?;
        let action = step(self.state, ch, self.chars.peek().copied(), self.separator);
        match action {
            Action::LiteralQuote => {
                self.chars.next();
            }
            Action::Enter(state) => self.state = state,
            _ => {}
        }
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_and_newlines_are_literal_inside_quotes() {
        for ch in [',', '\n', '\r'] {
            assert_eq!(step(ScanState::InQuote, ch, None, ','), Action::Keep(ch));
        }
        assert_eq!(step(ScanState::Normal, ',', None, ','), Action::EndField);
        assert_eq!(step(ScanState::Normal, '\r', Some('\n'), ','), Action::EndLine);
    }

    #[test]
    fn doubled_quote_wins_over_toggle_in_both_states() {
        for state in [ScanState::Normal, ScanState::InQuote] {
            assert_eq!(step(state, '"', Some('"'), ','), Action::LiteralQuote);
        }
        assert_eq!(
            step(ScanState::Normal, '"', Some('a'), ','),
            Action::Enter(ScanState::InQuote)
        );
        assert_eq!(
            step(ScanState::InQuote, '"', None, ','),
            Action::Enter(ScanState::Normal)
        );
    }

    #[test]
    fn scanner_consumes_both_quotes_of_a_pair() {
        let actions: Vec<_> = scan(r#""a""b""#, ',').collect();
        assert_eq!(
            actions,
            vec![
                Action::Enter(ScanState::InQuote),
                Action::Keep('a'),
                Action::LiteralQuote,
                Action::Keep('b'),
                Action::Enter(ScanState::Normal),
            ]
        );
    }

    #[test]
    fn unterminated_quote_leaves_scanner_in_quote() {
        let mut sc = scan("\"abc,", ',');
        while sc.next().is_some() {}
        assert_eq!(sc.state(), ScanState::InQuote);
    }

    #[test]
    fn alternate_separator() {
        assert_eq!(step(ScanState::Normal, '\t', None, '\t'), Action::EndField);
        assert_eq!(step(ScanState::Normal, ',', None, '\t'), Action::Keep(','));
    }
}
