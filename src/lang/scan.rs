use super::{token::*, Column, Error};

type Result<T> = std::result::Result<T, Error>;

/// Split source text into raw tokens. Aborts on the first character that
/// no recognizer accepts.
pub fn scan(s: &str) -> Result<Vec<RawToken>> {
    let tokens = Scanner::new(s).collect::<Result<Vec<RawToken>>>()?;
    tracing::debug!(tokens = tokens.len(), "scanned");
    Ok(tokens)
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

fn is_comparison_char(c: char) -> bool {
    c == '>' || c == '<'
}

fn is_whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Each recognizer either consumes a token or returns `None` without
/// touching the cursor.
trait Recognizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;
    fn col(&mut self) -> &mut usize;

    fn consume_while<F: Fn(char) -> bool>(&mut self, s: &mut String, f: F) {
        while let Some(&ch) = self.chars().peek() {
            if !f(ch) {
                break;
            }
            s.push(ch);
            self.chars().next();
            *self.col() += 1;
        }
    }

    fn emit(&mut self, kind: RawKind, s: String) -> Option<RawToken> {
        let end = *self.col();
        let start = end - s.chars().count();
        Some(RawToken::new(kind, s, start..end))
    }

    fn primitive(&mut self) -> Option<RawToken> {
        match self.chars().peek() {
            Some(&ch) if is_letter(ch) => {}
            _ => return None,
        }
        let mut s = String::new();
        self.consume_while(&mut s, is_name_char);
        self.emit(RawKind::Primitive, s)
    }

    fn number(&mut self) -> Option<RawToken> {
        let mut s = String::new();
        self.consume_while(&mut s, is_number_char);
        if s.is_empty() {
            return None;
        }
        self.emit(RawKind::Number, s)
    }

    fn operation(&mut self) -> Option<RawToken> {
        let ch = *self.chars().peek()?;
        if !is_operator_char(ch) {
            return None;
        }
        self.chars().next();
        *self.col() += 1;
        self.emit(RawKind::Operator, ch.to_string())
    }

    fn comparison(&mut self) -> Option<RawToken> {
        let ch = *self.chars().peek()?;
        if !is_comparison_char(ch) {
            return None;
        }
        let mut s = String::new();
        s.push(ch);
        self.chars().next();
        *self.col() += 1;
        if let Some('=') = self.chars().peek() {
            s.push('=');
            self.chars().next();
            *self.col() += 1;
        }
        self.emit(RawKind::Comparator, s)
    }

    fn whitespace(&mut self) -> bool {
        let mut s = String::new();
        self.consume_while(&mut s, is_whitespace);
        !s.is_empty()
    }
}

struct Scanner<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    col: usize,
    failed: bool,
}

impl<'a> Recognizers<'a> for Scanner<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
    fn col(&mut self) -> &mut usize {
        &mut self.col
    }
}

impl<'a> Scanner<'a> {
    fn new(s: &'a str) -> Scanner<'a> {
        Scanner {
            chars: s.chars().peekable(),
            col: 0,
            failed: false,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<RawToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let pk = *self.chars.peek()?;
            if let Some(t) = self.primitive() {
                return Some(Ok(t));
            }
            if let Some(t) = self.number() {
                return Some(Ok(t));
            }
            if let Some(t) = self.operation() {
                return Some(Ok(t));
            }
            if let Some(t) = self.comparison() {
                return Some(Ok(t));
            }
            if self.whitespace() {
                continue;
            }
            self.failed = true;
            let column: Column = self.col..self.col + 1;
            return Some(Err(error!(UnexpectedCharacter, ..&column; pk.to_string())));
        }
    }
}
