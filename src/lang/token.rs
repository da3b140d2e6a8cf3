use super::Column;

/// Untyped lexical unit produced by the scanner. `text` is the exact
/// matched source substring.
#[derive(Debug, PartialEq, Clone)]
pub struct RawToken {
    pub kind: RawKind,
    pub text: String,
    pub column: Column,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawKind {
    Primitive,
    Number,
    Operator,
    Comparator,
}

impl RawToken {
    pub fn new<S: Into<String>>(kind: RawKind, text: S, column: Column) -> RawToken {
        RawToken {
            kind,
            text: text.into(),
            column,
        }
    }
}

/// Classified token, ready for the parser.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: Kind,
    pub text: String,
    pub column: Column,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Kind {
    Ident,
    Number,
    Word(Word),
    Operator(Operator),
    Comparator(Comparator),
}

impl Token {
    pub fn new<S: Into<String>>(kind: Kind, text: S, column: Column) -> Token {
        Token {
            kind,
            text: text.into(),
            column,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

static WORDS: [(&str, Word); 5] = [
    ("lbl", Word::Lbl),
    ("rtn", Word::Rtn),
    ("xeq", Word::Xeq),
    ("sto", Word::Sto),
    ("rcl", Word::Rcl),
];

static OPERATORS: [(&str, Operator); 4] = [
    ("+", Operator::Plus),
    ("-", Operator::Minus),
    ("*", Operator::Multiply),
    ("/", Operator::Divide),
];

static COMPARATORS: [(&str, Comparator); 4] = [
    (">", Comparator::Greater),
    (">=", Comparator::GreaterEqual),
    ("<", Comparator::Less),
    ("<=", Comparator::LessEqual),
];

fn lookup<T: Copy>(table: &[(&str, T)], s: &str) -> Option<T> {
    table.iter().find(|(text, _)| *text == s).map(|(_, t)| *t)
}

fn spelling<T: PartialEq + 'static>(table: &'static [(&'static str, T)], t: &T) -> &'static str {
    table
        .iter()
        .find(|(_, x)| x == t)
        .map(|(text, _)| *text)
        .unwrap_or_default()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Lbl,
    Rtn,
    Xeq,
    Sto,
    Rcl,
}

impl Word {
    /// Keywords match on exact lowercase text only.
    pub fn from_string(s: &str) -> Option<Word> {
        lookup(&WORDS, s)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", spelling(&WORDS, self))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_string(s: &str) -> Option<Operator> {
        lookup(&OPERATORS, s)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", spelling(&OPERATORS, self))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Comparator {
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
}

impl Comparator {
    pub fn from_string(s: &str) -> Option<Comparator> {
        lookup(&COMPARATORS, s)
    }
}

impl std::fmt::Display for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", spelling(&COMPARATORS, self))
    }
}
