use super::token::{Comparator, Operator, Word};
use super::{Column, Num};

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Push(Column, Num),
    Store(Column, String),
    Recall(Column, String),
    Execute(Column, String),
    Arithmetic(Column, Operator),
    Comparison(Column, Comparator),
    /// Only valid at the top level; the body never holds another label.
    Label(Column, String, Vec<Statement>),
}

impl Statement {
    pub fn column(&self) -> Column {
        use Statement::*;
        match self {
            Push(col, ..)
            | Store(col, ..)
            | Recall(col, ..)
            | Execute(col, ..)
            | Arithmetic(col, ..)
            | Comparison(col, ..)
            | Label(col, ..) => col.clone(),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Push(_, num) => write!(f, "{}", num),
            Store(_, name) => write!(f, "{} {}", Word::Sto, name),
            Recall(_, name) => write!(f, "{} {}", Word::Rcl, name),
            Execute(_, name) => write!(f, "{} {}", Word::Xeq, name),
            Arithmetic(_, op) => write!(f, "{}", op),
            Comparison(_, cmp) => write!(f, "{}", cmp),
            Label(_, name, body) => {
                write!(f, "{} {}", Word::Lbl, name)?;
                for s in body {
                    write!(f, " {}", s)?;
                }
                write!(f, " {}", Word::Rtn)
            }
        }
    }
}

/// Top-level statements in source order. Labels and free-standing
/// statements may be interleaved.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Program {
        Program { statements }
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn labels(&self) -> impl Iterator<Item = (&str, &[Statement])> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Label(_, name, body) => Some((name.as_str(), body.as_slice())),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut first = true;
        for s in &self.statements {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{}", s)?;
        }
        Ok(())
    }
}
