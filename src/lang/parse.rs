use super::{ast::*, token::*, Column, Error, Num};

type Result<T> = std::result::Result<T, Error>;

pub fn parse(tokens: &[Token]) -> Result<Program> {
    let program = Parser::parse(tokens)?;
    tracing::debug!(statements = program.len(), "parsed");
    tracing::trace!(?program);
    Ok(program)
}

/// Whether statements are being read inside a label body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    TopLevel,
    Label,
}

/// Statement rules in the order they are tried.
#[derive(Debug, Clone, Copy)]
enum Rule {
    Recall,
    Store,
    Execute,
    Push,
    Arithmetic,
    Comparison,
    Label,
}

const RULES: [Rule; 7] = [
    Rule::Recall,
    Rule::Store,
    Rule::Execute,
    Rule::Push,
    Rule::Arithmetic,
    Rule::Comparison,
    Rule::Label,
];

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Program> {
        let mut parse = Parser { tokens, pos: 0 };
        let mut r: Vec<Statement> = vec![];
        while parse.peek().is_some() {
            r.push(parse.statement(Scope::TopLevel)?);
        }
        Ok(Program::new(r))
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let t = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(t)
    }

    /// Empty column just past the last token.
    fn end_column(&self) -> Column {
        match self.tokens.last() {
            Some(t) => t.column.end..t.column.end,
            None => 0..0,
        }
    }

    fn statement(&mut self, scope: Scope) -> Result<Statement> {
        for rule in RULES.iter() {
            if let Some(statement) = rule.apply(self, scope)? {
                return Ok(statement);
            }
        }
        match self.peek() {
            Some(t) => Err(error!(UnexpectedToken, ..&t.column; t.text.as_str())),
            None => Err(error!(UnexpectedToken, ..&self.end_column())),
        }
    }

    fn ident(&mut self) -> Result<String> {
        match self.peek() {
            Some(Token {
                kind: Kind::Ident,
                text,
                ..
            }) => {
                self.pos += 1;
                Ok(text.clone())
            }
            Some(t) => Err(error!(ExpectedIdentifier, ..&t.column; t.text.as_str())),
            None => Err(error!(ExpectedIdentifier, ..&self.end_column())),
        }
    }

    fn label(&mut self, column: Column) -> Result<Statement> {
        let name = self.ident()?;
        let mut body = vec![];
        loop {
            match self.peek() {
                None => return Err(error!(MissingReturn, ..&column; name)),
                Some(Token {
                    kind: Kind::Word(Word::Rtn),
                    ..
                }) => {
                    self.next();
                    return Ok(Statement::Label(column, name, body));
                }
                Some(_) => body.push(self.statement(Scope::Label)?),
            }
        }
    }
}

impl Rule {
    /// `Ok(None)` when the rule does not apply to the current token; the
    /// cursor is left untouched in that case.
    fn apply(self, parse: &mut Parser, scope: Scope) -> Result<Option<Statement>> {
        let token = match parse.peek() {
            Some(t) => t,
            None => return Ok(None),
        };
        let column = token.column.clone();
        let statement = match (self, token.kind) {
            (Rule::Recall, Kind::Word(Word::Rcl)) => {
                parse.next();
                Statement::Recall(column, parse.ident()?)
            }
            (Rule::Store, Kind::Word(Word::Sto)) => {
                parse.next();
                Statement::Store(column, parse.ident()?)
            }
            (Rule::Execute, Kind::Word(Word::Xeq)) => {
                parse.next();
                Statement::Execute(column, parse.ident()?)
            }
            (Rule::Push, Kind::Number) => {
                parse.next();
                let num = token
                    .text
                    .parse::<Num>()
                    .map_err(|_| error!(MalformedNumber, ..&column; token.text.as_str()))?;
                Statement::Push(column, num)
            }
            (Rule::Arithmetic, Kind::Operator(op)) => {
                parse.next();
                Statement::Arithmetic(column, op)
            }
            (Rule::Comparison, Kind::Comparator(cmp)) => {
                parse.next();
                Statement::Comparison(column, cmp)
            }
            (Rule::Label, Kind::Word(Word::Lbl)) => {
                if scope == Scope::Label {
                    return Err(error!(NestedLabel, ..&column; token.text.as_str()));
                }
                parse.next();
                parse.label(column)?
            }
            _ => return Ok(None),
        };
        Ok(Some(statement))
    }
}
