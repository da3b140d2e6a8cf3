use super::{token::*, Error};

type Result<T> = std::result::Result<T, Error>;

/// Classify raw tokens one-to-one, in order. Numbers with more than one
/// `.` are rejected here so the decimal model never sees them.
pub fn lex(tokens: &[RawToken]) -> Result<Vec<Token>> {
    let tokens = tokens.iter().map(classify).collect::<Result<Vec<Token>>>()?;
    tracing::debug!(tokens = tokens.len(), "lexed");
    Ok(tokens)
}

fn classify(raw: &RawToken) -> Result<Token> {
    let kind = match raw.kind {
        RawKind::Primitive => match Word::from_string(&raw.text) {
            Some(word) => Kind::Word(word),
            None => Kind::Ident,
        },
        RawKind::Number => {
            if raw.text.matches('.').count() > 1 {
                return Err(error!(MalformedNumber, ..&raw.column; raw.text.as_str()));
            }
            Kind::Number
        }
        RawKind::Operator => match Operator::from_string(&raw.text) {
            Some(op) => Kind::Operator(op),
            None => return Err(error!(UnknownSymbol, ..&raw.column; raw.text.as_str())),
        },
        RawKind::Comparator => match Comparator::from_string(&raw.text) {
            Some(cmp) => Kind::Comparator(cmp),
            None => return Err(error!(UnknownSymbol, ..&raw.column; raw.text.as_str())),
        },
    };
    Ok(Token::new(kind, raw.text.as_str(), raw.column.clone()))
}
