use super::{ast::*, keyword::*, lex::*, token::*, Error};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Parse one expression substring: sanitize, lex, then precedence-climb.
pub fn parse_expression(text: &str) -> Result<Expression> {
    let tokens = lex(&sanitize(text)?)?;
    let mut parser = Parser::new(&tokens);
    let expr = parser.expression()?;
    parser.finish()?;
    Ok(expr)
}

/// Parse a comma separated argument list. Empty text is an empty list.
pub fn parse_expression_list(text: &str) -> Result<Vec<Expression>> {
    let tokens = lex(&sanitize(text)?)?;
    if tokens.is_empty() {
        return Ok(vec![]);
    }
    let mut parser = Parser::new(&tokens);
    let mut v = vec![parser.expression()?];
    while parser.peek().is_some() {
        parser.expect(Token::Comma)?;
        v.push(parser.expression()?);
    }
    Ok(v)
}

/// Classify a trimmed statement and parse the expressions it carries.
pub fn parse_statement(text: &str) -> Result<Statement> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Statement::Nop);
    }
    if let Some(keyword) = keyword(text) {
        return Statement::for_keyword(keyword, text);
    }
    if let Some(rest) = strip_word(text, "DISPLAY") {
        let inner = parenthesized(rest.trim())
            .ok_or_else(|| error!(SyntaxError; "EXPECTED DISPLAY(...)"))?;
        return Ok(Statement::Display(parse_expression_list(inner)?));
    }
    if let Some((target, expr)) = split_assignment(text) {
        return Ok(Statement::Assign(
            parse_target(target)?,
            parse_expression(expr)?,
        ));
    }
    if let Some(rest) = strip_word(text, "RETURN") {
        let rest = rest.trim();
        if rest.is_empty() {
            return Ok(Statement::Return(None));
        }
        return Ok(Statement::Return(Some(parse_expression(rest)?)));
    }
    let (name, rest) = split_word(text);
    if is_ident(name) {
        if let Some(inner) = parenthesized(rest.trim()) {
            return Ok(Statement::Call(name.into(), parse_expression_list(inner)?));
        }
    }
    Err(error!(UnknownStatement; text))
}

/// `PROCEDURE name(a, b)` to its name and ordered parameter names.
pub fn parse_procedure_header(text: &str) -> Result<(Rc<str>, Vec<Rc<str>>)> {
    let rest = match strip_word(text.trim(), "PROCEDURE") {
        Some(rest) => rest.trim(),
        None => return Err(error!(MalformedProcedure; "EXPECTED PROCEDURE")),
    };
    let (name, rest) = split_word(rest);
    if !is_ident(name) {
        return Err(error!(MalformedProcedure; "EXPECTED NAME"));
    }
    let inner = parenthesized(rest.trim())
        .ok_or_else(|| error!(MalformedProcedure; "EXPECTED PARAMETER LIST"))?;
    let mut params: Vec<Rc<str>> = vec![];
    if !inner.trim().is_empty() {
        for param in inner.split(',').map(str::trim) {
            if !is_ident(param) || is_reserved(param) {
                return Err(error!(MalformedProcedure; format!("BAD PARAMETER '{}'", param)));
            }
            if params.iter().any(|p| &**p == param) {
                return Err(error!(MalformedProcedure; format!("DUPLICATE PARAMETER {}", param)));
            }
            params.push(param.into());
        }
    }
    Ok((name.into(), params))
}

fn parenthesized(s: &str) -> Option<&str> {
    if s.len() >= 2 && s.starts_with('(') && s.ends_with(')') {
        Some(&s[1..s.len() - 1])
    } else {
        None
    }
}

/// Split at the first `←` or `<-` outside a string literal, provided the
/// left side (less an optional `SET`) has the shape of a target.
fn split_assignment(text: &str) -> Option<(&str, &str)> {
    let mut quote: Option<char> = None;
    let mut chars = text.char_indices().peekable();
    let mut split = None;
    while let Some((pos, ch)) = chars.next() {
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' => quote = Some(ch),
            '“' => quote = Some('”'),
            '‘' => quote = Some('’'),
            '←' => {
                split = Some((pos, pos + ch.len_utf8()));
                break;
            }
            '<' => {
                if let Some((_, '-')) = chars.peek() {
                    split = Some((pos, pos + 2));
                    break;
                }
            }
            _ => {}
        }
    }
    let (lhs_end, rhs_start) = split?;
    let lhs = text[..lhs_end].trim();
    let lhs = strip_word(lhs, "SET").map_or(lhs, str::trim);
    let (name, rest) = split_word(lhs);
    let rest = rest.trim();
    if is_ident(name) && (rest.is_empty() || (rest.starts_with('[') && rest.ends_with(']'))) {
        Some((lhs, &text[rhs_start..]))
    } else {
        None
    }
}

fn parse_target(text: &str) -> Result<Target> {
    let (name, rest) = split_word(text);
    if is_reserved(name) {
        return Err(error!(SyntaxError; format!("RESERVED WORD {}", name)));
    }
    let rest = rest.trim();
    if rest.is_empty() {
        return Ok(Target::Var(name.into()));
    }
    let index = parse_expression(&rest[1..rest.len() - 1])?;
    Ok(Target::Index(name.into(), index))
}

impl Statement {
    fn for_keyword(keyword: Keyword, text: &str) -> Result<Statement> {
        let (_, rest) = split_word(text);
        match keyword {
            Keyword::If => {
                let cond = strip_last_word(rest, "THEN").unwrap_or(rest).trim();
                if cond.is_empty() {
                    return Err(error!(SyntaxError; "EXPECTED CONDITION"));
                }
                Ok(Statement::If(parse_expression(cond)?))
            }
            Keyword::Else => Ok(Statement::Else),
            Keyword::EndIf => Ok(Statement::EndIf),
            Keyword::RepeatTimes => {
                let count = strip_last_word(rest, "TIMES").unwrap_or(rest).trim();
                if count.is_empty() {
                    return Err(error!(SyntaxError; "EXPECTED COUNT"));
                }
                Ok(Statement::RepeatTimes(parse_expression(count)?))
            }
            Keyword::RepeatUntil => {
                let cond = strip_word(rest.trim_start(), "UNTIL").unwrap_or(rest).trim();
                if cond.is_empty() {
                    return Err(error!(SyntaxError; "EXPECTED CONDITION"));
                }
                Ok(Statement::RepeatUntil(Rc::new(parse_expression(cond)?)))
            }
            Keyword::EndRepeat => Ok(Statement::EndRepeat),
            Keyword::Procedure => Ok(Statement::Procedure),
            Keyword::EndProcedure => Ok(Statement::EndProcedure),
        }
    }
}

const UNARY_PRECEDENCE: usize = 7;
const MAX_DEPTH: usize = 128;

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser {
            token_stream: tokens.iter(),
            peeked: None,
            depth: 0,
        }
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        self.token_stream.next()
    }

    fn peek(&mut self) -> Option<&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.token_stream.next();
        }
        self.peeked
    }

    fn finish(&mut self) -> Result<()> {
        match self.next() {
            None => Ok(()),
            Some(t) => Err(error!(SyntaxError; format!("UNEXPECTED {}", t))),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        fn parse(this: &mut Parser, precedence: usize) -> Result<Expression> {
            if this.depth >= MAX_DEPTH {
                return Err(error!(SyntaxError; "EXPRESSION TOO COMPLEX"));
            }
            this.depth += 1;
            let expr = climb(this, precedence);
            this.depth -= 1;
            expr
        }
        fn climb(this: &mut Parser, precedence: usize) -> Result<Expression> {
            let mut lhs = match this.next() {
                Some(Token::LParen) => {
                    let expr = this.expression()?;
                    this.expect(Token::RParen)?;
                    expr
                }
                Some(Token::LBracket) => Expression::List(this.arguments(Token::RBracket)?),
                Some(Token::Ident(name)) => match this.peek() {
                    Some(Token::LParen) => {
                        this.next();
                        Expression::Call(name.clone(), this.arguments(Token::RParen)?)
                    }
                    _ => Expression::Var(name.clone()),
                },
                Some(Token::Number(n)) => Expression::Number(*n),
                Some(Token::String(s)) => Expression::String(s.clone()),
                Some(Token::True) => Expression::Boolean(true),
                Some(Token::False) => Expression::Boolean(false),
                Some(Token::Operator(Operator::Minus)) => {
                    Expression::Negation(Box::new(parse(this, UNARY_PRECEDENCE)?))
                }
                Some(Token::Operator(Operator::Not)) => {
                    Expression::Not(Box::new(parse(this, UNARY_PRECEDENCE)?))
                }
                Some(t) => return Err(error!(SyntaxError; format!("UNEXPECTED {}", t))),
                None => return Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
            };
            loop {
                match this.peek() {
                    Some(Token::LBracket) => {
                        this.next();
                        let index = this.expression()?;
                        this.expect(Token::RBracket)?;
                        lhs = Expression::Index(Box::new(lhs), Box::new(index));
                    }
                    Some(Token::Operator(op)) => {
                        let op_precedence = match Expression::op_precedence(op) {
                            Some(p) => p,
                            None => break,
                        };
                        if op_precedence < precedence {
                            break;
                        }
                        this.next();
                        let rhs = parse(this, op_precedence + 1)?;
                        lhs = Expression::for_binary_op(op, lhs, rhs);
                    }
                    _ => break,
                }
            }
            Ok(lhs)
        }
        parse(self, 0)
    }

    /// Comma separated expressions up to `close`; the opener is consumed.
    fn arguments(&mut self, close: Token) -> Result<Vec<Expression>> {
        let mut v: Vec<Expression> = vec![];
        if self.peek() == Some(&close) {
            self.next();
            return Ok(v);
        }
        loop {
            v.push(self.expression()?);
            match self.next() {
                Some(t) if *t == close => return Ok(v),
                Some(Token::Comma) => continue,
                _ => return Err(error!(SyntaxError; format!("EXPECTED , OR {}", close))),
            }
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        Err(error!(SyntaxError; format!("EXPECTED {}", token)))
    }
}

impl Expression {
    fn for_binary_op(op: &Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        let (l, r) = (Box::new(lhs), Box::new(rhs));
        match op {
            Plus => Expression::Add(l, r),
            Minus => Expression::Subtract(l, r),
            Multiply => Expression::Multiply(l, r),
            Divide => Expression::Divide(l, r),
            Modulus => Expression::Modulus(l, r),
            Equal => Expression::Equal(l, r),
            NotEqual => Expression::NotEqual(l, r),
            Less => Expression::Less(l, r),
            LessEqual => Expression::LessEqual(l, r),
            Greater => Expression::Greater(l, r),
            GreaterEqual => Expression::GreaterEqual(l, r),
            And => Expression::And(l, r),
            Or => Expression::Or(l, r),
            Not => unreachable!("NOT is never binary"),
        }
    }

    fn op_precedence(op: &Operator) -> Option<usize> {
        use Operator::*;
        match op {
            Or => Some(1),
            And => Some(2),
            Equal | NotEqual => Some(3),
            Less | LessEqual | Greater | GreaterEqual => Some(4),
            Plus | Minus => Some(5),
            Multiply | Divide | Modulus => Some(6),
            Not => None,
        }
    }
}
