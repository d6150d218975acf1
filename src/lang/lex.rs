use super::keyword::is_ident_char;
use super::token::*;
use super::Error;

type Result<T> = std::result::Result<T, Error>;

/// Translate dialect glyphs and operator words into their canonical
/// forms, then reject anything outside the expression character set.
/// String literal contents are left untouched by both steps.
pub fn sanitize(expr: &str) -> Result<String> {
    let expr: String = expr
        .chars()
        .map(|ch| match ch {
            '“' | '”' => '"',
            '‘' | '’' => '\'',
            _ => ch,
        })
        .collect();
    let mut out = String::with_capacity(expr.len());
    let mut chars = expr.chars().peekable();
    let mut quote: Option<char> = None;
    while let Some(ch) = chars.next() {
        if let Some(q) = quote {
            out.push(ch);
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' => {
                quote = Some(ch);
                out.push(ch);
            }
            '≤' => out.push_str("<="),
            '≥' => out.push_str(">="),
            '≠' => out.push_str("!="),
            _ if ch.is_ascii_alphabetic() || ch == '_' => {
                let mut word = String::new();
                word.push(ch);
                while let Some(&pk) = chars.peek() {
                    if !is_ident_char(pk) {
                        break;
                    }
                    word.push(pk);
                    chars.next();
                }
                match word.to_ascii_uppercase().as_str() {
                    "AND" => out.push_str(" && "),
                    "OR" => out.push_str(" || "),
                    "NOT" => out.push_str(" ! "),
                    "MOD" => out.push_str(" % "),
                    _ => out.push_str(&word),
                }
            }
            _ if is_allowed(ch) => out.push(ch),
            _ => return Err(error!(InvalidCharacters; format!("'{}'", ch))),
        }
    }
    Ok(out)
}

fn is_allowed(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch.is_whitespace() || "+-*/%().,<>!=&|[]\"'".contains(ch)
}

pub fn lex(s: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer {
        chars: s.chars().peekable(),
    };
    let mut tokens = vec![];
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Lexer<'a> {
    fn next_token(&mut self) -> Result<Option<Token>> {
        while let Some(pk) = self.chars.peek() {
            if pk.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
        let pk = match self.chars.peek() {
            Some(pk) => *pk,
            None => return Ok(None),
        };
        if pk.is_ascii_digit() || pk == '.' {
            return self.number().map(Some);
        }
        if pk.is_ascii_alphabetic() || pk == '_' {
            return Ok(Some(self.alphabetic()));
        }
        if pk == '"' || pk == '\'' {
            return self.string().map(Some);
        }
        self.minutia().map(Some)
    }

    fn number(&mut self) -> Result<Token> {
        let mut s = String::new();
        let mut decimal = false;
        while let Some(&pk) = self.chars.peek() {
            if pk.is_ascii_digit() {
                s.push(pk);
            } else if pk == '.' && !decimal {
                decimal = true;
                s.push(pk);
            } else {
                break;
            }
            self.chars.next();
        }
        match s.parse::<f64>() {
            Ok(n) if s != "." => Ok(Token::Number(n)),
            _ => Err(error!(SyntaxError; format!("UNEXPECTED {}", s))),
        }
    }

    fn string(&mut self) -> Result<Token> {
        let quote = self.chars.next();
        let mut s = String::new();
        loop {
            match self.chars.next() {
                Some(ch) if Some(ch) == quote => return Ok(Token::String(s.into())),
                Some(ch) => s.push(ch),
                None => return Err(error!(SyntaxError; "UNTERMINATED STRING")),
            }
        }
    }

    fn alphabetic(&mut self) -> Token {
        let mut s = String::new();
        while let Some(&pk) = self.chars.peek() {
            if !is_ident_char(pk) {
                break;
            }
            s.push(pk);
            self.chars.next();
        }
        if s.eq_ignore_ascii_case("true") {
            Token::True
        } else if s.eq_ignore_ascii_case("false") {
            Token::False
        } else {
            Token::Ident(s.into())
        }
    }

    fn minutia(&mut self) -> Result<Token> {
        use Operator::*;
        let ch = match self.chars.next() {
            Some(ch) => ch,
            None => return Err(error!(InternalError; "LEXER UNDERFLOW")),
        };
        let next_is = |this: &mut Self, want: char| -> bool {
            if this.chars.peek() == Some(&want) {
                this.chars.next();
                true
            } else {
                false
            }
        };
        let token = match ch {
            '+' => Token::Operator(Plus),
            '-' => Token::Operator(Minus),
            '*' => Token::Operator(Multiply),
            '/' => Token::Operator(Divide),
            '%' => Token::Operator(Modulus),
            '(' => Token::LParen,
            ')' => Token::RParen,
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            ',' => Token::Comma,
            '=' => {
                next_is(self, '=');
                Token::Operator(Equal)
            }
            '!' => {
                if next_is(self, '=') {
                    Token::Operator(NotEqual)
                } else {
                    Token::Operator(Not)
                }
            }
            '<' => {
                if next_is(self, '=') {
                    Token::Operator(LessEqual)
                } else if next_is(self, '>') {
                    Token::Operator(NotEqual)
                } else {
                    Token::Operator(Less)
                }
            }
            '>' => {
                if next_is(self, '=') {
                    Token::Operator(GreaterEqual)
                } else {
                    Token::Operator(Greater)
                }
            }
            '&' if next_is(self, '&') => Token::Operator(And),
            '|' if next_is(self, '|') => Token::Operator(Or),
            _ => return Err(error!(SyntaxError; format!("UNEXPECTED {}", ch))),
        };
        Ok(token)
    }
}
