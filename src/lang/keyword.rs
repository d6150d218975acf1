/// Statements that open, split, or close a structured region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    If,
    Else,
    EndIf,
    RepeatTimes,
    RepeatUntil,
    EndRepeat,
    Procedure,
    EndProcedure,
}

const RESERVED: &[&str] = &[
    "AND",
    "APPEND",
    "DISPLAY",
    "ELSE",
    "END",
    "FALSE",
    "IF",
    "INPUT",
    "INSERT",
    "LENGTH",
    "MOD",
    "NOT",
    "OR",
    "PROCEDURE",
    "RANDOM",
    "REMOVE",
    "REPEAT",
    "RETURN",
    "SET",
    "TRUE",
];

pub fn is_reserved(name: &str) -> bool {
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}

pub fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

pub fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => chars.all(is_ident_char),
        _ => false,
    }
}

/// Split the leading word off `s`. The word is the run of identifier
/// characters; the remainder is returned untrimmed.
pub fn split_word(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !is_ident_char(c)).unwrap_or_else(|| s.len());
    (&s[..end], &s[end..])
}

/// If `s` starts with the word `word` (any case), return what follows it.
pub fn strip_word<'a>(s: &'a str, word: &str) -> Option<&'a str> {
    let (first, rest) = split_word(s);
    if first.eq_ignore_ascii_case(word) {
        Some(rest)
    } else {
        None
    }
}

/// If `s` ends with the word `word` (any case), return what precedes it.
pub fn strip_last_word<'a>(s: &'a str, word: &str) -> Option<&'a str> {
    let s = s.trim_end();
    let start = s
        .rfind(|c: char| !is_ident_char(c))
        .map(|p| p + s[p..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);
    if s[start..].eq_ignore_ascii_case(word) {
        Some(&s[..start])
    } else {
        None
    }
}

fn closes(rest: &str, word: &str) -> bool {
    match strip_word(rest.trim_start(), word) {
        Some(tail) => tail.trim().is_empty(),
        None => false,
    }
}

/// Classify a trimmed statement by its structural keyword, if any.
pub fn keyword(text: &str) -> Option<Keyword> {
    let (first, rest) = split_word(text);
    if first.eq_ignore_ascii_case("IF") {
        return Some(Keyword::If);
    }
    if first.eq_ignore_ascii_case("ELSE") {
        if rest.trim().is_empty() {
            return Some(Keyword::Else);
        }
        return None;
    }
    if first.eq_ignore_ascii_case("ENDIF") && rest.trim().is_empty() {
        return Some(Keyword::EndIf);
    }
    if first.eq_ignore_ascii_case("ENDREPEAT") && rest.trim().is_empty() {
        return Some(Keyword::EndRepeat);
    }
    if first.eq_ignore_ascii_case("ENDPROCEDURE") && rest.trim().is_empty() {
        return Some(Keyword::EndProcedure);
    }
    if first.eq_ignore_ascii_case("END") {
        if closes(rest, "IF") {
            return Some(Keyword::EndIf);
        }
        if closes(rest, "REPEAT") {
            return Some(Keyword::EndRepeat);
        }
        if closes(rest, "PROCEDURE") {
            return Some(Keyword::EndProcedure);
        }
        return None;
    }
    if first.eq_ignore_ascii_case("REPEAT") {
        if strip_word(rest.trim_start(), "UNTIL").is_some() {
            return Some(Keyword::RepeatUntil);
        }
        if strip_last_word(rest, "TIMES").is_some() {
            return Some(Keyword::RepeatTimes);
        }
        return None;
    }
    if first.eq_ignore_ascii_case("PROCEDURE") {
        return Some(Keyword::Procedure);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_keywords() {
        assert_eq!(keyword("IF a > 1 THEN"), Some(Keyword::If));
        assert_eq!(keyword("if(a)"), Some(Keyword::If));
        assert_eq!(keyword("ELSE"), Some(Keyword::Else));
        assert_eq!(keyword("END IF"), Some(Keyword::EndIf));
        assert_eq!(keyword("EndIf"), Some(Keyword::EndIf));
        assert_eq!(keyword("REPEAT 3 TIMES"), Some(Keyword::RepeatTimes));
        assert_eq!(keyword("repeat n times"), Some(Keyword::RepeatTimes));
        assert_eq!(keyword("REPEAT UNTIL x ≥ 3"), Some(Keyword::RepeatUntil));
        assert_eq!(keyword("END   REPEAT"), Some(Keyword::EndRepeat));
        assert_eq!(keyword("PROCEDURE f(a)"), Some(Keyword::Procedure));
        assert_eq!(keyword("END PROCEDURE"), Some(Keyword::EndProcedure));
    }

    #[test]
    fn test_not_keywords() {
        assert_eq!(keyword("iffy ← 3"), None);
        assert_eq!(keyword("if_x ← 3"), None);
        assert_eq!(keyword("ELSE IF a"), None);
        assert_eq!(keyword("END"), None);
        assert_eq!(keyword("END IF now"), None);
        assert_eq!(keyword("REPEAT forever"), None);
        assert_eq!(keyword("DISPLAY(1)"), None);
    }

    #[test]
    fn test_words() {
        assert_eq!(split_word("SET a"), ("SET", " a"));
        assert_eq!(strip_word("Return(x)", "RETURN"), Some("(x)"));
        assert_eq!(strip_word("RETURNED", "RETURN"), None);
        assert_eq!(strip_last_word("x + 1 THEN", "THEN"), Some("x + 1 "));
        assert_eq!(strip_last_word("athen", "THEN"), None);
        assert_eq!(strip_last_word("TIMES", "TIMES"), Some(""));
        assert!(is_ident("_a1"));
        assert!(!is_ident("1a"));
        assert!(is_reserved("display"));
        assert!(!is_reserved("greet"));
    }
}
