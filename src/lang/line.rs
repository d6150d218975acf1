/// One source line. The index is stable: blank and comment-only lines are
/// kept so that every jump target stays a valid index into the program.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    index: usize,
    raw: String,
    text: String,
}

impl Line {
    pub fn new(index: usize, raw: &str, tab_width: usize) -> Line {
        let expanded = raw.replace('\t', &" ".repeat(tab_width));
        Line {
            index,
            raw: raw.to_string(),
            text: strip_comment(&expanded).trim().to_string(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Comment-stripped, trimmed statement text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.index + 1, self.text)
    }
}

pub fn preprocess(source: &str, tab_width: usize) -> Vec<Line> {
    source
        .lines()
        .enumerate()
        .map(|(index, raw)| Line::new(index, raw, tab_width))
        .collect()
}

/// Cut at the first `#` or `//` that is not inside a string literal.
fn strip_comment(s: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut chars = s.char_indices().peekable();
    while let Some((pos, ch)) = chars.next() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                }
            }
            None => match ch {
                '"' | '\'' => quote = Some(ch),
                '“' => quote = Some('”'),
                '‘' => quote = Some('’'),
                '#' => return &s[..pos],
                '/' => {
                    if let Some((_, '/')) = chars.peek() {
                        return &s[..pos];
                    }
                }
                _ => {}
            },
        }
    }
    s
}
