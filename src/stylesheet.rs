//! Lightweight style-sheet lexer.
//!
//! Dependency extraction only needs at-rules and `url(...)` references, so
//! instead of a full CSS parser this walks the text once, skipping comments
//! and strings, and records:
//! - every at-rule with its raw prelude (the text between the rule name and
//!   the terminating `;`, `{` or, for the indented dialects, end of line)
//! - every `url(...)` found outside an at-rule prelude
//!
//! The resulting [`Stylesheet`] is what the style-sheet detectives expose as
//! their parsed tree.

/// Style-sheet syntax family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Css,
    Scss,
    Sass,
    Less,
    Stylus,
}

impl Dialect {
    /// Whether `//` starts a comment.
    pub fn has_line_comments(self) -> bool {
        !matches!(self, Dialect::Css)
    }

    /// Whether a newline ends a statement (indented syntaxes).
    pub fn is_indented(self) -> bool {
        matches!(self, Dialect::Sass | Dialect::Stylus)
    }

    /// Whether specifiers may appear unquoted (`@import foo`).
    pub fn allows_bare_specifiers(self) -> bool {
        self.is_indented()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtRule {
    /// Rule name without the `@`.
    pub name: String,
    /// Raw prelude, trimmed. Strings keep their quotes.
    pub prelude: String,
    /// 1-indexed line of the `@`.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    pub dialect: Dialect,
    pub at_rules: Vec<AtRule>,
    /// `url(...)` targets outside at-rule preludes, unquoted.
    pub urls: Vec<String>,
}

impl Stylesheet {
    /// At-rules with one of the given names, in source order.
    pub fn rules_named<'a>(&'a self, names: &'a [&str]) -> impl Iterator<Item = &'a AtRule> {
        self.at_rules
            .iter()
            .filter(move |rule| names.contains(&rule.name.as_str()))
    }
}

pub fn lex(source: &str, dialect: Dialect) -> Stylesheet {
    let mut lexer = Lexer {
        chars: source.chars().collect(),
        pos: 0,
        line: 1,
        dialect,
    };

    let mut sheet = Stylesheet {
        dialect,
        at_rules: Vec::new(),
        urls: Vec::new(),
    };

    while let Some(c) = lexer.peek(0) {
        if lexer.at_comment_start() {
            lexer.skip_comment();
        } else if c == '"' || c == '\'' {
            lexer.read_string();
        } else if c == '@' && lexer.peek(1).is_some_and(is_name_char) {
            let line = lexer.line;
            lexer.bump();
            let name = lexer.read_name();
            let prelude = lexer.read_prelude();
            sheet.at_rules.push(AtRule {
                name,
                prelude: prelude.trim().to_string(),
                line,
            });
        } else if lexer.at_url() {
            let url = lexer.read_url();
            if !url.is_empty() {
                sheet.urls.push(url);
            }
        } else {
            lexer.bump();
        }
    }

    sheet
}

/// Split on `sep` outside strings and parentheses.
pub fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (idx, c) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if c == sep && depth == 0 => {
                parts.push(&text[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    dialect: Dialect,
}

impl Lexer {
    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek(0)?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn at_comment_start(&self) -> bool {
        match (self.peek(0), self.peek(1)) {
            (Some('/'), Some('*')) => true,
            (Some('/'), Some('/')) => self.dialect.has_line_comments(),
            _ => false,
        }
    }

    fn at_url(&self) -> bool {
        let word: String = (0..4).filter_map(|i| self.peek(i)).collect();
        let preceded_by_name = self
            .pos
            .checked_sub(1)
            .and_then(|p| self.chars.get(p))
            .is_some_and(|c| is_name_char(*c));
        word.eq_ignore_ascii_case("url(") && !preceded_by_name
    }

    fn skip_comment(&mut self) {
        self.bump();
        if self.bump() == Some('*') {
            while self.peek(0).is_some() {
                if self.peek(0) == Some('*') && self.peek(1) == Some('/') {
                    self.bump();
                    self.bump();
                    return;
                }
                self.bump();
            }
        } else {
            while let Some(c) = self.peek(0) {
                if c == '\n' {
                    return;
                }
                self.bump();
            }
        }
    }

    /// Consume a quoted string and return it with its quotes.
    fn read_string(&mut self) -> String {
        let mut out = String::new();
        let Some(quote) = self.bump() else {
            return out;
        };
        out.push(quote);
        while let Some(c) = self.bump() {
            out.push(c);
            if c == '\\' {
                if let Some(next) = self.bump() {
                    out.push(next);
                }
            } else if c == quote || c == '\n' {
                break;
            }
        }
        out
    }

    fn read_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek(0).filter(|c| is_name_char(*c)) {
            name.push(c);
            self.bump();
        }
        name
    }

    fn read_prelude(&mut self) -> String {
        let mut prelude = String::new();
        let mut depth = 0usize;

        while let Some(c) = self.peek(0) {
            // A line comment stops before its newline, so indented dialects
            // still see the end of the statement.
            if depth == 0 && self.at_comment_start() {
                self.skip_comment();
                continue;
            }
            match c {
                '"' | '\'' => prelude.push_str(&self.read_string()),
                '(' => {
                    depth += 1;
                    prelude.push(c);
                    self.bump();
                }
                ')' => {
                    depth = depth.saturating_sub(1);
                    prelude.push(c);
                    self.bump();
                }
                ';' | '{' | '}' if depth == 0 => {
                    if c == ';' {
                        self.bump();
                    }
                    break;
                }
                '\n' if depth == 0 && self.dialect.is_indented() => break,
                _ => {
                    prelude.push(c);
                    self.bump();
                }
            }
        }

        prelude
    }

    fn read_url(&mut self) -> String {
        for _ in 0..4 {
            self.bump();
        }

        let mut raw = String::new();
        while let Some(c) = self.peek(0) {
            match c {
                '"' | '\'' => raw.push_str(&self.read_string()),
                ')' => {
                    self.bump();
                    break;
                }
                _ => {
                    raw.push(c);
                    self.bump();
                }
            }
        }

        unquote(raw.trim()).to_string()
    }
}

/// Strip one pair of matching quotes.
pub fn unquote(text: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = text
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    text
}
