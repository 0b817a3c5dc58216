//! Ordered pattern registry.
//!
//! Definitions are kept in an ordered `Vec`: registration order is the
//! priority order used by matching, so earlier (more specific) patterns such
//! as keywords must be registered before general ones such as identifiers.
//!
//! A [`LexerBuilder`] is append-only and is consumed by
//! [`build()`](LexerBuilder::build); the resulting [`Lexer`] cannot be
//! modified, so no scan ever observes a registry changing under it.

use regex::Regex;
use tracing::debug;

use crate::{DefineError, Scanner, Token, EOF, UNEXPECTED};

/// A named pattern plus its skip flag.
///
/// The pattern is compiled anchored to the start of the remaining input
/// (`^(?:pattern)`), so alternations are anchored as a whole and matching
/// never searches forward.
#[derive(Clone, Debug)]
pub struct PatternDefinition {
    name: String,
    pattern: String,
    regex: Regex,
    skip: bool,
}

impl PatternDefinition {
    /// Compile a definition.
    ///
    /// Rejects empty or reserved names, empty or invalid patterns, and
    /// patterns that accept the empty string.
    pub fn new(name: impl Into<String>, pattern: &str, skip: bool) -> Result<Self, DefineError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DefineError::EmptyName);
        }
        if name == EOF || name == UNEXPECTED {
            return Err(DefineError::ReservedName { name });
        }
        if pattern.is_empty() {
            return Err(DefineError::EmptyPattern { name });
        }

        // The bare pattern must compile on its own: an unbalanced one such
        // as `a)|(?:b` would otherwise close the wrapper group early and
        // leave a branch outside the anchor.
        let regex = match Regex::new(pattern)
            .and_then(|_| Regex::new(&format!("^(?:{pattern})")))
        {
            Ok(regex) => regex,
            Err(source) => return Err(DefineError::InvalidPattern { name, source }),
        };
        if regex.is_match("") {
            return Err(DefineError::MatchesEmpty { name });
        }

        Ok(PatternDefinition {
            name,
            pattern: pattern.to_owned(),
            regex,
            skip,
        })
    }

    /// Token kind reported for matches of this definition.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pattern as registered (before anchoring).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_skip(&self) -> bool {
        self.skip
    }

    /// Length of this definition's match at the start of `rest`.
    ///
    /// Only a match beginning at offset 0 counts, and zero-width matches
    /// count as no match: a token must consume input.
    #[inline]
    pub(crate) fn match_len(&self, rest: &str) -> Option<usize> {
        self.regex
            .find(rest)
            .filter(|m| m.start() == 0)
            .map(|m| m.end())
            .filter(|&len| len > 0)
    }
}

/// Append-only builder for a [`Lexer`].
///
/// Each registration consumes the builder and returns it back on success,
/// so a chain of `?` aborts construction at the first bad definition.
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct LexerBuilder {
    definitions: Vec<PatternDefinition>,
}

impl LexerBuilder {
    pub fn new() -> Self {
        LexerBuilder::default()
    }

    /// Append a definition. Later definitions have lower priority.
    pub fn define(
        self,
        name: impl Into<String>,
        pattern: &str,
        skip: bool,
    ) -> Result<Self, DefineError> {
        let definition = PatternDefinition::new(name, pattern, skip)?;
        Ok(self.push(definition))
    }

    /// Append a keyword: the literal `name` followed by a word boundary, so
    /// `function` does not match the start of `functionName`.
    ///
    /// The boundary is only meaningful when `name` ends in a word character.
    pub fn keyword(self, name: &str) -> Result<Self, DefineError> {
        let pattern = format!(r"{}\b", regex::escape(name));
        self.define(name, &pattern, false)
    }

    /// Append an operator: the literal `name` with every regex
    /// metacharacter escaped.
    pub fn operator(self, name: &str) -> Result<Self, DefineError> {
        let pattern = regex::escape(name);
        self.define(name, &pattern, false)
    }

    /// Append an already compiled definition.
    pub fn push(mut self, definition: PatternDefinition) -> Self {
        debug!(
            name = definition.name(),
            pattern = definition.pattern(),
            skip = definition.is_skip(),
            priority = self.definitions.len(),
            "define token"
        );
        self.definitions.push(definition);
        self
    }

    /// Freeze the registry.
    pub fn build(self) -> Lexer {
        debug!(definitions = self.definitions.len(), "lexer built");
        Lexer {
            definitions: self.definitions,
        }
    }
}

/// A frozen, ordered set of pattern definitions.
///
/// The match engine lives on this type (see [`Lexer::match_at`] and
/// [`Lexer::next_significant`]). A `Lexer` is immutable and `Send + Sync`,
/// so one instance can serve any number of [`Scanner`]s.
#[derive(Clone, Debug)]
pub struct Lexer {
    pub(crate) definitions: Vec<PatternDefinition>,
}

impl Lexer {
    pub fn builder() -> LexerBuilder {
        LexerBuilder::new()
    }

    /// Definitions in priority order.
    pub fn definitions(&self) -> &[PatternDefinition] {
        &self.definitions
    }

    /// Look up the highest-priority definition with the given name.
    pub fn definition(&self, name: &str) -> Option<&PatternDefinition> {
        self.definitions.iter().find(|d| d.name() == name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Create a scanner over `source`, positioned at offset 0.
    pub fn scanner<'a>(&'a self, source: &'a str) -> Scanner<'a> {
        Scanner::new(self, source)
    }

    /// Scan all of `source` into significant tokens.
    ///
    /// The returned list always ends with the `EOF` token, which carries any
    /// trailing skip tokens.
    pub fn tokenize<'a>(&'a self, source: &'a str) -> Vec<Token<'a>> {
        let mut scanner = self.scanner(source);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.advance();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }
}
