use crate::error::Result;
use crate::hint::{Hint, HintSource, Hints, resolve_hint};
use crate::normalize::{Normalizer, normalize_name, strip_dashes};
use crate::number::to_number;
use crate::paths::{PathContext, SystemPaths};
use crate::value::OptionValue;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Everything learned from one pass over an argument list.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// Coerced values keyed by normalized name, in first-seen order.
    pub options: IndexMap<String, OptionValue>,
    /// Tokens that were neither flags nor flag values, in original order.
    pub positional_args: Vec<String>,
    pub metadata: Metadata,
}

impl ParseResult {
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }
}

/// How each option got its name and type.
#[derive(Debug, Default, Serialize)]
pub struct Metadata {
    /// Raw flag token (without any `=value` part) to normalized name.
    pub keys: IndexMap<String, String>,
    /// Names whose type came from an explicit hint.
    pub hints: IndexMap<String, Hint>,
    /// Names whose type was inferred, with the inferred type.
    pub guesses: IndexMap<String, Hint>,
}

impl Metadata {
    /// Type used for `name` and whether it was explicit or guessed.
    pub fn hint_of(&self, name: &str) -> Option<(Hint, HintSource)> {
        if let Some(hint) = self.hints.get(name) {
            return Some((*hint, HintSource::Explicit));
        }
        self.guesses
            .get(name)
            .map(|hint| (*hint, HintSource::Guessed))
    }

    fn record(&mut self, raw: &str, name: &str, hint: Hint, source: HintSource) {
        self.keys.insert(raw.to_string(), name.to_string());
        match source {
            HintSource::Explicit => self.hints.insert(name.to_string(), hint),
            HintSource::Guessed => self.guesses.insert(name.to_string(), hint),
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParsingState {
    Normal,
    /// Entered after `--`; never left.
    PositionalOnly,
}

/// Configurable argument parser.
///
/// Holds the caller's hints, the path primitives used for
/// [`Hint::Path`] values and the function turning flag tokens into names.
/// Parsing itself keeps no state between calls.
///
/// ```
/// use clef_parse::{ArgvParser, Hint, Hints, OptionValue, WorkingDir};
///
/// let hints = Hints::from([("out".to_string(), Hint::Path)]);
/// let paths = WorkingDir::new("/work");
/// let result = ArgvParser::new()
///     .hints(&hints)
///     .paths(&paths)
///     .parse(["--out", "../dist", "-v"])
///     .unwrap();
///
/// assert_eq!(result.get("out"), Some(&OptionValue::Path("/dist".into())));
/// assert_eq!(result.get("v"), Some(&OptionValue::Boolean(true)));
/// ```
pub struct ArgvParser<'a> {
    hints: Option<&'a Hints>,
    paths: &'a dyn PathContext,
    normalize: Normalizer,
}

impl Default for ArgvParser<'_> {
    fn default() -> Self {
        Self {
            hints: None,
            paths: &SystemPaths,
            normalize: normalize_name,
        }
    }
}

impl<'a> ArgvParser<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hints(mut self, hints: &'a Hints) -> Self {
        self.hints = Some(hints);
        self
    }

    pub fn paths(mut self, paths: &'a dyn PathContext) -> Self {
        self.paths = paths;
        self
    }

    /// Replace the name normalizer. It receives the flag with dashes stripped.
    pub fn normalizer(mut self, normalize: Normalizer) -> Self {
        self.normalize = normalize;
        self
    }

    /// Walk `tokens` left to right and collect options and positionals.
    ///
    /// Fails only if resolving a relative path value needs the working
    /// directory and the [`PathContext`] can't provide it.
    pub fn parse<I, S>(&self, tokens: I) -> Result<ParseResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut queue: VecDeque<String> = tokens.into_iter().map(Into::into).collect();
        let mut state = ParsingState::Normal;
        let mut result = ParseResult::default();

        while let Some(token) = queue.pop_front() {
            match state {
                ParsingState::PositionalOnly => result.positional_args.push(token),
                ParsingState::Normal if token == "--" => {
                    debug!(remaining = queue.len(), "separator, rest is positional");
                    state = ParsingState::PositionalOnly;
                }
                ParsingState::Normal if token.starts_with('-') => {
                    self.parse_flag(token, &mut queue, &mut result)?;
                }
                ParsingState::Normal => {
                    trace!(%token, "positional");
                    result.positional_args.push(token);
                }
            }
        }

        Ok(result)
    }

    fn parse_flag(
        &self,
        token: String,
        queue: &mut VecDeque<String>,
        result: &mut ParseResult,
    ) -> Result<()> {
        let (flag, inline) = match token.split_once('=') {
            Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
            None => (token, None),
        };
        let name = (self.normalize)(strip_dashes(&flag));

        let explicit = self.hints.and_then(|hints| hints.get(&name)).copied();
        let candidate = inline
            .as_deref()
            .or_else(|| queue.front().map(String::as_str));
        let (hint, source) = resolve_hint(explicit, candidate);
        trace!(%flag, %name, %hint, ?source, inline = inline.is_some(), "flag");

        let value = match hint {
            Hint::Boolean => {
                let literal = match candidate {
                    Some("false") => Some(false),
                    Some("true") => Some(true),
                    _ => None,
                };
                // a bare switch leaves an unrelated next token alone
                if literal.is_some() && inline.is_none() {
                    queue.pop_front();
                }
                OptionValue::Boolean(literal.unwrap_or(true))
            }
            Hint::Number => match take_value(inline, queue) {
                Some(text) => OptionValue::Number(to_number(&text)),
                None => OptionValue::Number(f64::NAN),
            },
            Hint::String => match take_value(inline, queue) {
                Some(text) => OptionValue::String(text),
                None => OptionValue::Missing,
            },
            Hint::Path => match take_value(inline, queue) {
                Some(text) => OptionValue::Path(self.resolve_path(text)?),
                None => OptionValue::Missing,
            },
        };

        result.metadata.record(&flag, &name, hint, source);
        result.options.insert(name, value);
        Ok(())
    }

    fn resolve_path(&self, text: String) -> Result<String> {
        if self.paths.is_absolute(&text) {
            return Ok(text);
        }
        let cwd = self.paths.current_dir()?;
        let resolved = self.paths.resolve(&cwd, &text);
        Ok(resolved.to_string_lossy().into_owned())
    }
}

fn take_value(inline: Option<String>, queue: &mut VecDeque<String>) -> Option<String> {
    inline.or_else(|| queue.pop_front())
}

/// Parse `tokens` with `hints`, the real working directory and the default
/// name normalizer.
///
/// ```
/// use clef_parse::{parse_argv, Hints, OptionValue};
///
/// let result = parse_argv(["-v", "--some-flag", "52", "potato"], &Hints::new()).unwrap();
/// assert_eq!(result.get("someFlag"), Some(&OptionValue::Number(52.0)));
/// assert_eq!(result.positional_args, ["potato"]);
/// ```
pub fn parse_argv<I, S>(tokens: I, hints: &Hints) -> Result<ParseResult>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ArgvParser::new().hints(hints).parse(tokens)
}
