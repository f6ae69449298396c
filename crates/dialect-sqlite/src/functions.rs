//! SQL functions and how SQLite spells them.

use std::collections::BTreeMap;

use dialect_core::{AbstractColumnType, DialectError, Result};
use tracing::debug;

/// Which side of a string `trim` removes characters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimSpec {
    /// Both ends.
    Both,
    /// Start of the string.
    Leading,
    /// End of the string.
    Trailing,
}

impl TrimSpec {
    const fn function(self) -> &'static str {
        match self {
            Self::Both => "trim",
            Self::Leading => "ltrim",
            Self::Trailing => "rtrim",
        }
    }

    fn from_keyword(word: &str) -> Option<Self> {
        [
            ("both", Self::Both),
            ("leading", Self::Leading),
            ("trailing", Self::Trailing),
        ]
        .into_iter()
        .find_map(|(keyword, spec)| word.eq_ignore_ascii_case(keyword).then_some(spec))
    }
}

const TRIM_SHAPE: &str = "[leading|trailing|both] [chars] from source";

/// Splits ANSI trim arguments into side, characters and source.
///
/// Accepts `source` alone, or an optional side keyword followed by
/// `[chars] from source`.
fn parse_trim_arguments<'a>(
    function: &str,
    args: &[&'a str],
) -> Result<(TrimSpec, Option<&'a str>, &'a str)> {
    let (spec, rest) = match args.split_first() {
        Some((first, rest)) => match TrimSpec::from_keyword(first) {
            Some(spec) => (Some(spec), rest),
            None => (None, args),
        },
        None => (None, args),
    };
    fn is_from(word: &str) -> bool {
        word.eq_ignore_ascii_case("from")
    }

    let (chars, source) = match rest {
        [] => {
            return Err(DialectError::MissingFunctionArgument {
                function: function.to_string(),
                position: args.len() + 1,
            });
        }
        [source] if spec.is_none() && !is_from(source) => (None, *source),
        [from, source] if is_from(from) => (None, *source),
        [chars, from, source] if is_from(from) => (Some(*chars), *source),
        _ => {
            return Err(DialectError::InvalidFunctionArguments {
                function: function.to_string(),
                expected: TRIM_SHAPE,
            });
        }
    };
    Ok((spec.unwrap_or(TrimSpec::Both), chars, source))
}

/// How a registered function is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlFunction {
    /// `name(arg, ...)`.
    Standard {
        /// Function name as SQLite knows it.
        name: &'static str,
        /// Result type, or `None` when it follows the first argument.
        return_type: Option<AbstractColumnType>,
    },
    /// `name()`, no arguments.
    NoArg {
        /// Function name as SQLite knows it.
        name: &'static str,
        /// Result type.
        return_type: Option<AbstractColumnType>,
    },
    /// A template with one-based `?N` argument placeholders.
    Template {
        /// The template text.
        template: &'static str,
        /// Result type.
        return_type: Option<AbstractColumnType>,
    },
    /// Arguments joined by a separator.
    VarArgs {
        /// Text before the first argument.
        begin: &'static str,
        /// Text between arguments.
        separator: &'static str,
        /// Text after the last argument.
        end: &'static str,
        /// Result type.
        return_type: Option<AbstractColumnType>,
    },
    /// ANSI `trim` emulated with `trim`/`ltrim`/`rtrim`.
    Trim,
}

impl SqlFunction {
    /// Returns the result type of the rendered expression.
    #[must_use]
    pub const fn return_type(&self) -> Option<AbstractColumnType> {
        match self {
            Self::Standard { return_type, .. }
            | Self::NoArg { return_type, .. }
            | Self::Template { return_type, .. }
            | Self::VarArgs { return_type, .. } => *return_type,
            Self::Trim => Some(AbstractColumnType::Varchar),
        }
    }

    /// Renders a call with already-rendered SQL arguments.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::MissingFunctionArgument`] when a template or
    /// trim call lacks an argument it needs, and
    /// [`DialectError::InvalidFunctionArguments`] when trim arguments don't
    /// follow `[leading|trailing|both] [chars] from source`.
    pub fn render(&self, function: &str, args: &[&str]) -> Result<String> {
        match self {
            Self::Standard { name, .. } => Ok(format!("{name}({})", args.join(", "))),
            Self::NoArg { name, .. } => Ok(format!("{name}()")),
            Self::Template { template, .. } => render_template(function, template, args),
            Self::VarArgs {
                begin,
                separator,
                end,
                ..
            } => Ok(format!("{begin}{}{end}", args.join(*separator))),
            Self::Trim => {
                let (spec, chars, source) = parse_trim_arguments(function, args)?;
                Ok(render_trim(spec, chars, source))
            }
        }
    }
}

/// Renders an ANSI trim as SQLite's `trim`, `ltrim` or `rtrim`.
///
/// Without `chars`, whitespace is trimmed.
#[must_use]
pub fn render_trim(spec: TrimSpec, chars: Option<&str>, source: &str) -> String {
    let function = spec.function();
    match chars {
        Some(chars) => format!("{function}({source}, {chars})"),
        None => format!("{function}({source})"),
    }
}

fn render_template(function: &str, template: &str, args: &[&str]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        if c != '?' {
            out.push(c);
            continue;
        }
        let mut end = start + 1;
        while let Some(&(i, d)) = chars.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            end = i + d.len_utf8();
            chars.next();
        }
        match template[start + 1..end].parse::<usize>() {
            Ok(position) => {
                let arg = position
                    .checked_sub(1)
                    .and_then(|index| args.get(index))
                    .ok_or_else(|| DialectError::MissingFunctionArgument {
                        function: function.to_string(),
                        position,
                    })?;
                out.push_str(arg);
            }
            // A bare `?` is a bind parameter, not an argument reference.
            Err(_) => out.push('?'),
        }
    }
    Ok(out)
}

/// Functions available to portable queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRegistry {
    functions: BTreeMap<&'static str, SqlFunction>,
}

impl FunctionRegistry {
    /// Builds the SQLite function set.
    #[must_use]
    pub fn sqlite() -> Self {
        let functions = BTreeMap::from([
            (
                "concat",
                SqlFunction::VarArgs {
                    begin: "",
                    separator: "||",
                    end: "",
                    return_type: Some(AbstractColumnType::Varchar),
                },
            ),
            (
                "mod",
                SqlFunction::Template {
                    template: "?1 % ?2",
                    return_type: Some(AbstractColumnType::Integer),
                },
            ),
            (
                "quote",
                SqlFunction::Standard {
                    name: "quote",
                    return_type: Some(AbstractColumnType::Varchar),
                },
            ),
            (
                "random",
                SqlFunction::NoArg {
                    name: "random",
                    return_type: Some(AbstractColumnType::Integer),
                },
            ),
            (
                "round",
                SqlFunction::Standard {
                    name: "round",
                    return_type: None,
                },
            ),
            (
                "substr",
                SqlFunction::Standard {
                    name: "substr",
                    return_type: Some(AbstractColumnType::Varchar),
                },
            ),
            ("trim", SqlFunction::Trim),
        ]);
        debug!(count = functions.len(), "registered sqlite functions");
        Self { functions }
    }

    /// Looks up a function by its portable name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SqlFunction> {
        self.functions.get(name)
    }

    /// Iterates over registered function names.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }

    /// Renders a call to a registered function.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnknownFunction`] for unregistered names, or
    /// [`DialectError::MissingFunctionArgument`] when arguments are missing.
    pub fn render(&self, name: &str, args: &[&str]) -> Result<String> {
        self.get(name)
            .ok_or_else(|| DialectError::UnknownFunction(name.to_string()))?
            .render(name, args)
    }
}
