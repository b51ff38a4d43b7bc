//! Text transforms applied before a statement is split.
//!
//! Order matters: trim, then substitute placeholders, then terminate.
//! Substitution is purely textual, so a `?` inside a string literal or a
//! comment is replaced as well.

use std::borrow::Cow;

use super::options::LintOptions;

/// Statement separator and terminator.
pub const TERMINATOR: char = ';';

/// Literal substituted for each `?` placeholder.
pub const PLACEHOLDER_LITERAL: &str = "\"placeholder\"";

/// Apply the configured transforms to a raw statement.
pub fn normalize<'a>(raw: &'a str, options: &LintOptions) -> Cow<'a, str> {
    let mut stmt = Cow::Borrowed(raw);

    if options.trim_whitespace {
        stmt = match stmt {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
            Cow::Owned(s) => Cow::Owned(s.trim().to_string())
        };
    }

    if options.substitute_placeholders && stmt.contains('?') {
        stmt = Cow::Owned(stmt.replace('?', PLACEHOLDER_LITERAL));
    }

    if options.add_terminator && !stmt.ends_with(TERMINATOR) {
        let mut owned = stmt.into_owned();
        owned.push(TERMINATOR);
        stmt = Cow::Owned(owned);
    }

    stmt
}
