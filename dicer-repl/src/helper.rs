use colored::Colorize;
use dicer_lib::RollSpec;
use rustyline::completion::Completer;
use rustyline::completion::Pair;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::hint::HistoryHinter;
use rustyline::validate::ValidationContext;
use rustyline::validate::ValidationResult;
use rustyline::validate::Validator;
use rustyline::Context;
use rustyline::Result;
use rustyline_derive::Helper;
use std::borrow::Cow;
use std::borrow::Cow::Borrowed;
use std::borrow::Cow::Owned;

#[derive(Helper)]
pub(crate) struct ReplHelper {
    pub(crate) hinter: HistoryHinter,
    pub(crate) colored: String,
}

/// Paint the character a parse would fail on, if any
pub(crate) fn mark_failure(line: &str) -> Option<String> {
    let offset = RollSpec::parse(line).err()?.offset();
    let mut chars = line.chars();
    let head: String = chars.by_ref().take(offset).collect();
    let culprit = chars.next()?;
    Some(format!(
        "{}{}{}",
        head,
        culprit.to_string().bold().red(),
        chars.as_str()
    ))
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        _line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Self::Candidate>)> {
        Ok((pos, Vec::new()))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        match mark_failure(line) {
            Some(marked) => Owned(marked),
            None => Borrowed(line),
        }
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Borrowed(&self.colored)
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.dimmed().to_string())
    }

    fn highlight_char(&self, line: &str, _pos: usize) -> bool {
        mark_failure(line).is_some()
    }
}

impl Validator for ReplHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> Result<ValidationResult> {
        let _ = ctx;
        Ok(ValidationResult::Valid(None))
    }

    fn validate_while_typing(&self) -> bool {
        false
    }
}
