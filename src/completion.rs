use crate::commands::BUILTINS;
use crate::system_info::OsQuery;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Tab completion for command names and `os` selector flags
#[derive(Clone)]
pub struct ShellCompleter;

impl ShellCompleter {
    /// Candidates for the word being typed at the end of `input`
    pub fn candidates(input: &str) -> (usize, Vec<String>) {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let prefix = if input.ends_with(char::is_whitespace) {
            ""
        } else {
            parts.last().copied().unwrap_or("")
        };
        let start = input.len() - prefix.len();
        let word_index = if prefix.is_empty() {
            parts.len()
        } else {
            parts.len() - 1
        };

        let pool: Vec<&str> = match (word_index, parts.first()) {
            (0, _) => BUILTINS.builtin_names(),
            (1, Some(&"os")) => OsQuery::FLAGS.to_vec(),
            _ => Vec::new(),
        };

        let mut candidates: Vec<String> = pool
            .into_iter()
            .filter(|name| name.starts_with(prefix))
            .map(str::to_string)
            .collect();
        candidates.sort();
        candidates.dedup();
        (start, candidates)
    }
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, names) = Self::candidates(&line[..pos]);
        let single = names.len() == 1;

        let pairs = names
            .into_iter()
            .map(|name| {
                // If there's exactly one match, add a trailing space
                let replacement = if single {
                    format!("{} ", name)
                } else {
                    name.clone()
                };
                Pair {
                    display: name,
                    replacement,
                }
            })
            .collect();

        Ok((start, pairs))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> std::borrow::Cow<'l, str> {
        std::borrow::Cow::Borrowed(line)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> std::borrow::Cow<'b, str> {
        std::borrow::Cow::Borrowed(prompt)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> std::borrow::Cow<'h, str> {
        std::borrow::Cow::Borrowed(hint)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: CmdKind) -> bool {
        false
    }
}

impl Validator for ShellCompleter {}

impl Helper for ShellCompleter {}
