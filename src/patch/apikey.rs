use super::{FlatBlockMatcher, Patched, TextPatch};
use crate::config::ApiKeyConfig;
use crate::error::PatchResult;
use regex::Captures;
use std::borrow::Cow;
use tracing::debug;

/// How the injected header reads the anon key at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// `import.meta.env.<VAR>` (Vite client code)
    ImportMetaEnv,
    /// `process.env.<VAR>`
    ProcessEnv,
}

impl ValueSource {
    /// Textual guess: files mentioning the marker anywhere use Vite access
    pub fn for_text(text: &str, marker: &str) -> Self {
        if text.contains(marker) {
            ValueSource::ImportMetaEnv
        } else {
            ValueSource::ProcessEnv
        }
    }

    pub fn expression(&self, env_var: &str) -> String {
        match self {
            ValueSource::ImportMetaEnv => format!("import.meta.env.{}", env_var),
            ValueSource::ProcessEnv => format!("process.env.{}", env_var),
        }
    }
}

/// Injects the API-key entry into `fetch` header blocks.
///
/// Two block shapes are recognised:
/// - primary: single-quoted `'Authorization'` followed by `'Content-Type'`
/// - legacy: double-quoted `"Content-Type"`, only when the block also
///   mentions the authorization header
///
/// Blocks that already mention the key are left alone.
#[derive(Debug, Clone)]
pub struct ApiKeyPatch {
    config: ApiKeyConfig,
    primary: FlatBlockMatcher,
    legacy: FlatBlockMatcher,
}

impl ApiKeyPatch {
    pub fn new(config: ApiKeyConfig) -> PatchResult<Self> {
        let auth = regex::escape(&config.auth_key);
        let content_type = regex::escape(&config.content_type_key);

        let primary = FlatBlockMatcher::new(&format!(
            r"(headers:\s*\{{[^}}]*'{auth}':[^}}]*'{content_type}':[^}}]*)\}}"
        ))?;
        let legacy =
            FlatBlockMatcher::new(&format!(r#"(headers:\s*\{{[^}}]*"{content_type}":[^}}]*)\}}"#))?;

        Ok(Self {
            config,
            primary,
            legacy,
        })
    }

    /// Re-emit `body` with the key entry appended and the brace closed.
    ///
    /// The separator goes after the last entry's code, ahead of any
    /// trailing comment, and is not doubled when a comma is already there.
    fn inject(&self, body: &str, quote: char, value: &str) -> String {
        let (code, comment) = split_trailing_comment(body.trim_end());
        let sep = if code.ends_with(',') { "" } else { "," };
        format!(
            "{code}{sep}{comment}\n{indent}{quote}{key}{quote}: {value}\n{closing}}}",
            indent = self.config.entry_indent,
            key = self.config.header_key,
            closing = self.config.closing_indent,
        )
    }
}

/// Split `text` into its code and a trailing `//` or `/* */` comment.
///
/// The comment part keeps the whitespace that precedes it. Comment markers
/// inside string literals on the last line (`'https://...'`) are ignored.
fn split_trailing_comment(text: &str) -> (&str, &str) {
    let start = if text.ends_with("*/") {
        text.rfind("/*")
    } else {
        let line_start = text.rfind('\n').map_or(0, |i| i + 1);
        line_comment_start(&text[line_start..]).map(|i| line_start + i)
    };

    match start {
        Some(start) => {
            let code = text[..start].trim_end();
            (code, &text[code.len()..])
        }
        None => (text, ""),
    }
}

/// Byte offset of the first `//` outside a string literal
fn line_comment_start(line: &str) -> Option<usize> {
    let mut in_string: Option<char> = None;
    let mut escaped = false;
    let mut prev_slash = false;

    for (i, c) in line.char_indices() {
        if let Some(q) = in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                in_string = None;
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => {
                in_string = Some(c);
                prev_slash = false;
            }
            '/' if prev_slash => return Some(i - 1),
            '/' => prev_slash = true,
            _ => prev_slash = false,
        }
    }
    None
}

impl TextPatch for ApiKeyPatch {
    fn name(&self) -> &str {
        "apikey"
    }

    fn patch(&self, content: &str) -> Patched {
        let source = ValueSource::for_text(content, &self.config.vite_marker);
        let value = source.expression(&self.config.env_var);
        let key = self.config.header_key.as_str();
        let mut matched = false;

        let pass = self.primary.replace_all(content, |caps: &Captures<'_>| {
            matched = true;
            let body = &caps[1];
            if body.contains(key) {
                caps[0].to_string()
            } else {
                self.inject(body, '\'', &value)
            }
        });

        let pass = self.legacy.replace_all(&pass, |caps: &Captures<'_>| {
            let body = &caps[1];
            if !body.contains(self.config.auth_key.as_str()) {
                return caps[0].to_string();
            }
            matched = true;
            if body.contains(key) {
                caps[0].to_string()
            } else {
                self.inject(body, '"', &value)
            }
        })
        .into_owned();

        debug!("apikey: value source {:?}, block matched: {}", source, matched);
        Patched::from_replacement(content, Cow::Owned(pass), matched)
    }
}
