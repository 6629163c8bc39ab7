/// Named-placeholder substitution for the static content tables.
///
/// Syntax: `{name}` is replaced by the bound value, `{{` and `}}` are literal braces.
/// Every placeholder must be bound; an unbound name is an error instead of being left
/// in the output, and all placeholders are resolved in a single pass so the binding
/// order never matters.
use crate::error::CoreError;

/// Values bound to placeholder names for one render.
#[derive(Debug, Default, Clone)]
pub struct Vars<'a> {
    entries: Vec<(&'static str, &'a str)>,
}

impl<'a> Vars<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`. A later binding of the same name wins.
    pub fn with(mut self, name: &'static str, value: &'a str) -> Self {
        self.entries.retain(|(n, _)| *n != name);
        self.entries.push((name, value));
        self
    }

    fn get(&self, name: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }
}

/// Render `template` with `vars`.
pub fn render(template: &str, vars: &Vars<'_>) -> Result<String, CoreError> {
    let mut out = String::with_capacity(template.len() + 32);
    let mut chars = template.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        match ch {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let start = idx + 1;
                let mut end = None;
                for (j, c) in chars.by_ref() {
                    if c == '}' {
                        end = Some(j);
                        break;
                    }
                    if c == '{' {
                        return Err(malformed(template, "nested '{' inside placeholder"));
                    }
                }
                let Some(end) = end else {
                    return Err(malformed(template, "unclosed '{'"));
                };
                let name = &template[start..end];
                if !is_valid_name(name) {
                    return Err(malformed(
                        template,
                        &format!("invalid placeholder name {name:?}"),
                    ));
                }
                let value = vars.get(name).ok_or_else(|| CoreError::UnknownPlaceholder {
                    name: name.to_string(),
                    template: template.to_string(),
                })?;
                out.push_str(value);
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(malformed(template, "unmatched '}'"));
                }
            }
            _ => out.push(ch),
        }
    }

    Ok(out)
}

/// Collapse runs of spaces and drop a space left in front of punctuation.
///
/// Used after an optional placeholder rendered empty, e.g. "Error {code}?" with no
/// code becomes "Error?" rather than "Error ?".
pub fn tidy_spacing(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            ' ' if out.ends_with(' ') => {}
            '?' | '!' | ',' | '.' | ':' if out.ends_with(' ') => {
                out.pop();
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out.trim().to_string()
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn malformed(template: &str, message: &str) -> CoreError {
    CoreError::MalformedTemplate {
        template: template.to_string(),
        message: message.to_string(),
    }
}
