//! template
//!
//! Placeholder interpolation for help and usage text.
//!
//! Placeholders use the `{{ name }}` form. A referenced placeholder with no
//! supplied value fails rather than emitting blank text, so a typo in a
//! help template surfaces immediately instead of rendering as a hole.

use std::collections::HashMap;

use thiserror::Error;

/// Errors from template interpolation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder was referenced but no value was supplied for it.
    #[error("no value supplied for template placeholder '{0}'")]
    MissingValue(String),
}

/// Interpolate `{{ name }}` placeholders from the supplied values.
///
/// Text without placeholders passes through untouched, including an
/// unterminated `{{`, which is treated as literal text.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use tiller::template::interpolate;
///
/// let mut values = HashMap::new();
/// values.insert("binary".to_string(), "tiller".to_string());
///
/// let usage = interpolate("Usage: {{ binary }} <command>", &values).unwrap();
/// assert_eq!(usage, "Usage: tiller <command>");
/// ```
pub fn interpolate(
    template: &str,
    values: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let placeholder = after[..end].trim();
                match values.get(placeholder) {
                    Some(value) => out.push_str(value),
                    None => return Err(TemplateError::MissingValue(placeholder.to_string())),
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}
