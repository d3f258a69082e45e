// Shared prompt constants and prompt-building utilities.
// Each module that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting pieces.

/// Fills `{name}` placeholders in a template in a single pass.
///
/// Substituted text is never re-scanned, so a value that itself contains
/// `{name}` is emitted literally. Placeholders without a matching variable
/// are left untouched.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_template_fills_all_occurrences() {
        let out = render_template("{a} and {b} and {a}", &[("a", "x"), ("b", "y")]);
        assert_eq!(out, "x and y and x");
    }

    #[test]
    fn test_render_template_keeps_unknown_placeholders() {
        let out = render_template("{known} {unknown} {", &[("known", "1")]);
        assert_eq!(out, "1 {unknown} {");
    }

    #[test]
    fn test_render_template_does_not_rescan_values() {
        let out = render_template("{a}|{b}", &[("a", "{b}"), ("b", "B")]);
        assert_eq!(out, "{b}|B");
    }

    #[test]
    fn test_render_template_handles_json_values() {
        let out = render_template("ref: {json}", &[("json", r#"{"CAS Number": ["7732-18-5"]}"#)]);
        assert_eq!(out, r#"ref: {"CAS Number": ["7732-18-5"]}"#);
    }
}
