use std::fmt;

use regex::Regex;

#[derive(Debug, thiserror::Error)]
pub enum GlobError {
    #[error("pattern '{0}' is empty")]
    Empty(String),
    #[error("pattern '{0}' has unbalanced braces")]
    UnbalancedBraces(String),
    #[error("pattern '{pattern}' failed to compile: {source}")]
    Regex {
        pattern: String,
        source: regex::Error,
    },
}

/// Glob matched against `/`-separated paths relative to an entry's `cwd`.
///
/// Supports `*`, `**`, `?`, `[...]` (with `!` negation) and `{a,b}`
/// alternation; everything else is literal.
#[derive(Clone)]
pub struct GlobPattern {
    source: String,
    regex: Regex,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> Result<Self, GlobError> {
        let trimmed = pattern.trim().trim_start_matches("./");
        if trimmed.is_empty() {
            return Err(GlobError::Empty(pattern.to_string()));
        }
        let translated = translate(trimmed)?;
        let regex = Regex::new(&translated).map_err(|source| GlobError::Regex {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, relative: &str) -> bool {
        self.regex.is_match(relative)
    }
}

impl fmt::Debug for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GlobPattern").field(&self.source).finish()
    }
}

fn translate(pattern: &str) -> Result<String, GlobError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2 + 2);
    let mut brace_depth = 0usize;
    let mut i = 0;

    out.push('^');
    while i < chars.len() {
        let c = chars[i];
        match c {
            '*' if chars.get(i + 1) == Some(&'*') => {
                let segment_start = i == 0 || chars[i - 1] == '/';
                match chars.get(i + 2) {
                    // `**/` spans zero or more whole segments.
                    Some('/') if segment_start => {
                        out.push_str("(?:[^/]+/)*");
                        i += 3;
                    }
                    None if i == 0 => {
                        out.push_str(".*");
                        i += 2;
                    }
                    // Only a whole segment is a globstar; `**.js` is `*.js`.
                    _ => {
                        out.push_str("[^/]*");
                        i += 2;
                    }
                }
                continue;
            }
            // Trailing `/**` also matches the directory itself.
            '/' if chars[i + 1..] == ['*', '*'] => {
                out.push_str("(?:/.*)?");
                i += 3;
                continue;
            }
            '*' => out.push_str("[^/]*"),
            '?' => out.push_str("[^/]"),
            '[' => match chars[i + 1..].iter().position(|c| *c == ']') {
                Some(offset) if offset > 0 => {
                    let class = &chars[i + 1..i + 1 + offset];
                    push_class(&mut out, class);
                    i += offset + 2;
                    continue;
                }
                _ => out.push_str(r"\["),
            },
            '{' => {
                brace_depth += 1;
                out.push_str("(?:");
            }
            ',' if brace_depth > 0 => out.push('|'),
            '}' if brace_depth > 0 => {
                brace_depth -= 1;
                out.push(')');
            }
            other => out.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
        i += 1;
    }
    if brace_depth != 0 {
        return Err(GlobError::UnbalancedBraces(pattern.to_string()));
    }
    out.push('$');
    Ok(out)
}

fn push_class(out: &mut String, class: &[char]) {
    out.push('[');
    let (negated, body) = match class.split_first() {
        Some(('!', rest)) | Some(('^', rest)) => (true, rest),
        _ => (false, class),
    };
    if negated {
        out.push_str("^/");
    }
    for c in body {
        if matches!(c, '\\' | '[' | ']' | '&' | '~' | '^') {
            out.push('\\');
        }
        out.push(*c);
    }
    out.push(']');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glob(pattern: &str) -> GlobPattern {
        GlobPattern::new(pattern).unwrap()
    }

    #[test]
    fn literal_path_matches_exactly() {
        let pattern = glob("css/font-awesome.min.css");
        assert!(pattern.matches("css/font-awesome.min.css"));
        assert!(!pattern.matches("css/font-awesomeXmin.css"));
        assert!(!pattern.matches("other/css/font-awesome.min.css"));
    }

    #[test]
    fn star_stays_within_a_segment() {
        let pattern = glob("fonts/*");
        assert!(pattern.matches("fonts/fontawesome-webfont.woff"));
        assert!(!pattern.matches("fonts/nested/file.woff"));
        assert!(!pattern.matches("fonts"));
    }

    #[test]
    fn double_star_spans_segments() {
        let pattern = glob("js/**/*.js");
        assert!(pattern.matches("js/app.js"));
        assert!(pattern.matches("js/vendor/lib/x.js"));
        assert!(!pattern.matches("css/app.js"));

        let everything = glob("**");
        assert!(everything.matches("a/b/c"));
    }

    #[test]
    fn question_mark_and_classes() {
        assert!(glob("js/app?.js").matches("js/app1.js"));
        assert!(!glob("js/app?.js").matches("js/app/.js"));
        assert!(glob("font[0-9].ttf").matches("font3.ttf"));
        assert!(glob("font[!0-9].ttf").matches("fontx.ttf"));
        assert!(!glob("font[!0-9].ttf").matches("font3.ttf"));
    }

    #[test]
    fn negated_class_may_end_with_dash() {
        let pattern = glob("font[!a-].ttf");
        assert!(pattern.matches("fontb.ttf"));
        assert!(!pattern.matches("font-.ttf"));
        assert!(!pattern.matches("fonta.ttf"));
        assert!(!pattern.matches("font/.ttf"));
    }

    #[test]
    fn double_star_inside_a_segment_is_a_single_star() {
        let pattern = glob("js/**.js");
        assert!(pattern.matches("js/app.js"));
        assert!(!pattern.matches("js/vendor/x.js"));
        assert!(!glob("a**/b").matches("ax/y/b"));
    }

    #[test]
    fn trailing_double_star_includes_the_directory() {
        let pattern = glob("js/**");
        assert!(pattern.matches("js"));
        assert!(pattern.matches("js/app.js"));
        assert!(pattern.matches("js/vendor/x.js"));
        assert!(!pattern.matches("jsx"));
    }

    #[test]
    fn braces_alternate() {
        let pattern = glob("{css,js}/*.min.*");
        assert!(pattern.matches("css/select2.min.css"));
        assert!(pattern.matches("js/select2.min.js"));
        assert!(!pattern.matches("fonts/select2.min.woff"));
    }

    #[test]
    fn leading_dot_slash_is_ignored() {
        assert!(glob("./jquery.min.js").matches("jquery.min.js"));
    }

    #[test]
    fn rejects_broken_patterns() {
        assert!(matches!(GlobPattern::new("  "), Err(GlobError::Empty(_))));
        assert!(matches!(
            GlobPattern::new("{css,js/*"),
            Err(GlobError::UnbalancedBraces(_))
        ));
    }
}
