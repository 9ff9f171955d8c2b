//! Brand slug derivation.
//!
//! A slug is derived once, at brand creation, from the display name and
//! never recomputed on rename. It appears in export filenames, so the
//! derivation must be deterministic.

/// Derive a URL-safe slug from a brand display name.
///
/// Convention: lowercase the name and replace each run of whitespace
/// with a single hyphen.
///
/// # Examples
///
/// ```
/// use brandhub_core::slug::brand_slug;
///
/// assert_eq!(brand_slug("Acme Corp"), "acme-corp");
/// assert_eq!(brand_slug("Blue  Sky   Media"), "blue-sky-media");
/// ```
pub fn brand_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
            in_whitespace = false;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_name() {
        assert_eq!(brand_slug("Acme Corp"), "acme-corp");
    }

    #[test]
    fn already_lowercase() {
        assert_eq!(brand_slug("acme"), "acme");
    }

    #[test]
    fn whitespace_run_collapses_to_one_hyphen() {
        assert_eq!(brand_slug("Blue  Sky   Media"), "blue-sky-media");
    }

    #[test]
    fn tabs_and_newlines_count_as_whitespace() {
        assert_eq!(brand_slug("North\tStar\nBrands"), "north-star-brands");
    }

    #[test]
    fn leading_and_trailing_whitespace_become_hyphens() {
        // Matches the observed derivation: no trimming is applied.
        assert_eq!(brand_slug(" Acme "), "-acme-");
    }

    #[test]
    fn stable_across_repeated_calls() {
        let name = "Mixed  CASE   Name";
        assert_eq!(brand_slug(name), brand_slug(name));
    }

    #[test]
    fn empty_name() {
        assert_eq!(brand_slug(""), "");
    }

    #[test]
    fn no_whitespace_runs_in_output() {
        let slug = brand_slug("a \t\n b   c");
        assert!(!slug.contains("--"));
        assert!(!slug.chars().any(char::is_whitespace));
    }

    #[test]
    fn unicode_lowercasing() {
        assert_eq!(brand_slug("CAFÉ Nord"), "café-nord");
    }
}
