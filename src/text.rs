//! Text helpers shared by the catalog loaders and the construct builder.

/// Splits a catalog line into tokens. Tokens are separated by whitespace;
/// single or double quotes group a multi-word token. Quotes do not nest.
pub fn split_tokens(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(current);
    }

    tokens
}

/// Removes markup tags from a display name. Anything between unescaped angle
/// brackets is dropped.
pub fn strip_tags(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_tag = false;
    for c in value.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Derives a URL-safe entry name from a display name: lowercased, runs of
/// whitespace and hyphens collapsed to a single hyphen, everything else but
/// letters, digits and underscores dropped.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_separator = false;
    for c in value.trim().chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' {
            pending_separator = true;
        }
    }
    slug
}

/// Uppercases the first letter of a slug to make a display name.
pub fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_tokens() {
        assert_eq!(
            split_tokens("pubchem PubChem http://pubchem.ncbi.nlm.nih.gov"),
            vec!["pubchem", "PubChem", "http://pubchem.ncbi.nlm.nih.gov"]
        );
    }

    #[test]
    fn groups_quoted_tokens() {
        assert_eq!(
            split_tokens("TM1 helix \"Transmembrane helix 1\""),
            vec!["TM1", "helix", "Transmembrane helix 1"]
        );
        assert_eq!(
            split_tokens("bw BW 'Ballesteros-Weinstein numbering'"),
            vec!["bw", "BW", "Ballesteros-Weinstein numbering"]
        );
    }

    #[test]
    fn keeps_empty_quoted_token() {
        assert_eq!(split_tokens("a \"\" b"), vec!["a", "", "b"]);
    }

    #[test]
    fn skips_blank_lines() {
        assert!(split_tokens("").is_empty());
        assert!(split_tokens("   \t ").is_empty());
    }

    #[test]
    fn strips_markup() {
        assert_eq!(strip_tags("5-HT<sub>1A</sub> receptor"), "5-HT1A receptor");
        assert_eq!(strip_tags("no markup"), "no markup");
    }

    #[test]
    fn slugifies_display_names() {
        assert_eq!(slugify("5-HT1A receptor (construct)"), "5-ht1a-receptor-construct");
        assert_eq!(slugify("  Beta-2 adrenergic  "), "beta-2-adrenergic");
        assert_eq!(slugify("plain"), "plain");
    }

    #[test]
    fn slugify_after_strip_tags() {
        assert_eq!(slugify(&strip_tags("AT<sub>1</sub> construct")), "at1-construct");
    }

    #[test]
    fn title_cases_slugs() {
        assert_eq!(title_case("bulge"), "Bulge");
        assert_eq!(title_case(""), "");
    }
}
