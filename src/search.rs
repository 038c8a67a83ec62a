// src/search.rs
//
// Search Query Parser: raw query string → exact phrases + keywords.
//
// Double-quoted spans become exact phrases and are consumed before the
// comma split, so a phrase may contain commas. The unquoted remainder
// splits on commas into keywords. Everything is lowercased; empties drop.

/// Structured search query. Phrases and keywords are OR'd at match time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub phrases: Vec<String>,
    pub keywords: Vec<String>,
}

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        let mut phrases: Vec<String> = Vec::new();
        let mut rest = s!();
        let mut cur = s!();
        let mut in_quote = false;

        for ch in raw.chars() {
            match ch {
                '"' => {
                    if in_quote {
                        push_unique(&mut phrases, &cur);
                        cur.clear();
                    }
                    in_quote = !in_quote;
                }
                _ if in_quote => cur.push(ch),
                _ => rest.push(ch),
            }
        }
        // unterminated quote: the tail is plain text, not a phrase
        if in_quote {
            rest.push_str(&cur);
        }

        let mut keywords: Vec<String> = Vec::new();
        for piece in rest.split(',') {
            push_unique(&mut keywords, piece);
        }

        Self { phrases, keywords }
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty() && self.keywords.is_empty()
    }

    /// True when `text` contains at least one phrase or one keyword.
    /// An entirely empty query matches everything.
    pub fn matches(&self, text: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        let hay = text.to_lowercase();
        self.phrases.iter().any(|p| hay.contains(p.as_str()))
            || self.keywords.iter().any(|k| hay.contains(k.as_str()))
    }
}

fn push_unique(list: &mut Vec<String>, term: &str) {
    let term = term.trim().to_lowercase();
    if !term.is_empty() && !list.contains(&term) {
        list.push(term);
    }
}

/* ---------------- Tests ---------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrases_and_keywords_split() {
        let q = SearchQuery::parse("\"order entry\", setup, \"go live\"");
        assert_eq!(q.phrases, vec!["order entry", "go live"]);
        assert_eq!(q.keywords, vec!["setup"]);
    }

    #[test]
    fn phrase_commas_are_not_split_points() {
        let q = SearchQuery::parse("\"a, b\", c");
        assert_eq!(q.phrases, vec!["a, b"]);
        assert_eq!(q.keywords, vec!["c"]);
    }

    #[test]
    fn empty_and_whitespace_terms_drop() {
        let q = SearchQuery::parse(" , \"\" ,  \"  \" , x ");
        assert!(q.phrases.is_empty());
        assert_eq!(q.keywords, vec!["x"]);
    }

    #[test]
    fn unterminated_quote_is_plain_text() {
        let q = SearchQuery::parse("\"dangling, tail");
        assert!(q.phrases.is_empty());
        assert_eq!(q.keywords, vec!["dangling", "tail"]);
    }

    #[test]
    fn lowercased_and_deduped() {
        let q = SearchQuery::parse("Pump, pump, \"PUMP HOUSE\"");
        assert_eq!(q.phrases, vec!["pump house"]);
        assert_eq!(q.keywords, vec!["pump"]);
    }

    #[test]
    fn empty_query_matches_all() {
        let q = SearchQuery::parse("");
        assert!(q.is_empty());
        assert!(q.matches("anything"));
    }

    #[test]
    fn match_is_or_of_terms() {
        let q = SearchQuery::parse("\"order entry\", setup");
        assert!(q.matches("Order Entry migration"));
        assert!(q.matches("final SETUP step"));
        assert!(!q.matches("unrelated"));
    }
}
