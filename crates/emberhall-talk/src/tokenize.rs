//! Utterance tokenization.
//!
//! Every utterance is split under both grammars up front. Which split an
//! entry consumes depends on the entry's filter, and that is not known until
//! the table scan finds a match, so both must be available beforehand.

/// Both tokenizations of one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenization {
    /// Quotation grammar: token before the first `"`, left-trimmed.
    pub quote_words: String,
    /// Quotation grammar: text after the first `"`, right-trimmed.
    pub quote_param: String,
    /// First-word grammar: token before the first space.
    pub first_words: String,
    /// First-word grammar: untrimmed remainder after the first space.
    pub first_param: String,
}

/// Compute both splits of an utterance.
pub fn tokenize(words: &str) -> Tokenization {
    let (quote_words, quote_param) = split_quotation(words);
    let (first_words, first_param) = split_first_word(words);
    Tokenization {
        quote_words,
        quote_param,
        first_words,
        first_param,
    }
}

/// Split at the first double quote. The quote itself is discarded; no
/// closing-quote matching, no escaping. The token is trimmed of spaces on
/// the left, the parameter on the right.
fn split_quotation(words: &str) -> (String, String) {
    let (token, param) = match words.find('"') {
        Some(loc) => (&words[..loc], &words[loc + 1..]),
        None => (words, ""),
    };
    (
        token.trim_start_matches(' ').to_string(),
        param.trim_end_matches(' ').to_string(),
    )
}

/// Split at the first space. The remainder is passed through untrimmed.
fn split_first_word(words: &str) -> (String, String) {
    match words.find(' ') {
        Some(loc) => (words[..loc].to_string(), words[loc + 1..].to_string()),
        None => (words.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn quote_split_basic() {
        let t = tokenize("ban\"victim");
        assert_eq!(t.quote_words, "ban");
        assert_eq!(t.quote_param, "victim");
    }

    #[test]
    fn quote_split_trims_token_left_and_param_right() {
        let t = tokenize("  ban \" victim  ");
        assert_eq!(t.quote_words, "ban ");
        assert_eq!(t.quote_param, " victim");
    }

    #[test]
    fn quote_split_only_first_quote_counts() {
        let t = tokenize("say\"a\"b");
        assert_eq!(t.quote_words, "say");
        assert_eq!(t.quote_param, "a\"b");
    }

    #[test]
    fn no_quote_gives_whole_utterance_and_empty_param() {
        let t = tokenize("hello there");
        assert_eq!(t.quote_words, "hello there");
        assert_eq!(t.quote_param, "");
    }

    #[test]
    fn first_word_split_basic() {
        let t = tokenize("guild Knights of Ember");
        assert_eq!(t.first_words, "guild");
        assert_eq!(t.first_param, "Knights of Ember");
    }

    #[test]
    fn first_word_param_is_untrimmed() {
        let t = tokenize("guild  Knights ");
        assert_eq!(t.first_words, "guild");
        assert_eq!(t.first_param, " Knights ");
    }

    #[test]
    fn no_space_gives_whole_utterance_and_empty_param() {
        let t = tokenize("commands");
        assert_eq!(t.first_words, "commands");
        assert_eq!(t.first_param, "");
    }

    #[test]
    fn grammars_split_independently() {
        // The quote sits after the first space; each grammar picks its own
        // boundary.
        let t = tokenize("tell all\"message");
        assert_eq!(t.quote_words, "tell all");
        assert_eq!(t.quote_param, "message");
        assert_eq!(t.first_words, "tell");
        assert_eq!(t.first_param, "all\"message");
    }

    #[test]
    fn empty_utterance() {
        let t = tokenize("");
        assert_eq!(t.quote_words, "");
        assert_eq!(t.quote_param, "");
        assert_eq!(t.first_words, "");
        assert_eq!(t.first_param, "");
    }

    proptest! {
        // An utterance with no space and no quote is its own token under
        // both grammars, with empty parameters.
        #[test]
        fn plain_word_is_identity(word in "[^ \"]{0,24}") {
            let t = tokenize(&word);
            prop_assert_eq!(&t.quote_words, &word);
            prop_assert_eq!(&t.quote_param, "");
            prop_assert_eq!(&t.first_words, &word);
            prop_assert_eq!(&t.first_param, "");
        }

        // The quotation split never loses characters other than the quote
        // itself and the trimmed spaces.
        #[test]
        fn quote_split_preserves_interior(tok in "[a-z]{1,8}", param in "[a-z]{1,8}") {
            let t = tokenize(&format!("{tok}\"{param}"));
            prop_assert_eq!(t.quote_words, tok);
            prop_assert_eq!(t.quote_param, param);
        }
    }
}
