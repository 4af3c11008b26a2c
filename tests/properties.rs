//! Property tests for the line tokeniser.

use proptest::prelude::*;
use tokeniser::{tokenise, tokenise_str, Input, Status, StrSource, Tokenizer, Tokens};

#[derive(Debug, Clone)]
enum Word {
    Bare(String),
    Quoted(char, String),
}

impl Word {
    fn raw(&self) -> String {
        match self {
            Word::Bare(text) => text.clone(),
            Word::Quoted(q, text) => format!("{q}{text}{q}"),
        }
    }

    fn text(&self) -> &str {
        match self {
            Word::Bare(text) | Word::Quoted(_, text) => text,
        }
    }
}

fn word_strategy() -> impl Strategy<Value = Word> {
    prop_oneof![
        "[a-z0-9|<>.-]{1,6}".prop_map(Word::Bare),
        "[a-z \t']{0,6}".prop_map(|text| Word::Quoted('"', text)),
        "[a-z \t\"]{0,6}".prop_map(|text| Word::Quoted('\'', text)),
    ]
}

/// A line built from words separated by whitespace runs, with the words it should split into.
fn line_strategy() -> impl Strategy<Value = (Vec<Word>, String)> {
    (
        prop::collection::vec((word_strategy(), "[ \t]{1,3}"), 0..8),
        "[ \t]{0,3}",
    )
        .prop_map(|(words, leading)| {
            let mut line = leading;
            for (word, sep) in &words {
                line.push_str(&word.raw());
                line.push_str(sep);
            }
            (words.into_iter().map(|(word, _)| word).collect(), line)
        })
}

fn texts(tokens: &Tokens) -> Vec<String> {
    tokens.iter().map(|t| t.text().to_string()).collect()
}

proptest! {
    #[test]
    fn test_matches_naive_split((words, line) in line_strategy()) {
        let result = tokenise_str(&line);
        prop_assert_eq!(result.status, Status::Ok);
        let expected: Vec<String> = words.iter().map(|w| w.text().to_string()).collect();
        prop_assert_eq!(texts(&result.tokens), expected);
    }

    #[test]
    fn test_ranges_slice_raw_words((words, line) in line_strategy()) {
        let result = tokenise_str(&line);
        let raw: Vec<&str> = result.tokens.iter().map(|t| &line[t.range()]).collect();
        let expected: Vec<String> = words.iter().map(Word::raw).collect();
        prop_assert_eq!(raw, expected);
    }

    #[test]
    fn test_quoted_ranges_wrap_text(line in "[ab '\"\t]{0,24}") {
        let result = tokenise_str(&line);
        let mut last_end = 0;
        for token in result.tokens.iter() {
            prop_assert!(token.start() >= last_end);
            prop_assert!(token.start() <= token.end());
            last_end = token.end();

            let raw = &line[token.range()];
            match token.quote() {
                Some(q) => {
                    prop_assert_eq!(raw.to_string(), format!("{q}{}{q}", token.text()));
                }
                None if !raw.contains(['\'', '"']) => {
                    prop_assert_eq!(raw, token.text());
                }
                None => {
                    prop_assert!(raw.len() >= token.as_bytes().len());
                }
            }
        }
    }

    #[test]
    fn test_init_is_idempotent(line in "[ab '\"\t\r\n]{0,24}") {
        let mut tokenizer = Tokenizer::new();
        let first = tokenise(&mut tokenizer, &mut StrSource::new(&line)).unwrap();
        let second = tokenise(&mut tokenizer, &mut StrSource::new(&line)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_pull_and_push_agree(line in "[ab '\"\t\r]{0,24}") {
        let mut tokenizer = Tokenizer::new();
        let pulled = tokenise(&mut tokenizer, &mut StrSource::new(&line)).unwrap();
        prop_assert_eq!(pulled, tokenise_str(&line));
    }

    #[test]
    fn test_feed_after_done(line in "[ab '\"]{0,16}", extra in "[ab '\"\n]{1,8}") {
        let mut tokenizer = Tokenizer::new();
        let line = tokenise(&mut tokenizer, &mut StrSource::new(&line)).unwrap();
        prop_assert!(matches!(line.status, Status::Ok | Status::IncompleteToken));

        let mut tokens = line.tokens.clone();
        for b in extra.bytes() {
            prop_assert_eq!(tokenizer.feed(b, &mut tokens), Status::AlreadyDone);
        }
        prop_assert_eq!(tokenizer.feed(Input::End, &mut tokens), Status::AlreadyDone);
        prop_assert_eq!(tokens, line.tokens);
    }

    #[test]
    fn test_high_bytes_kept_verbatim(bytes in prop::collection::vec(0x80u8..=0xff, 1..12)) {
        let mut tokenizer = Tokenizer::new();
        let mut tokens = Tokens::new();
        for &b in &bytes {
            tokenizer.feed(b, &mut tokens);
        }
        prop_assert_eq!(tokenizer.feed(Input::End, &mut tokens), Status::Ok);
        prop_assert_eq!(tokens.count(), 1);
        let token = tokens.get(0).unwrap();
        prop_assert_eq!(token.as_bytes(), &bytes[..]);
        prop_assert_eq!(token.range(), 0..bytes.len());
    }
}
