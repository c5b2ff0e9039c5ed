//! Tokenization and keyword extraction

use crate::processing::lexicon::Lexicon;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Characters stripped from both ends of a raw token before filtering
const EDGE_PUNCTUATION: &[char] = &['.', ',', ':', ';', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'', '`'];
const EDGE_SYMBOLS: &[char] = &['+', '-', '/', '#'];

/// Keywords used for generated content when a posting yields none
pub const DEFAULT_CONTENT_KEYWORDS: &[&str] = &["Python", "SQL", "Communication", "Problem Solving"];

pub struct TextProcessor {
    lexicon: Arc<Lexicon>,
    token_regex: Regex,
}

impl TextProcessor {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        let token_regex = Regex::new(r"[a-z0-9+#.]+").expect("Invalid token regex");

        Self {
            lexicon,
            token_regex,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Split text into lowercase tokens, dropping short tokens and stop words
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        self.token_regex
            .find_iter(&lowered)
            .map(|m| {
                m.as_str()
                    .trim_matches(EDGE_PUNCTUATION)
                    .trim_matches(EDGE_SYMBOLS)
            })
            .filter(|token| token.chars().count() > 2 && !self.lexicon.is_stop_word(token))
            .map(str::to_string)
            .collect()
    }

    /// Keywords for a job posting: taxonomy skills found in the text first,
    /// then the most frequent remaining terms, at most `limit` entries.
    pub fn extract_role_keywords(&self, text: &str, limit: usize) -> Vec<String> {
        let mut keywords = self.lexicon.taxonomy_hits(text);
        keywords.truncate(limit);

        let mut seed_terms: HashSet<String> = HashSet::new();
        for skill in &keywords {
            let lowered = skill.to_lowercase();
            seed_terms.extend(lowered.split_whitespace().map(str::to_string));
            seed_terms.insert(lowered);
        }

        let mut seen: HashSet<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        for token in self.rank_tokens(text, &seed_terms) {
            if keywords.len() >= limit {
                break;
            }
            let keyword = self.canonical_keyword(&token);
            if seen.insert(keyword.to_lowercase()) {
                keywords.push(keyword);
            }
        }

        keywords
    }

    /// Like [`extract_role_keywords`](Self::extract_role_keywords) but never empty
    pub fn extract_role_keywords_or_default(&self, text: &str, limit: usize) -> Vec<String> {
        let keywords = self.extract_role_keywords(text, limit);
        if keywords.is_empty() {
            return DEFAULT_CONTENT_KEYWORDS.iter().map(|s| s.to_string()).collect();
        }
        keywords
    }

    /// Frequency-ranked keywords without taxonomy seeding
    pub fn extract_general_keywords(&self, text: &str, limit: usize) -> Vec<String> {
        let mut keywords = Vec::new();
        let mut seen = HashSet::new();

        for token in self.rank_tokens(text, &HashSet::new()) {
            if keywords.len() >= limit {
                break;
            }
            let keyword = self.canonical_keyword(&token);
            if seen.insert(keyword.to_lowercase()) {
                keywords.push(keyword);
            }
        }

        keywords
    }

    /// Candidate keyword tokens ordered by descending frequency, ties alphabetical
    fn rank_tokens(&self, text: &str, exclude: &HashSet<String>) -> Vec<String> {
        let mut word_freq: HashMap<String, usize> = HashMap::new();

        for token in self.tokenize(text) {
            if token.len() < 3
                || token.chars().all(|c| c.is_ascii_digit())
                || self.lexicon.is_keyword_stop_word(&token)
                || exclude.contains(&token)
            {
                continue;
            }
            *word_freq.entry(token).or_insert(0) += 1;
        }

        let mut ranked: Vec<(String, usize)> = word_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        ranked.into_iter().map(|(token, _)| token).collect()
    }

    /// Acronyms map to their uppercase form, everything else is capitalized
    fn canonical_keyword(&self, token: &str) -> String {
        let token = token.trim_matches('.');
        match self.lexicon.alias(token) {
            Some(alias) => alias.to_string(),
            None => capitalize(token),
        }
    }
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
