//! Popular-dish mining from review text.
//!
//! Two candidate sources per review: maximal runs of capitalized words
//! ("Chicken Parm") and lowercase `<modifier> <food-noun>` phrases
//! ("pepperoni pizza"). Candidates are counted across all reviews of a
//! listing and only repeats survive.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::lexicon::{self, FOOD_NOUNS};
use crate::normalize::title_case_word;
use crate::types::Review;

/// Upper bound on dishes kept per listing.
pub const MAX_DISHES: usize = 10;

/// Minimum occurrences across a listing's reviews.
pub const MIN_OCCURRENCES: usize = 2;

/// Minimum candidate length in characters.
const MIN_CANDIDATE_CHARS: usize = 4;

static CAPITALIZED_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").unwrap());

/// Words with an optional apostrophe suffix, so "mom's" stays one word.
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z]+(?:['’][A-Za-z]+)?\b").unwrap());

/// Most frequent dish names across `reviews`, most frequent first, ties
/// broken by first appearance. At most `max` entries.
pub fn extract_popular_dishes(reviews: &[Review], max: usize) -> Vec<String> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for review in reviews {
        for candidate in candidates(&review.text) {
            if !is_plausible_dish(&candidate) {
                continue;
            }
            match index.get(&candidate) {
                Some(&i) => order[i].1 += 1,
                None => {
                    index.insert(candidate.clone(), order.len());
                    order.push((candidate, 1));
                }
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
        .into_iter()
        .filter(|(_, count)| *count >= MIN_OCCURRENCES)
        .take(max)
        .map(|(name, _)| name)
        .collect()
}

/// Raw candidates from one review, capitalized runs first.
fn candidates(text: &str) -> Vec<String> {
    let mut out: Vec<String> = CAPITALIZED_RUN_RE
        .find_iter(text)
        .filter_map(|m| trim_edge_words(m.as_str()))
        .collect();

    out.extend(food_phrases(text));
    out
}

/// Lowercase `<modifier> <food-noun>` pairs, title-cased. Pairs overlap, so
/// "the fish tacos" yields "Fish Tacos" even though "the fish" is rejected.
fn food_phrases(text: &str) -> Vec<String> {
    let words: Vec<regex::Match<'_>> = WORD_RE.find_iter(text).collect();
    let mut out = Vec::new();

    for pair in words.windows(2) {
        let (modifier, noun) = (pair[0], pair[1]);
        let gap = &text[modifier.end()..noun.start()];
        if gap.is_empty() || !gap.chars().all(char::is_whitespace) {
            continue;
        }
        if !is_lowercase_word(modifier.as_str()) || !is_food_noun(noun.as_str()) {
            continue;
        }
        if lexicon::is_stop_word(modifier.as_str()) {
            continue;
        }
        out.push(format!(
            "{} {}",
            title_case_word(modifier.as_str()),
            title_case_word(noun.as_str())
        ));
    }

    out
}

fn is_lowercase_word(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_lowercase())
}

/// A food noun, singular or with a trailing "s".
fn is_food_noun(word: &str) -> bool {
    if !is_lowercase_word(word) {
        return false;
    }
    let singular = word.strip_suffix('s').unwrap_or(word);
    FOOD_NOUNS.contains(&word) || FOOD_NOUNS.contains(&singular)
}

/// Strip filler words off both ends of a capitalized run and collapse
/// internal whitespace. Returns `None` when nothing is left.
fn trim_edge_words(run: &str) -> Option<String> {
    let words: Vec<&str> = run.split_whitespace().collect();
    let start = words.iter().position(|w| !lexicon::is_edge_word(w))?;
    let end = words.iter().rposition(|w| !lexicon::is_edge_word(w))?;
    Some(words[start..=end].join(" "))
}

fn is_plausible_dish(candidate: &str) -> bool {
    candidate.chars().count() >= MIN_CANDIDATE_CHARS && !lexicon::is_stop_word(candidate)
}
