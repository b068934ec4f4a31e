//! Cuisine-tag mapping and price display.

use std::collections::HashSet;

use crate::lexicon::{self, PRICE_LABELS};

/// Map provider type tags to cuisine labels.
///
/// Generic tags are dropped, known tags go through the cuisine table, and
/// anything else is title-cased with underscores turned into spaces.
/// Duplicates are removed keeping first-seen order.
pub fn cuisine_types(type_tags: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut cuisines = Vec::new();

    for tag in type_tags {
        if lexicon::is_generic_tag(tag) {
            continue;
        }
        let label = match lexicon::cuisine_label(tag) {
            Some(label) => label.to_string(),
            None => title_case_tag(tag),
        };
        if label.is_empty() {
            continue;
        }
        if seen.insert(label.clone()) {
            cuisines.push(label);
        }
    }

    cuisines
}

/// `"sushi_bar"` → `"Sushi Bar"`.
pub fn title_case_tag(tag: &str) -> String {
    tag.split('_')
        .filter(|w| !w.is_empty())
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Dollar-sign rendering of a price level; anything outside 0–4 is "Unknown".
pub fn price_display(price_level: i64) -> &'static str {
    usize::try_from(price_level)
        .ok()
        .and_then(|i| PRICE_LABELS.get(i))
        .copied()
        .unwrap_or(PRICE_LABELS[0])
}
