//! Word-frequency counting

use log::info;
use std::collections::HashMap;

/// Return the `k` most frequent words in `text`, most frequent first
///
/// Words are runs of alphanumeric characters; everything else separates
/// them, and counting is case-insensitive. Equal counts are ordered
/// lexicographically so the result is deterministic. Fewer than `k`
/// distinct words returns all of them.
pub fn top_k_words(text: &str, k: usize) -> Vec<(String, usize)> {
    let mut normalized = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            normalized.extend(c.to_lowercase());
        } else {
            normalized.push(' ');
        }
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in normalized.split_whitespace() {
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(k);

    info!("Top {} frequent words: {:?}", k, ranked);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_k_basic() {
        let text = "the cat and the dog and the bird";
        let result = top_k_words(text, 2);

        assert_eq!(
            result,
            vec![("the".to_string(), 3), ("and".to_string(), 2)]
        );
    }

    #[test]
    fn test_punctuation_and_case() {
        let text = "Hello, hello! HELLO? world.";
        let result = top_k_words(text, 10);

        assert_eq!(
            result,
            vec![("hello".to_string(), 3), ("world".to_string(), 1)]
        );
    }

    #[test]
    fn test_ties_break_lexicographically() {
        let result = top_k_words("banana apple cherry", 3);

        assert_eq!(
            result,
            vec![
                ("apple".to_string(), 1),
                ("banana".to_string(), 1),
                ("cherry".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_k_larger_than_vocabulary() {
        let result = top_k_words("one two", 10);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_empty_text() {
        assert!(top_k_words("", 5).is_empty());
        assert!(top_k_words("...!!!", 5).is_empty());
    }

    #[test]
    fn test_digits_are_words() {
        let result = top_k_words("error 404 error 404 error", 2);

        assert_eq!(
            result,
            vec![("error".to_string(), 3), ("404".to_string(), 2)]
        );
    }
}
