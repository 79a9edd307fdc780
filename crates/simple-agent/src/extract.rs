//! Query scanning
//!
//! Cheap positional scanning over a lowercased query: words, numbers and
//! whole-word phrases, each reported with its byte offset so callers can
//! prefer the candidate closest after a trigger word.

/// A lowercased query with its words and numbers pre-scanned
#[derive(Debug)]
pub struct QueryText {
    lower: String,
    words: Vec<(usize, String)>,
    numbers: Vec<(usize, String)>,
}

impl QueryText {
    pub fn new(query: &str) -> Self {
        let lower = query.to_lowercase();
        let words = scan_words(&lower);
        let numbers = scan_numbers(&lower);
        Self { lower, words, numbers }
    }

    /// Position of the first word beginning with any of `stems`
    pub fn word_starting_with(&self, stems: &[&str]) -> Option<usize> {
        self.words
            .iter()
            .find(|(_, w)| stems.iter().any(|s| w.starts_with(s)))
            .map(|(pos, _)| *pos)
    }

    /// Position of the first word equal to any of `candidates`
    pub fn word_equal_to(&self, candidates: &[&str]) -> Option<usize> {
        self.words
            .iter()
            .find(|(_, w)| candidates.contains(&w.as_str()))
            .map(|(pos, _)| *pos)
    }

    /// Position of the first symbol sitting between two numbers, as in
    /// `25*4`. With `spaced`, whitespace is required on both sides (`10 - 3`),
    /// which keeps dates like `10/12` and signs like `-2` out.
    pub fn binary_symbol(&self, symbols: &[char], spaced: bool) -> Option<usize> {
        self.lower
            .match_indices(symbols)
            .find(|&(pos, sym)| {
                let before = &self.lower[..pos];
                let after = &self.lower[pos + sym.len()..];
                let gap_ok = !spaced
                    || (before.ends_with(char::is_whitespace)
                        && after.starts_with(char::is_whitespace));
                gap_ok
                    && before.trim_end().ends_with(|c: char| c.is_ascii_digit())
                    && after.trim_start().starts_with(|c: char| c.is_ascii_digit())
            })
            .map(|(pos, _)| pos)
    }

    /// Lowercased text between two byte offsets
    pub fn between(&self, start: usize, end: usize) -> &str {
        self.lower.get(start..end).unwrap_or_default()
    }

    /// Whole-word occurrences of a (possibly multi-word) phrase
    pub fn phrase_positions(&self, phrase: &str) -> Vec<usize> {
        let phrase = phrase.to_lowercase();
        if phrase.is_empty() {
            return Vec::new();
        }

        self.lower
            .match_indices(&phrase)
            .map(|(pos, _)| pos)
            .filter(|&pos| {
                let before = self.lower[..pos].chars().next_back();
                let after = self.lower[pos + phrase.len()..].chars().next();
                !before.is_some_and(char::is_alphanumeric)
                    && !after.is_some_and(char::is_alphanumeric)
            })
            .collect()
    }

    /// Pick the candidate whose occurrence follows `anchor` most closely,
    /// falling back to the earliest occurrence anywhere.
    pub fn nearest_after<'a>(&self, anchor: usize, candidates: &[&'a str]) -> Option<&'a str> {
        let mut after: Option<(usize, &'a str)> = None;
        let mut anywhere: Option<(usize, &'a str)> = None;

        for &candidate in candidates {
            for pos in self.phrase_positions(candidate) {
                if pos >= anchor && after.is_none_or(|(best, _)| pos < best) {
                    after = Some((pos, candidate));
                }
                if anywhere.is_none_or(|(best, _)| pos < best) {
                    anywhere = Some((pos, candidate));
                }
            }
        }

        after.or(anywhere).map(|(_, c)| c)
    }

    /// Numbers in order of appearance, as written
    pub fn numbers(&self) -> impl Iterator<Item = (usize, &str)> {
        self.numbers.iter().map(|(pos, n)| (*pos, n.as_str()))
    }
}

fn scan_words(text: &str) -> Vec<(usize, String)> {
    let mut words = Vec::new();
    let mut current: Option<(usize, String)> = None;

    for (i, c) in text.char_indices() {
        if c.is_alphanumeric() {
            current.get_or_insert_with(|| (i, String::new())).1.push(c);
        } else if let Some(word) = current.take() {
            words.push(word);
        }
    }
    words.extend(current);
    words
}

/// Integers and decimals, with a leading `-` when it is not joined to a word
fn scan_numbers(text: &str) -> Vec<(usize, String)> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut numbers = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        let prev = i.checked_sub(1).map(|p| chars[p].1);

        if prev.is_some_and(|p| p.is_alphanumeric() || p == '.') || !c.is_ascii_digit() {
            i += 1;
            continue;
        }

        let negative = prev == Some('-')
            && i.checked_sub(2).is_none_or(|p| !chars[p].1.is_alphanumeric());
        let start = if negative { chars[i - 1].0 } else { pos };

        let mut end = i;
        let mut seen_point = false;
        while end < chars.len() {
            let c = chars[end].1;
            let next_is_digit = chars.get(end + 1).is_some_and(|(_, n)| n.is_ascii_digit());
            if c.is_ascii_digit() || (c == '.' && !seen_point && next_is_digit) {
                seen_point |= c == '.';
                end += 1;
            } else {
                break;
            }
        }

        let stop = chars.get(end).map_or(text.len(), |(p, _)| *p);
        numbers.push((start, text[start..stop].to_string()));
        i = end;
    }

    numbers
}
