//! English ordinal suffixes and title casing for report text.

/// Formats `n` as an English ordinal: 1st, 2nd, 3rd, 4th, 11th, 21st.
pub fn ordinal(n: i64) -> String {
    let last_two = n.unsigned_abs() % 100;
    let suffix = match (last_two % 10, last_two) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Upper-cases the first letter of each whitespace-separated word.
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}
