//! Conversion of raw flag tokens into option names.

/// Signature of a name normalizer accepted by [`ArgvParser`](crate::ArgvParser).
pub type Normalizer = fn(&str) -> String;

/// Turn a raw flag token into a camelCase option name.
///
/// One or two leading dashes are stripped and the rest is split into words
/// on every non-alphanumeric character. Within a run of alphanumerics an
/// uppercase letter starts a new word, unless the run is all caps (`FLAG`,
/// `OUT2`), which is a single word. Words are lowercased and joined
/// lower-camel-case, so `--some-flag`, `--some_flag` and `--someFlag` all
/// become `someFlag`, and a normalized name normalizes to itself. Input
/// without alphanumeric content yields an empty name.
pub fn normalize_name(raw: &str) -> String {
    let mut name = String::new();
    for (i, word) in split_words(strip_dashes(raw)).iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            name.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}

/// Strip one or two leading dashes from a flag token.
pub fn strip_dashes(raw: &str) -> &str {
    let rest = raw.strip_prefix('-').unwrap_or(raw);
    rest.strip_prefix('-').unwrap_or(rest)
}

fn split_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    for run in text.split(|c: char| !c.is_alphanumeric()) {
        if run.is_empty() {
            continue;
        }
        if is_all_caps(run) {
            words.push(run);
            continue;
        }
        let mut start = 0;
        for (i, c) in run.char_indices() {
            if c.is_uppercase() && i > start {
                words.push(&run[start..i]);
                start = i;
            }
        }
        words.push(&run[start..]);
    }
    words
}

fn is_all_caps(run: &str) -> bool {
    run.chars().next().is_some_and(char::is_uppercase) && !run.chars().any(char::is_lowercase)
}
