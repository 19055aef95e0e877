//! CSS class list merging.

/// Join class lists into one, dropping empty tokens and repeats.
///
/// Earlier tokens keep their position, so fixed base classes stay in front of
/// caller-supplied ones.
pub fn class_names<'a>(lists: impl IntoIterator<Item = &'a str>) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for token in lists.into_iter().flat_map(str::split_whitespace) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(" ")
}
