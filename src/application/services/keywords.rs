use std::collections::HashMap;

/// Frequency-ranked keyword fallback: lowercase, strip non-alphanumerics,
/// drop tokens of length <= 3, rank by descending frequency. Ties keep
/// first-encounter order (stable sort).
pub fn top_keywords(text: &str, limit: usize) -> Vec<String> {
    let mut entries: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in text.split_whitespace() {
        let clean: String = token
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        if clean.len() <= 3 {
            continue;
        }

        match index.get(&clean) {
            Some(&i) => entries[i].1 += 1,
            None => {
                index.insert(clean.clone(), entries.len());
                entries.push((clean, 1));
            }
        }
    }

    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.into_iter().take(limit).map(|(word, _)| word).collect()
}
