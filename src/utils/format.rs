/// Format a count with thousands separators (e.g., 1,234,567)
pub fn format_count_with_separator(count: u64) -> String {
    let s = count.to_string();
    let mut result = String::new();

    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

/// "1 artwork found" / "12 artworks found"
pub fn results_count_label(count: usize) -> String {
    let noun = if count == 1 { "artwork" } else { "artworks" };
    format!("{} {} found", count, noun)
}

/// "Showing 12 of 1,234" when the server has more than one page of matches
pub fn page_summary(shown: usize, total: u64) -> Option<String> {
    if total > shown as u64 {
        Some(format!(
            "Showing {} of {}",
            shown,
            format_count_with_separator(total)
        ))
    } else {
        None
    }
}
