// Fuzzy matching utilities for phase and task name suggestions

/// Calculate Levenshtein distance between two strings
/// Returns the minimum number of single-character edits (insertions, deletions, substitutions)
/// needed to transform one string into another
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Single rolling row instead of the full matrix
    let mut prev: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr = vec![0; s2_chars.len() + 1];

    for (i, c1) in s1_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1)      // deletion
                .min(curr[j] + 1)                // insertion
                .min(prev[j] + cost);            // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[s2_chars.len()]
}

/// Check if s2 is a substring of s1 (case-insensitive)
pub fn is_substring_match(s1: &str, s2: &str) -> bool {
    s1.to_lowercase().contains(&s2.to_lowercase())
}

/// Find near matches for a name among candidates
/// Returns up to 3 matches sorted by distance (closest first), then by catalog position
pub fn find_near_matches(search: &str, candidates: &[&str], max_distance: usize) -> Vec<String> {
    let search_lower = search.to_lowercase();
    let mut matches: Vec<(usize, usize, &str)> = Vec::new(); // (distance, position, name)

    for (position, candidate) in candidates.iter().enumerate() {
        let candidate_lower = candidate.to_lowercase();
        let distance = levenshtein_distance(&search_lower, &candidate_lower);

        if distance <= max_distance {
            matches.push((distance, position, candidate));
        } else if !search_lower.is_empty() && is_substring_match(candidate, search) {
            // Substring hits ("review" -> "Design Review") rank just outside the threshold
            matches.push((max_distance + 1, position, candidate));
        }
    }

    matches.sort();
    matches.into_iter().take(3).map(|(_, _, name)| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("same", "same"), 0);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
    }

    #[test]
    fn test_is_substring_match() {
        assert!(is_substring_match("Design Review", "review"));
        assert!(is_substring_match("Design Review", "DESIGN"));
        assert!(!is_substring_match("Design Review", "mockup"));
    }

    #[test]
    fn test_find_near_matches() {
        let tasks = ["Design Review", "Mockup Creation", "Color Grading", "Fabric Selection"];

        // Typo
        assert_eq!(find_near_matches("Desgn Review", &tasks, 3), vec!["Design Review"]);

        // Case differences cost nothing
        assert_eq!(find_near_matches("color grading", &tasks, 3), vec!["Color Grading"]);

        // Substring
        assert_eq!(find_near_matches("fabric", &tasks, 3), vec!["Fabric Selection"]);

        // Nothing close
        assert!(find_near_matches("Shipping", &tasks, 3).is_empty());
    }
}
