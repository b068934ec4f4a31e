//! Keyword-trigger descriptor extraction.

use crate::lexicon::DESCRIPTOR_PATTERNS;
use crate::types::Descriptor;

/// Every descriptor with at least one trigger substring in `text`, in
/// declaration order. Matching is case-insensitive; the first hit per
/// category short-circuits.
pub fn extract_descriptors(text: &str) -> Vec<Descriptor> {
    let text_lower = text.to_lowercase();
    DESCRIPTOR_PATTERNS
        .iter()
        .filter(|(_, triggers)| triggers.iter().any(|t| text_lower.contains(t)))
        .map(|(descriptor, _)| *descriptor)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affordable_and_family_friendly() {
        let found = extract_descriptors("Great place, very affordable and family friendly!");
        assert!(found.contains(&Descriptor::Affordable));
        assert!(found.contains(&Descriptor::FamilyFriendly));
    }

    #[test]
    fn test_case_insensitive() {
        let found = extract_descriptors("PERFECT for DATE NIGHT");
        assert_eq!(found, vec![Descriptor::Romantic]);
    }

    #[test]
    fn test_declaration_order() {
        let found = extract_descriptors("authentic and homemade, also cheap");
        assert_eq!(
            found,
            vec![
                Descriptor::Affordable,
                Descriptor::ComfortFood,
                Descriptor::Authentic
            ]
        );
    }

    #[test]
    fn test_no_match() {
        assert!(extract_descriptors("it was fine").is_empty());
        assert!(extract_descriptors("").is_empty());
    }
}
