//! Domain Classifier: maps an HS chapter to a human-readable trade domain.

use serde::Serialize;

use crate::taxonomy::hs_code;

/// Label returned for anything the range table does not cover.
pub const DEFAULT_DOMAIN: &str = "General Trade Goods";

/// A chapter key in the range table: a single chapter or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterKey {
    Single(u8),
    Range(u8, u8),
}

impl ChapterKey {
    pub fn contains(self, chapter: u8) -> bool {
        match self {
            ChapterKey::Single(c) => c == chapter,
            ChapterKey::Range(lo, hi) => (lo..=hi).contains(&chapter),
        }
    }
}

/// HS section table, scanned in order. Ranges do not overlap and cover chapters 1-97.
pub const HS_DOMAIN_TABLE: &[(ChapterKey, &str)] = &[
    (ChapterKey::Range(1, 5), "Live Animals"),
    (ChapterKey::Range(6, 14), "Vegetable Products"),
    (
        ChapterKey::Single(15),
        "Animal, Vegetable Or Microbial Fats And Oils And Their Cleavage Products; Prepared Edible Fats; Animal Or Vegetable Waxes",
    ),
    (
        ChapterKey::Range(16, 24),
        "Prepared Foodstuffs; Beverages, Spirits And Vinegar; Tobacco And Manufactured Tobacco Substitutes",
    ),
    (ChapterKey::Range(25, 27), "Mineral Products"),
    (
        ChapterKey::Range(28, 38),
        "Products Of The Chemical Or Allied Industries",
    ),
    (
        ChapterKey::Range(39, 40),
        "Plastics And Articles Thereof; Rubber And Articles Thereof",
    ),
    (
        ChapterKey::Range(41, 43),
        "Raw Hides And Skins, Leather, Furskins; Articles Of Animal Gut",
    ),
    (
        ChapterKey::Range(44, 46),
        "Wood And Articles Of Wood; Cork; Basketware and Wickerwork",
    ),
    (
        ChapterKey::Range(47, 49),
        "Pulp Of Wood; Recovered Paper; Paper and Paperboard Articles",
    ),
    (ChapterKey::Range(50, 63), "Textile And Textile Articles"),
    (
        ChapterKey::Range(64, 67),
        "Footwear, Headgear, Artificial Flowers; Articles Of Human Hair",
    ),
    (
        ChapterKey::Range(68, 70),
        "Articles Of Stone, Plaster, Cement, Asbestos, Mica; Glass And Glassware",
    ),
    (
        ChapterKey::Single(71),
        "Natural Or Cultured Pearls, Precious Metals, and Articles Thereof; Imitation Jewellery",
    ),
    (
        ChapterKey::Range(72, 83),
        "Base Metals And Articles Of Base Metal",
    ),
    (
        ChapterKey::Range(84, 85),
        "Machinery And Mechanical Appliances; Electrical Equipment; Sound and TV Recorders",
    ),
    (
        ChapterKey::Range(86, 89),
        "Vehicles, Aircraft, Vessels And Associated Transport Equipment",
    ),
    (
        ChapterKey::Range(90, 92),
        "Optical, Medical Or Surgical Instruments; Clocks; Musical Instruments",
    ),
    (
        ChapterKey::Single(93),
        "Arms And Ammunition; Parts And Accessories Thereof",
    ),
    (
        ChapterKey::Range(94, 96),
        "Miscellaneous Manufactured Articles",
    ),
    (
        ChapterKey::Single(97),
        "Works Of Art, Collectors' Pieces And Antiques",
    ),
];

/// Result of classifying a raw HS code.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DomainClassification {
    /// `None` when the code is malformed.
    pub chapter: Option<u8>,
    pub domain: &'static str,
}

/// Looks up a chapter number in the range table. First match wins.
pub fn domain_for_chapter(chapter: u8) -> &'static str {
    HS_DOMAIN_TABLE
        .iter()
        .find(|(key, _)| key.contains(chapter))
        .map(|(_, label)| *label)
        .unwrap_or(DEFAULT_DOMAIN)
}

/// Classifies an HS code into its trade domain. Never fails: malformed codes
/// fall back to [`DEFAULT_DOMAIN`].
pub fn classify_domain(hs_code: &str) -> &'static str {
    classify(hs_code).domain
}

pub fn classify(hs_code: &str) -> DomainClassification {
    let chapter = hs_code::chapter(hs_code);
    DomainClassification {
        chapter,
        domain: chapter.map(domain_for_chapter).unwrap_or(DEFAULT_DOMAIN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_chapter_in_range_is_covered() {
        for chapter in 1..=97u8 {
            let matches = HS_DOMAIN_TABLE
                .iter()
                .filter(|(key, _)| key.contains(chapter))
                .count();
            assert_eq!(matches, 1, "chapter {chapter} matched {matches} entries");
            assert_ne!(domain_for_chapter(chapter), DEFAULT_DOMAIN);
        }
    }

    #[test]
    fn test_out_of_table_chapters_use_default() {
        assert_eq!(domain_for_chapter(0), DEFAULT_DOMAIN);
        assert_eq!(domain_for_chapter(98), DEFAULT_DOMAIN);
        assert_eq!(domain_for_chapter(99), DEFAULT_DOMAIN);
    }

    #[test]
    fn test_single_chapter_key_is_exact() {
        let fats = domain_for_chapter(15);
        assert!(fats.starts_with("Animal, Vegetable Or Microbial Fats"));
        assert_eq!(
            domain_for_chapter(16),
            "Prepared Foodstuffs; Beverages, Spirits And Vinegar; Tobacco And Manufactured Tobacco Substitutes"
        );
        assert_ne!(domain_for_chapter(16), fats);
    }

    #[test]
    fn test_classify_full_codes() {
        assert_eq!(classify_domain("25084010"), "Mineral Products");
        assert_eq!(
            classify_domain("28151010"),
            "Products Of The Chemical Or Allied Industries"
        );
        assert_eq!(
            classify_domain("1509"),
            "Animal, Vegetable Or Microbial Fats And Oils And Their Cleavage Products; Prepared Edible Fats; Animal Or Vegetable Waxes"
        );
        assert_eq!(classify_domain("9701"), "Works Of Art, Collectors' Pieces And Antiques");
    }

    #[test]
    fn test_classify_falls_back_to_default() {
        assert_eq!(classify_domain("9999"), DEFAULT_DOMAIN);
        assert_eq!(classify_domain(""), DEFAULT_DOMAIN);
        assert_eq!(classify_domain("1"), DEFAULT_DOMAIN);
        assert_eq!(classify_domain("abcd"), DEFAULT_DOMAIN);
        assert_eq!(classify_domain("00123"), DEFAULT_DOMAIN);
        // Bare chapters are padded like any short code: "15" reads as "0015".
        assert_eq!(classify_domain("15"), DEFAULT_DOMAIN);
    }

    #[test]
    fn test_classify_reports_chapter() {
        let c = classify("8471300000");
        assert_eq!(c.chapter, Some(84));
        assert!(c.domain.starts_with("Machinery"));

        let malformed = classify("x123");
        assert_eq!(malformed.chapter, None);
        assert_eq!(malformed.domain, DEFAULT_DOMAIN);
    }
}
