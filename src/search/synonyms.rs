//! Synonym catalog for category relevance matching
//!
//! Maps each canonical category name to the alternative terms a user might
//! type instead of it. Built once, then shared read-only.

use std::collections::HashMap;

/// Curated synonyms per launch category, in suggestion order
pub const LAUNCH_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "Marketing",
        &[
            "advertising",
            "ads",
            "promotion",
            "campaign",
            "branding",
            "brand awareness",
            "copywriting",
            "growth hacking",
            "lead generation",
            "email marketing",
            "product launch",
        ],
    ),
    (
        "Social Media",
        &[
            "instagram",
            "twitter",
            "tiktok",
            "facebook",
            "linkedin post",
            "caption",
            "hashtags",
            "influencer",
            "content calendar",
            "viral",
            "reels",
        ],
    ),
    (
        "SEO",
        &[
            "search engine optimization",
            "keywords",
            "keyword research",
            "backlinks",
            "meta description",
            "organic traffic",
            "serp",
            "google ranking",
        ],
    ),
    (
        "Writing",
        &[
            "blog",
            "article",
            "essay",
            "copy",
            "story",
            "storytelling",
            "editing",
            "proofreading",
            "ghostwriting",
            "headline",
        ],
    ),
    (
        "Business",
        &[
            "startup",
            "entrepreneur",
            "company",
            "strategy",
            "business plan",
            "swot",
            "investors",
            "management",
            "consulting",
            "small business",
        ],
    ),
    (
        "Sales",
        &[
            "selling",
            "cold email",
            "outreach",
            "prospecting",
            "leads",
            "crm",
            "closing deals",
            "negotiation",
            "pitch deck",
            "follow up",
        ],
    ),
    (
        "Coding",
        &[
            "programming",
            "code",
            "developer",
            "software",
            "debugging",
            "javascript",
            "python",
            "rust",
            "api",
            "sql",
            "code review",
        ],
    ),
    (
        "Education",
        &[
            "learning",
            "study",
            "teaching",
            "teacher",
            "student",
            "homework",
            "lesson plan",
            "tutor",
            "course",
            "exam prep",
            "quiz",
        ],
    ),
    (
        "Health & Wellness",
        &[
            "health",
            "wellness",
            "wellbeing",
            "mental health",
            "meditation",
            "mindfulness",
            "sleep",
            "stress relief",
            "self care",
            "therapy",
            "journaling",
        ],
    ),
    (
        "Fitness",
        &[
            "gym",
            "workout",
            "exercise",
            "training",
            "cardio",
            "strength",
            "weightlifting",
            "running",
            "yoga",
            "personal trainer",
            "muscle",
            "bodybuilding",
        ],
    ),
    (
        "Nutrition",
        &[
            "diet",
            "meal plan",
            "meal prep",
            "food",
            "recipe",
            "calories",
            "healthy eating",
            "protein",
            "macros",
            "vegan",
            "weight loss",
        ],
    ),
    (
        "Finance",
        &[
            "money",
            "budget",
            "budgeting",
            "investing",
            "stocks",
            "savings",
            "personal finance",
            "taxes",
            "crypto",
            "retirement",
            "accounting",
        ],
    ),
    (
        "Career",
        &[
            "job",
            "resume",
            "cv",
            "interview",
            "cover letter",
            "job search",
            "promotion",
            "linkedin profile",
            "salary negotiation",
            "hiring",
        ],
    ),
    (
        "Productivity",
        &[
            "time management",
            "focus",
            "habits",
            "planning",
            "to do list",
            "organization",
            "goals",
            "schedule",
            "efficiency",
            "procrastination",
        ],
    ),
    (
        "Travel",
        &[
            "trip",
            "vacation",
            "holiday",
            "itinerary",
            "flights",
            "hotel",
            "backpacking",
            "destination",
            "road trip",
            "packing list",
        ],
    ),
    (
        "Customer Support",
        &[
            "customer service",
            "help desk",
            "support ticket",
            "complaint",
            "faq",
            "refund",
            "chatbot",
            "reply template",
            "onboarding",
        ],
    ),
    (
        "Creative",
        &[
            "art",
            "design",
            "creativity",
            "brainstorming",
            "ideas",
            "poetry",
            "song lyrics",
            "drawing",
            "inspiration",
            "worldbuilding",
        ],
    ),
];

/// High-frequency standalone terms offered as suggestions after catalog hits
pub const COMMON_TERMS: &[&str] = &[
    "email",
    "blog post",
    "marketing",
    "resume",
    "workout",
    "meal plan",
    "business plan",
    "social media",
    "cover letter",
    "code review",
    "lesson plan",
    "budget",
    "story",
    "interview",
    "product description",
];

/// Synonyms for one canonical category name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymEntry {
    pub category: String,
    pub synonyms: Vec<String>,
    /// Lowercased copy of `synonyms`, same order
    folded: Vec<String>,
}

impl SynonymEntry {
    pub fn new(category: impl Into<String>, synonyms: Vec<String>) -> Self {
        let folded = synonyms.iter().map(|s| s.to_lowercase()).collect();
        Self {
            category: category.into(),
            synonyms,
            folded,
        }
    }

    /// Lowercased synonyms, for matching
    pub fn folded(&self) -> &[String] {
        &self.folded
    }

    fn push(&mut self, synonym: String) {
        let folded = synonym.to_lowercase();
        if !self.folded.contains(&folded) {
            self.synonyms.push(synonym);
            self.folded.push(folded);
        }
    }
}

/// Immutable category → synonyms mapping plus the common-term list
#[derive(Debug, Clone, Default)]
pub struct SynonymCatalog {
    entries: Vec<SynonymEntry>,
    /// lowercased category name → position in `entries`
    index: HashMap<String, usize>,
    common_terms: Vec<String>,
}

impl SynonymCatalog {
    /// Build a catalog from entries and common terms
    ///
    /// Entries repeating a category name are merged into the first one.
    pub fn new(entries: Vec<SynonymEntry>, common_terms: Vec<String>) -> Self {
        let mut catalog = Self {
            entries: Vec::with_capacity(entries.len()),
            index: HashMap::with_capacity(entries.len()),
            common_terms,
        };

        for entry in entries {
            let key = entry.category.to_lowercase();
            match catalog.index.get(&key) {
                Some(&pos) => {
                    for synonym in entry.synonyms {
                        catalog.entries[pos].push(synonym);
                    }
                }
                None => {
                    catalog.index.insert(key, catalog.entries.len());
                    catalog.entries.push(entry);
                }
            }
        }

        catalog
    }

    /// Build from static `(category, synonyms)` tables
    pub fn from_static(table: &[(&str, &[&str])], common_terms: &[&str]) -> Self {
        let entries = table
            .iter()
            .map(|(category, synonyms)| {
                SynonymEntry::new(*category, synonyms.iter().map(|s| s.to_string()).collect())
            })
            .collect();
        Self::new(entries, common_terms.iter().map(|s| s.to_string()).collect())
    }

    /// The catalog shipped with the launch content
    pub fn builtin() -> Self {
        Self::from_static(LAUNCH_SYNONYMS, COMMON_TERMS)
    }

    /// Synonyms for a category; empty when the category has no entry
    pub fn lookup(&self, category_name: &str) -> &[String] {
        self.entry(category_name)
            .map(|e| e.synonyms.as_slice())
            .unwrap_or(&[])
    }

    /// Full entry for a category (case-insensitive name)
    pub fn entry(&self, category_name: &str) -> Option<&SynonymEntry> {
        self.index
            .get(&category_name.to_lowercase())
            .map(|&pos| &self.entries[pos])
    }

    /// Entries in curated order
    pub fn entries(&self) -> impl Iterator<Item = &SynonymEntry> {
        self.entries.iter()
    }

    pub fn common_terms(&self) -> &[String] {
        &self.common_terms
    }

    pub fn has_entry(&self, category_name: &str) -> bool {
        self.index.contains_key(&category_name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_fitness() {
        let catalog = SynonymCatalog::builtin();
        let synonyms = catalog.lookup("Fitness");
        assert!(synonyms.contains(&"gym".to_string()));
        assert!(synonyms.contains(&"workout".to_string()));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = SynonymCatalog::builtin();
        assert_eq!(catalog.lookup("fitness"), catalog.lookup("Fitness"));
        assert!(catalog.has_entry("health & wellness"));
    }

    #[test]
    fn test_lookup_unknown_category_is_empty() {
        let catalog = SynonymCatalog::builtin();
        assert!(catalog.lookup("Astrology").is_empty());
        assert!(catalog.entry("Astrology").is_none());
    }

    #[test]
    fn test_duplicate_entries_are_merged() {
        let catalog = SynonymCatalog::new(
            vec![
                SynonymEntry::new("Travel", vec!["trip".to_string()]),
                SynonymEntry::new("travel", vec!["Trip".to_string(), "vacation".to_string()]),
            ],
            vec![],
        );
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("Travel"), ["trip", "vacation"]);
    }

    #[test]
    fn test_entries_keep_curated_order() {
        let catalog = SynonymCatalog::builtin();
        let names: Vec<&str> = catalog.entries().map(|e| e.category.as_str()).collect();
        assert_eq!(names.first(), Some(&"Marketing"));
        assert_eq!(names.len(), LAUNCH_SYNONYMS.len());
    }
}
