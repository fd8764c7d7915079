//! Category and item types for the prompt library

use serde::{Deserialize, Deserializer, Serialize};

/// Absent and `null` fields both read as the type's empty value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A single prompt template inside a category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
}

impl Item {
    /// Create a new item
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A named group of items, ranked as a unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
}

impl Category {
    /// Create an empty category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Create a category with items
    pub fn with_items(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

/// Brief category info for listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    #[serde(rename = "itemCount")]
    pub item_count: usize,
    #[serde(rename = "synonymCount")]
    pub synonym_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let item: Item = serde_json::from_str(r#"{"title": "Cold Email"}"#).unwrap();
        assert_eq!(item.title, "Cold Email");
        assert_eq!(item.body, "");

        let category: Category = serde_json::from_str(r#"{"name": "Marketing"}"#).unwrap();
        assert!(category.items.is_empty());

        let category: Category = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert_eq!(category.name, "");
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let item: Item = serde_json::from_str(r#"{"title": null, "body": null}"#).unwrap();
        assert_eq!(item, Item::default());

        let category: Category =
            serde_json::from_str(r#"{"name": null, "items": null}"#).unwrap();
        assert_eq!(category, Category::default());
    }
}
