//! Wardrobe Filter
//!
//! Category and text matching for the wardrobe grid.

use std::collections::{BTreeSet, HashMap};

use crate::models::Item;

/// Category value that matches every item
pub const ALL_CATEGORIES: &str = "all";

/// Case-insensitive substring match. An empty query matches everything.
pub fn name_matches(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Whether `item` passes the category selector and search text.
pub fn item_matches(item: &Item, category: &str, query: &str) -> bool {
    let category_match = category == ALL_CATEGORIES || item.category() == category;
    category_match && name_matches(&item.name, query)
}

/// Ids of the items that pass the filter.
pub fn visible_ids(items: &[Item], category: &str, query: &str) -> BTreeSet<u32> {
    items
        .iter()
        .filter(|item| item_matches(item, category, query))
        .map(|item| item.id)
        .collect()
}

/// Options for the category selector: `all` first, then each distinct category
/// with its display label.
pub fn category_options(items: &[Item], labels: &HashMap<String, String>) -> Vec<(String, String)> {
    let slugs: BTreeSet<&str> = items
        .iter()
        .map(Item::category)
        .filter(|c| !c.is_empty())
        .collect();

    let mut options = vec![(ALL_CATEGORIES.to_string(), "All".to_string())];
    options.extend(slugs.into_iter().map(|slug| {
        let label = labels.get(slug).cloned().unwrap_or_else(|| slug.to_string());
        (slug.to_string(), label)
    }));
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, name: &str, category: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            image_url: format!("/i/{}.png", id),
            category: Some(category.to_string()),
        }
    }

    fn wardrobe() -> Vec<Item> {
        vec![
            make_item(1, "Blue Jeans", "jeans"),
            make_item(2, "White Tee", "t-shirts"),
            make_item(3, "Black Jeans", "jeans"),
            make_item(4, "Ankle Boots", "boots"),
        ]
    }

    #[test]
    fn test_all_category_is_wildcard() {
        let items = wardrobe();
        assert_eq!(visible_ids(&items, ALL_CATEGORIES, "").len(), 4);
    }

    #[test]
    fn test_category_and_query_both_required() {
        let items = wardrobe();
        let ids: Vec<u32> = visible_ids(&items, "jeans", "black").into_iter().collect();
        assert_eq!(ids, vec![3]);
        assert!(visible_ids(&items, "boots", "jeans").is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let items = wardrobe();
        let ids: Vec<u32> = visible_ids(&items, ALL_CATEGORIES, "JEANS").into_iter().collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_predicate_for_every_combination() {
        let items = wardrobe();
        let categories = [ALL_CATEGORIES, "jeans", "t-shirts", "boots", "bags"];
        let queries = ["", "e", "TEE", "jeans", "zzz"];
        for category in categories {
            for query in queries {
                for item in &items {
                    let expected = (category == ALL_CATEGORIES || item.category() == category)
                        && item.name.to_lowercase().contains(&query.to_lowercase());
                    assert_eq!(item_matches(item, category, query), expected, "{category} {query} {}", item.name);
                }
            }
        }
    }

    #[test]
    fn test_uncategorized_item_only_matches_all() {
        let item = Item { id: 9, name: "Scarf".to_string(), image_url: String::new(), category: None };
        assert!(item_matches(&item, ALL_CATEGORIES, "scarf"));
        assert!(!item_matches(&item, "bags", "scarf"));
    }

    #[test]
    fn test_category_options_use_labels() {
        let labels = HashMap::from([("jeans".to_string(), "Джинсы".to_string())]);
        let options = category_options(&wardrobe(), &labels);
        assert_eq!(options[0], ("all".to_string(), "All".to_string()));
        assert_eq!(options[1], ("boots".to_string(), "boots".to_string()));
        assert_eq!(options[2], ("jeans".to_string(), "Джинсы".to_string()));
        assert_eq!(options.len(), 4);
    }
}
