//! Domain model for ledger categories.
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of money flow a category tracks
///
/// Stored as a small integer code. Codes outside the known table are kept as
/// `Unknown(code)` so they round-trip unchanged, but they never compare equal
/// to a known kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryType {
    Income,
    Outgoing,
    Saving,
    Investing,
    Unknown(i64),
}

/// The single code <-> name table for every known category type
const CATEGORY_TYPE_TABLE: [(CategoryType, i64, &str); 4] = [
    (CategoryType::Income, 1, "income"),
    (CategoryType::Outgoing, 2, "outgoing"),
    (CategoryType::Investing, 3, "investing"),
    (CategoryType::Saving, 4, "saving"),
];

impl CategoryType {
    pub fn from_code(code: i64) -> Self {
        CATEGORY_TYPE_TABLE
            .iter()
            .find(|(_, known, _)| *known == code)
            .map(|(kind, _, _)| *kind)
            .unwrap_or(CategoryType::Unknown(code))
    }

    pub fn as_str(&self) -> &'static str {
        CATEGORY_TYPE_TABLE
            .iter()
            .find(|(kind, _, _)| kind == self)
            .map(|(_, _, name)| *name)
            .unwrap_or("unknown")
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    /// Stable external reference used by records
    pub category_id: i64,
    pub name: String,
    pub category_type: CategoryType,
}

/// Per-call lookup table from display id to category
///
/// Built fresh from the category index for each operation that needs it and
/// dropped afterwards; it is never cached between calls.
#[derive(Debug, Clone, Default)]
pub struct CategoryDirectory {
    by_id: HashMap<i64, Category>,
}

impl CategoryDirectory {
    pub fn new(categories: Vec<Category>) -> Self {
        let by_id = categories
            .into_iter()
            .map(|category| (category.category_id, category))
            .collect();
        Self { by_id }
    }

    pub fn get(&self, category_id: i64) -> Option<&Category> {
        self.by_id.get(&category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(category_id: i64, name: &str, code: i64) -> Category {
        Category {
            id: category_id,
            category_id,
            name: name.to_string(),
            category_type: CategoryType::from_code(code),
        }
    }

    #[test]
    fn test_category_type_table_round_trips() {
        for (kind, code, name) in CATEGORY_TYPE_TABLE {
            assert_eq!(CategoryType::from_code(code), kind);
            assert_eq!(kind.to_string(), name);
        }
    }

    #[test]
    fn test_unknown_code_renders_unknown() {
        let kind = CategoryType::from_code(999);
        assert_eq!(kind, CategoryType::Unknown(999));
        assert_eq!(kind.as_str(), "unknown");
    }

    #[test]
    fn test_unknown_never_matches_known_types() {
        let unknown = CategoryType::from_code(0);
        for (kind, _, _) in CATEGORY_TYPE_TABLE {
            assert_ne!(unknown, kind);
        }
        assert_ne!(CategoryType::from_code(0), CategoryType::from_code(5));
    }

    #[test]
    fn test_directory_lookup_by_display_id() {
        let directory = CategoryDirectory::new(vec![
            category(100, "Salary", 1),
            category(201, "Groceries", 2),
        ]);

        let groceries = directory.get(201).expect("category 201");
        assert_eq!(groceries.name, "Groceries");
        assert_eq!(groceries.category_type, CategoryType::Outgoing);
        assert!(directory.get(999).is_none());
    }
}
