//! Grouping/Sort Engine
//!
//! Turns the flat item list into one group per exact name, each carrying
//! its nearest expiry, ordered by the selected `SortOrder`. Groups are a
//! projection: callers recompute them from the current items on every
//! render instead of storing them.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::pantry_item::PantryItem;
use super::preferences::SortOrder;

/// Items sharing an identical name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemGroup {
    pub name: String,
    /// Members in fetch order
    pub members: Vec<PantryItem>,
    /// Minimum `expires_on` among members
    pub nearest_expiry: NaiveDate,
}

impl ItemGroup {
    fn start(item: &PantryItem) -> Self {
        Self {
            name: item.name.clone(),
            members: vec![item.clone()],
            nearest_expiry: item.expires_on,
        }
    }

    fn push(&mut self, item: &PantryItem) {
        if item.expires_on < self.nearest_expiry {
            self.nearest_expiry = item.expires_on;
        }
        self.members.push(item.clone());
    }

    pub fn quantity(&self) -> usize {
        self.members.len()
    }

    pub fn quantity_label(&self) -> String {
        match self.quantity() {
            1 => "1 unit".to_string(),
            n => format!("{} units", n),
        }
    }
}

/// Group `items` by exact name and sort the groups by `order`
///
/// Group identity follows first-seen order, names are not case-folded or
/// trimmed. The sort is stable, so equal keys keep encounter order.
pub fn group_items(items: &[PantryItem], order: SortOrder) -> Vec<ItemGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<ItemGroup> = Vec::new();

    for item in items {
        match index.get(item.name.as_str()) {
            Some(&pos) => groups[pos].push(item),
            None => {
                index.insert(item.name.as_str(), groups.len());
                groups.push(ItemGroup::start(item));
            }
        }
    }

    groups.sort_by(|a, b| compare(a, b, order));
    groups
}

fn compare(a: &ItemGroup, b: &ItemGroup, order: SortOrder) -> Ordering {
    match order {
        SortOrder::DateAsc => a.nearest_expiry.cmp(&b.nearest_expiry),
        SortOrder::DateDesc => b.nearest_expiry.cmp(&a.nearest_expiry),
        SortOrder::NameAsc => compare_names(&a.name, &b.name),
        SortOrder::NameDesc => compare_names(&b.name, &a.name),
    }
}

/// Case-insensitive first, exact text only to separate case variants
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
