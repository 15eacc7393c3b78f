use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TotalOverflow;

/// Name given to the single item a legacy integer-only day record loads as.
pub const UNITEMIZED: &str = "(unitemized)";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodItem {
    pub food: String,
    pub calories: i64,
}

impl FoodItem {
    pub fn new(food: impl Into<String>, calories: i64) -> Self {
        Self {
            food: food.into(),
            calories,
        }
    }
}

/// Everything logged on one calendar day.
///
/// `total` always equals the sum of `items[..].calories`; mutate only through [`DayEntry::add`].
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DayEntry {
    pub total: i64,
    pub items: Vec<FoodItem>,
}

impl DayEntry {
    /// Append an item and bump the running total. Returns the new total.
    /// On overflow the entry is left unchanged.
    pub fn add(&mut self, item: FoodItem) -> Result<i64, TotalOverflow> {
        self.total = self
            .total
            .checked_add(item.calories)
            .ok_or(TotalOverflow {
                total: self.total,
                calories: item.calories,
            })?;
        self.items.push(item);
        Ok(self.total)
    }

    pub fn item_sum(&self) -> i64 {
        self.items.iter().map(|i| i.calories).sum()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDay {
    Itemized {
        #[serde(default)]
        total: i64,
        #[serde(default)]
        items: Vec<FoodItem>,
    },
    Legacy(i64),
}

impl<'de> Deserialize<'de> for DayEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match StoredDay::deserialize(deserializer)? {
            StoredDay::Itemized { total, items } => Ok(Self { total, items }),
            StoredDay::Legacy(total) => Ok(Self {
                total,
                items: vec![FoodItem::new(UNITEMIZED, total)],
            }),
        }
    }
}
