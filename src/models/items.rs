use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogItem {
    pub id: u64,
    pub name: String,
}

/// Generated listing the demo endpoints page through.
#[derive(Debug, Clone)]
pub struct Catalog {
    total_items: u64,
}

impl Catalog {
    pub fn new(total_items: u64) -> Self {
        Self { total_items }
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Items `offset + 1 ..= offset + limit`, cut off at the end of the catalog.
    pub fn slice(&self, offset: u64, limit: u64) -> Vec<CatalogItem> {
        let end = offset.saturating_add(limit).min(self.total_items);
        (offset..end)
            .map(|index| CatalogItem {
                id: index + 1,
                name: format!("Item {}", index + 1),
            })
            .collect()
    }
}
