use crate::actor_framework::Document;
use crate::domain::{InventoryCreate, InventoryPatch, InventoryRecord, RecordId, TitleFilter};

impl Document for InventoryRecord {
    type Id = RecordId;
    type Insert = InventoryCreate;
    type Filter = TitleFilter;
    type Patch = InventoryPatch;

    fn id(&self) -> &RecordId { &self.id }

    /// Builds the stored record from the store-assigned id and the insert payload.
    fn from_insert(id: RecordId, payload: InventoryCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            title: payload.title,
            price: payload.price,
            quantity: payload.quantity,
            in_stock: payload.in_stock,
            sku: payload.sku,
        })
    }

    /// Exact, case- and whitespace-sensitive title match.
    fn matches(&self, filter: &TitleFilter) -> bool {
        self.title == filter.title
    }

    /// Sets price, quantity and stock flag. `id`, `title` and `sku` are never
    /// touched after insert.
    fn on_update(&mut self, patch: InventoryPatch) -> Result<(), String> {
        self.price = patch.price;
        self.quantity = patch.quantity;
        self.in_stock = patch.in_stock;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Dollars;

    #[test]
    fn test_title_match_is_exact() {
        let record = InventoryRecord::new("Chess", 19.99_f64, 5, true, 1);
        assert!(record.matches(&TitleFilter::new("Chess")));
        assert!(!record.matches(&TitleFilter::new("chess")));
        assert!(!record.matches(&TitleFilter::new("Chess ")));
    }

    #[test]
    fn test_update_leaves_identity_fields_alone() {
        let mut record = InventoryRecord::new("Go", 5.0_f64, 1, false, 77);
        let before = record.clone();
        record
            .on_update(InventoryPatch { price: Dollars(7.5), quantity: -3, in_stock: true })
            .unwrap();

        assert_eq!(record.id, before.id);
        assert_eq!(record.title, before.title);
        assert_eq!(record.sku, before.sku);
        assert_eq!(record.price, Dollars(7.5));
        assert_eq!(record.quantity, -3);
        assert!(record.in_stock);
    }
}
