//! Read-only views over an [`Inventory`].
//!
//! Builders here are pure: they compute plain data and never log or print.
//! Each report implements `Display` for text rendering and `Serialize` for
//! machine-readable output; choosing between them is the caller's concern.

use serde::Serialize;

use stockroom_core::ItemId;

use crate::inventory::Inventory;
use crate::item::Item;

/// Threshold used for the sparse view when the caller has no preference.
pub const DEFAULT_SPARSE_THRESHOLD: i64 = 2;

/// One row of the price/quantity table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceQuantityRow {
    pub price: f64,
    pub quantity: i64,
}

/// Two-column table, one row per item in sequence order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceQuantityTable {
    pub rows: Vec<PriceQuantityRow>,
}

/// Column-major (transposed) view of a [`PriceQuantityTable`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColumnView {
    pub prices: Vec<f64>,
    pub quantities: Vec<i64>,
}

impl PriceQuantityTable {
    pub fn column_major(&self) -> ColumnView {
        ColumnView {
            prices: self.rows.iter().map(|r| r.price).collect(),
            quantities: self.rows.iter().map(|r| r.quantity).collect(),
        }
    }
}

impl core::fmt::Display for PriceQuantityTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Row-Major Order:")?;
        for row in &self.rows {
            writeln!(f, "[{:?}, {}]", row.price, row.quantity)?;
        }

        let columns = self.column_major();
        writeln!(f, "Column-Major Order:")?;
        writeln!(f, "{:?}", columns.prices)?;
        write!(f, "{:?}", columns.quantities)
    }
}

/// Position, id and quantity of one low-stock item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SparseEntry {
    pub index: usize,
    pub item_id: ItemId,
    pub quantity: i64,
}

impl core::fmt::Display for SparseEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.index, self.item_id, self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SparseRepresentation {
    pub threshold: i64,
    pub entries: Vec<SparseEntry>,
}

impl core::fmt::Display for SparseRepresentation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Sparse Representation (index, item_id, quantity) with threshold <= {}:",
            self.threshold
        )?;
        for entry in &self.entries {
            write!(f, "\n{entry}")?;
        }
        Ok(())
    }
}

/// Items at or below a threshold, sorted by quantity then lowercased name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowStockReport<'a> {
    pub threshold: i64,
    pub items: Vec<&'a Item>,
}

impl core::fmt::Display for LowStockReport<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Low-Stock (<= {}):", self.threshold)?;
        for item in &self.items {
            write!(f, "\n{item}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InventorySummary {
    pub total_skus: usize,
    pub total_units: i64,
    pub inventory_value: f64,
}

impl core::fmt::Display for InventorySummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "Total SKUs: {}", self.total_skus)?;
        writeln!(f, "Total Units: {}", self.total_units)?;
        write!(f, "Inventory Value: {:.2}", self.inventory_value)
    }
}

impl Inventory {
    pub fn price_quantity_table(&self) -> PriceQuantityTable {
        PriceQuantityTable {
            rows: self
                .iter()
                .map(|it| PriceQuantityRow {
                    price: it.price(),
                    quantity: it.quantity(),
                })
                .collect(),
        }
    }

    /// Every item with `quantity <= threshold`, with its sequence index.
    pub fn sparse_representation(&self, threshold: i64) -> SparseRepresentation {
        let entries = self
            .iter()
            .enumerate()
            .filter(|(_, it)| it.quantity() <= threshold)
            .map(|(index, it)| SparseEntry {
                index,
                item_id: it.item_id(),
                quantity: it.quantity(),
            })
            .collect();

        SparseRepresentation { threshold, entries }
    }

    pub fn low_stock_report(&self, threshold: i64) -> LowStockReport<'_> {
        let mut items: Vec<&Item> = self
            .iter()
            .filter(|it| it.quantity() <= threshold)
            .collect();
        // Stable: equal keys keep sequence order.
        items.sort_by_cached_key(|it| (it.quantity(), it.name().to_lowercase()));

        LowStockReport { threshold, items }
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary {
            total_skus: self.len(),
            total_units: self
                .iter()
                .fold(0i64, |acc, it| acc.saturating_add(it.quantity())),
            // Folding from 0.0 keeps an empty inventory from rendering as -0.00.
            inventory_value: self.iter().fold(0.0, |acc, it| acc + it.stock_value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Inventory {
        let mut inv = Inventory::new();
        inv.insert(Item::new(102, "Bread", 2, 27.0)).unwrap();
        inv.insert(Item::new(103, "Eggs", 6, 6.5)).unwrap();
        inv.insert(Item::new(104, "apples", 2, 1.25)).unwrap();
        inv.insert(Item::new(105, "Yeast", 0, 3.0)).unwrap();
        inv
    }

    #[test]
    fn table_rows_follow_sequence_order() {
        let table = sample().price_quantity_table();
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[0], PriceQuantityRow { price: 27.0, quantity: 2 });
        assert_eq!(table.rows[3], PriceQuantityRow { price: 3.0, quantity: 0 });

        let columns = table.column_major();
        assert_eq!(columns.prices, vec![27.0, 6.5, 1.25, 3.0]);
        assert_eq!(columns.quantities, vec![2, 6, 2, 0]);
    }

    #[test]
    fn table_renders_both_orders() {
        let mut inv = Inventory::new();
        inv.insert(Item::new(102, "Bread", 2, 27.0)).unwrap();
        inv.insert(Item::new(103, "Eggs", 6, 6.5)).unwrap();

        assert_eq!(
            inv.price_quantity_table().to_string(),
            "Row-Major Order:\n[27.0, 2]\n[6.5, 6]\nColumn-Major Order:\n[27.0, 6.5]\n[2, 6]"
        );
    }

    #[test]
    fn empty_inventory_yields_empty_views() {
        let inv = Inventory::new();
        let table = inv.price_quantity_table();
        assert!(table.rows.is_empty());
        assert_eq!(table.column_major(), ColumnView::default());
        assert!(inv.sparse_representation(DEFAULT_SPARSE_THRESHOLD).entries.is_empty());
        assert!(inv.low_stock_report(10).items.is_empty());
        assert_eq!(
            inv.summary(),
            InventorySummary {
                total_skus: 0,
                total_units: 0,
                inventory_value: 0.0,
            }
        );
    }

    #[test]
    fn empty_summary_renders_plain_zero() {
        assert!(Inventory::new().summary().to_string().ends_with("Inventory Value: 0.00"));
    }

    #[test]
    fn sparse_keeps_sequence_index_and_order() {
        let sparse = sample().sparse_representation(DEFAULT_SPARSE_THRESHOLD);
        let got: Vec<(usize, i64, i64)> = sparse
            .entries
            .iter()
            .map(|e| (e.index, e.item_id.get(), e.quantity))
            .collect();
        assert_eq!(got, vec![(0, 102, 2), (2, 104, 2), (3, 105, 0)]);
        assert_eq!(sparse.entries[1].to_string(), "(2, 104, 2)");
    }

    #[test]
    fn low_stock_sorts_by_quantity_then_name_ignoring_case() {
        let inv = sample();
        let report = inv.low_stock_report(3);
        let names: Vec<&str> = report.items.iter().map(|it| it.name()).collect();
        assert_eq!(names, vec!["Yeast", "apples", "Bread"]);
        assert!(report.to_string().starts_with("Low-Stock (<= 3):\nID: 105, Name: Yeast"));
    }

    #[test]
    fn summary_totals_units_and_value() {
        let summary = sample().summary();
        assert_eq!(summary.total_skus, 4);
        assert_eq!(summary.total_units, 10);
        assert_eq!(summary.inventory_value, 54.0 + 39.0 + 2.5);
        assert!(summary.to_string().ends_with("Inventory Value: 95.50"));
    }

    #[test]
    fn reports_serialize_to_json() {
        let inv = sample();
        let json = serde_json::to_value(inv.sparse_representation(0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "threshold": 0,
                "entries": [{ "index": 3, "item_id": 105, "quantity": 0 }],
            })
        );
    }

    proptest! {
        /// Property: the low-stock report holds exactly the items at or under the
        /// threshold, ordered by (quantity, lowercased name).
        #[test]
        fn low_stock_report_is_exact_and_sorted(
            rows in prop::collection::vec((0i64..10, "[a-zA-Z]{1,6}"), 0..25),
            threshold in -1i64..12,
        ) {
            let mut inv = Inventory::new();
            for (i, (qty, name)) in rows.iter().enumerate() {
                inv.insert(Item::new(i as i64, name.clone(), *qty, 1.0)).unwrap();
            }

            let report = inv.low_stock_report(threshold);
            let expected = rows.iter().filter(|(q, _)| *q <= threshold).count();
            prop_assert_eq!(report.items.len(), expected);
            prop_assert!(report.items.iter().all(|it| it.quantity() <= threshold));

            for pair in report.items.windows(2) {
                let a = (pair[0].quantity(), pair[0].name().to_lowercase());
                let b = (pair[1].quantity(), pair[1].name().to_lowercase());
                prop_assert!(a <= b);
            }
        }
    }
}
