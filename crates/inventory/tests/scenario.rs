use stockroom_core::{DomainError, ItemId};
use stockroom_inventory::{DEFAULT_SPARSE_THRESHOLD, Inventory, Item};

#[test]
fn store_walkthrough_ends_with_expected_summary() {
    let mut store = Inventory::new();

    store.insert(Item::new(101, "Milk", 10, 40.5)).unwrap();
    store.insert(Item::new(102, "Bread", 2, 25.0)).unwrap();
    store.insert(Item::new(103, "Eggs", 1, 6.0)).unwrap();

    let err = store
        .insert(Item::new(101, "DuplicateMilk", 5, 41.0))
        .unwrap_err();
    assert_eq!(err, DomainError::DuplicateKey(ItemId::new(101)));
    assert_eq!(store.len(), 3);

    assert_eq!(store.search(102).unwrap().name(), "Bread");
    let eggs = store.search("eggs").unwrap();
    assert_eq!(eggs.item_id(), ItemId::new(103));

    store.restock(103, 5, Some(6.5)).unwrap();
    let eggs = store.get(103).unwrap();
    assert_eq!((eggs.quantity(), eggs.price()), (6, 6.5));

    store.sell(101, 3).unwrap();
    assert_eq!(store.get(101).unwrap().quantity(), 7);

    store.update_price(102, 27.0).unwrap();
    assert_eq!(store.get(102).unwrap().price(), 27.0);

    store.delete(101).unwrap();
    assert_eq!(store.len(), 2);
    assert!(matches!(store.search(101), Err(DomainError::NotFound(_))));

    let table = store.price_quantity_table();
    let columns = table.column_major();
    assert_eq!(columns.prices, vec![27.0, 6.5]);
    assert_eq!(columns.quantities, vec![2, 6]);

    let sparse = store.sparse_representation(DEFAULT_SPARSE_THRESHOLD);
    assert_eq!(sparse.entries.len(), 1);
    assert_eq!(sparse.entries[0].to_string(), "(0, 102, 2)");

    let low = store.low_stock_report(3);
    assert_eq!(low.items.len(), 1);
    assert_eq!(low.items[0].name(), "Bread");

    let summary = store.summary();
    assert_eq!(summary.total_skus, 2);
    assert_eq!(summary.total_units, 8);
    assert_eq!(summary.inventory_value, 93.0);
    assert_eq!(
        summary.to_string(),
        "Summary:\nTotal SKUs: 2\nTotal Units: 8\nInventory Value: 93.00"
    );
}
