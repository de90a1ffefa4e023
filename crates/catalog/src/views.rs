//! View derivation: pure projections of the authoritative collection.

use idbazaar_core::Item;

/// The "available and within budget" projection.
///
/// A budget of `0` (or less) means "no filter": every available item is
/// visible. Sold items are never visible regardless of filter. Order is
/// preserved relative to `items`. Pure and side-effect free; recomputed on
/// every read, no cache to invalidate.
pub fn visible_items(items: &[Item], filter_budget: f64) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.available && (filter_budget <= 0.0 || item.price <= filter_budget))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use idbazaar_core::{ItemId, Rank};
    use proptest::prelude::*;

    fn item(id: &str, price: f64, available: bool) -> Item {
        Item {
            id: ItemId::new(id),
            title: format!("listing {id}"),
            description: String::new(),
            price,
            image: "img".to_string(),
            level: 10,
            skins: vec![],
            rank: Rank::Gold,
            kd: 1.5,
            matches: 100,
            available,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn zero_budget_means_no_filter() {
        let items = vec![item("a", 100.0, true), item("b", 9000.0, true)];
        let visible = visible_items(&items, 0.0);
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn sold_items_are_never_visible() {
        let items = vec![item("a", 100.0, false), item("b", 100.0, true)];
        assert_eq!(visible_items(&items, 0.0).len(), 1);
        assert_eq!(visible_items(&items, 500.0).len(), 1);
        assert_eq!(visible_items(&items, 50.0).len(), 0);
    }

    #[test]
    fn budget_is_inclusive() {
        let items = vec![item("a", 300.0, true)];
        assert_eq!(visible_items(&items, 300.0).len(), 1);
        assert_eq!(visible_items(&items, 299.99).len(), 0);
    }

    #[test]
    fn order_is_preserved() {
        let items = vec![
            item("c", 30.0, true),
            item("a", 10.0, true),
            item("b", 20.0, true),
        ];
        let ids: Vec<_> = visible_items(&items, 100.0)
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![ItemId::new("c"), ItemId::new("a"), ItemId::new("b")]);
    }

    proptest! {
        /// The projection is exactly the subset with `available` and
        /// (`budget == 0` or `price <= budget`), in order.
        #[test]
        fn projection_matches_the_predicate(
            entries in proptest::collection::vec((0.0f64..5000.0, any::<bool>()), 0..40),
            budget in 0.0f64..5000.0,
        ) {
            let items: Vec<Item> = entries
                .iter()
                .enumerate()
                .map(|(i, (price, available))| item(&format!("it-{i}"), *price, *available))
                .collect();

            let visible = visible_items(&items, budget);

            let expected: Vec<&Item> = items
                .iter()
                .filter(|it| it.available && (budget <= 0.0 || it.price <= budget))
                .collect();
            prop_assert_eq!(visible.len(), expected.len());
            for (got, want) in visible.iter().zip(expected) {
                prop_assert_eq!(&got.id, &want.id);
            }

            // Availability holds for every returned item regardless of filter.
            prop_assert!(visible.iter().all(|it| it.available));
        }
    }
}
