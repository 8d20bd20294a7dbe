//! Query pipeline: filter, then search, then sort.

use std::sync::Arc;

use shopfront_catalog::{Catalog, FilterSelection, Product, SearchState, SortMode};

/// Ordered subsequence of a catalog.
///
/// Holds positions into the shared catalog rather than copies of the records.
#[derive(Debug, Clone)]
pub struct ResultSet {
    catalog: Arc<Catalog>,
    positions: Vec<usize>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.positions
            .get(index)
            .and_then(|&pos| self.catalog.products().get(pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.positions
            .iter()
            .filter_map(|&pos| self.catalog.products().get(pos))
    }

    /// Products in `[start, end)`, clamped to the available range.
    pub fn window(&self, start: usize, end: usize) -> impl Iterator<Item = &Product> + '_ {
        let end = end.min(self.len());
        let start = start.min(end);
        self.positions[start..end]
            .iter()
            .filter_map(|&pos| self.catalog.products().get(pos))
    }
}

impl PartialEq for ResultSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for ResultSet {}

/// Evaluate the pipeline for one combination of inputs.
///
/// Pure: the same four inputs always produce the same ordered output. Sorting
/// runs on the filtered set only, with the catalog position as a tie-break so
/// equal prices keep their catalog order.
pub fn evaluate(
    catalog: &Arc<Catalog>,
    selection: &FilterSelection,
    search: &SearchState,
    sort: SortMode,
) -> ResultSet {
    let matcher = search.matcher();
    let products = catalog.products();

    let mut positions: Vec<usize> = products
        .iter()
        .enumerate()
        .filter(|(_, product)| selection.matches(product))
        .filter(|(_, product)| matcher.matches(product))
        .map(|(pos, _)| pos)
        .collect();

    if sort.reorders() {
        positions.sort_by(|&a, &b| {
            sort.compare(&products[a], &products[b])
                .then_with(|| a.cmp(&b))
        });
    }

    ResultSet {
        catalog: Arc::clone(catalog),
        positions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_catalog::{ImageRef, NewProduct, Price, ProductId};

    fn product(id: &str, name: &str, category: &str, price: u64) -> Product {
        Product::new(NewProduct {
            id: ProductId::new(id).unwrap(),
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            sub_category: "Topwear".to_string(),
            price: Price::new(price),
            image: ImageRef::One(format!("{id}.png")),
        })
        .unwrap()
    }

    fn sample() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![
                product("1", "Red Shirt", "Men", 20),
                product("2", "Blue Hat", "Women", 10),
                product("3", "Red Hat", "Men", 30),
            ])
            .unwrap(),
        )
    }

    fn ids(result: &ResultSet) -> Vec<&str> {
        result.iter().map(|p| p.id_typed().as_str()).collect()
    }

    #[test]
    fn no_inputs_yield_full_catalog_in_order() {
        let result = evaluate(
            &sample(),
            &FilterSelection::new(),
            &SearchState::default(),
            SortMode::Relevant,
        );
        assert_eq!(ids(&result), ["1", "2", "3"]);
    }

    #[test]
    fn category_filter_then_ascending_price() {
        let mut selection = FilterSelection::new();
        selection.toggle_category("Men");
        let result = evaluate(
            &sample(),
            &selection,
            &SearchState::default(),
            SortMode::PriceLowHigh,
        );
        assert_eq!(ids(&result), ["1", "3"]);
    }

    #[test]
    fn active_search_keeps_relative_order() {
        let result = evaluate(
            &sample(),
            &FilterSelection::new(),
            &SearchState::new("red", true),
            SortMode::Relevant,
        );
        assert_eq!(ids(&result), ["1", "3"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = sample();
        let selection = FilterSelection::new();
        let upper = evaluate(
            &catalog,
            &selection,
            &SearchState::new("HAT", true),
            SortMode::Relevant,
        );
        let lower = evaluate(
            &catalog,
            &selection,
            &SearchState::new("hat", true),
            SortMode::Relevant,
        );
        assert_eq!(upper, lower);
        assert_eq!(ids(&upper), ["2", "3"]);
    }

    #[test]
    fn descending_price() {
        let result = evaluate(
            &sample(),
            &FilterSelection::new(),
            &SearchState::default(),
            SortMode::PriceHighLow,
        );
        assert_eq!(ids(&result), ["3", "1", "2"]);
    }

    #[test]
    fn empty_catalog_is_not_an_error() {
        let result = evaluate(
            &Arc::new(Catalog::empty()),
            &FilterSelection::new(),
            &SearchState::new("x", true),
            SortMode::PriceLowHigh,
        );
        assert!(result.is_empty());
        assert_eq!(result.get(0), None);
    }

    #[test]
    fn window_is_clamped() {
        let result = evaluate(
            &sample(),
            &FilterSelection::new(),
            &SearchState::default(),
            SortMode::Relevant,
        );
        assert_eq!(result.window(2, 10).count(), 1);
        assert_eq!(result.window(5, 10).count(), 0);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        const CATEGORIES: [&str; 3] = ["Men", "Women", "Kids"];

        fn catalog_from(rows: &[(usize, u64)]) -> Arc<Catalog> {
            let products = rows
                .iter()
                .enumerate()
                .map(|(i, (c, price))| {
                    product(&format!("p{i}"), "Item", CATEGORIES[*c], *price)
                })
                .collect();
            Arc::new(Catalog::new(products).unwrap())
        }

        proptest! {
            /// Property: evaluation is deterministic.
            #[test]
            fn evaluate_is_deterministic(
                rows in prop::collection::vec((0usize..3, 0u64..100), 0..50),
                cat in 0usize..3,
                mode in 0usize..3,
            ) {
                let catalog = catalog_from(&rows);
                let mut selection = FilterSelection::new();
                selection.toggle_category(CATEGORIES[cat]);
                let search = SearchState::default();
                let a = evaluate(&catalog, &selection, &search, SortMode::ALL[mode]);
                let b = evaluate(&catalog, &selection, &search, SortMode::ALL[mode]);
                prop_assert_eq!(ids(&a), ids(&b));
            }

            /// Property: ascending output is non-decreasing and re-sorting it changes nothing.
            #[test]
            fn ascending_output_is_sorted(
                rows in prop::collection::vec((0usize..3, 0u64..100), 0..50),
            ) {
                let catalog = catalog_from(&rows);
                let result = evaluate(
                    &catalog,
                    &FilterSelection::new(),
                    &SearchState::default(),
                    SortMode::PriceLowHigh,
                );
                let prices: Vec<u64> =
                    result.iter().map(|p| p.price().minor_units()).collect();
                prop_assert!(prices.windows(2).all(|w| w[0] <= w[1]));

                let mut again: Vec<&Product> = result.iter().collect();
                SortMode::PriceLowHigh.sort(&mut again);
                prop_assert!(again.into_iter().eq(result.iter()));
            }

            /// Property: a category selection only lets selected categories through.
            #[test]
            fn filtered_output_respects_selection(
                rows in prop::collection::vec((0usize..3, 0u64..100), 0..50),
                cat in 0usize..3,
            ) {
                let catalog = catalog_from(&rows);
                let mut selection = FilterSelection::new();
                selection.toggle_category(CATEGORIES[cat]);
                let result =
                    evaluate(&catalog, &selection, &SearchState::default(), SortMode::Relevant);
                prop_assert!(result.iter().all(|p| p.category() == CATEGORIES[cat]));
                let expected = rows.iter().filter(|(c, _)| *c == cat).count();
                prop_assert_eq!(result.len(), expected);
            }
        }
    }
}
