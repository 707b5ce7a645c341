//! Property tests: invariants that must hold for any well-formed dataset.

use analytics::{analyze_sales_data, AnalysisOptions, SellerReport};
use core_types::{Customer, Dataset, Product, PurchaseItem, PurchaseRecord, Seller};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// `(seller slot, items)`; a slot equal to the seller count points at an unknown seller.
type RawRecord = (usize, Vec<(usize, u32, u32)>);

fn build_dataset(seller_count: usize, prices: &[(u32, u32)], raw_records: Vec<RawRecord>) -> Dataset {
    let sellers = (0..seller_count)
        .map(|n| Seller {
            id: format!("seller_{n}"),
            first_name: "Seller".to_string(),
            last_name: n.to_string(),
        })
        .collect();
    let products = prices
        .iter()
        .enumerate()
        .map(|(n, &(purchase, sale))| Product {
            sku: format!("SKU_{n:03}"),
            name: format!("Product {n}"),
            purchase_price: Decimal::from(purchase),
            sale_price: Decimal::from(sale),
        })
        .collect();
    let purchase_records = raw_records
        .into_iter()
        .map(|(slot, lines)| PurchaseRecord {
            receipt_id: None,
            date: None,
            seller_id: format!("seller_{slot}"),
            customer_id: None,
            items: lines
                .into_iter()
                .map(|(product_slot, quantity, discount)| PurchaseItem {
                    sku: format!("SKU_{product_slot:03}"),
                    quantity: Decimal::from(quantity),
                    discount: Decimal::from(discount),
                    price: None,
                    sale_price: None,
                })
                .collect(),
            total_amount: None,
        })
        .collect();

    Dataset {
        customers: vec![Customer(serde_json::json!({"id": "customer_0"}))],
        products,
        sellers,
        purchase_records,
    }
}

/// Whole-unit prices and whole-percent discounts keep every profit at two decimals
/// or fewer, so reported (rounded) profits compare exactly like the raw ones.
fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    (1usize..7, 1usize..15)
        .prop_flat_map(|(seller_count, product_count)| {
            let prices = prop::collection::vec((0u32..50, 0u32..100), product_count);
            let line = (0..=product_count, 0u32..20, 0u32..=100);
            let records = prop::collection::vec(
                (0..=seller_count, prop::collection::vec(line, 0..6)),
                1..40,
            );
            (Just(seller_count), prices, records)
        })
        .prop_map(|(seller_count, prices, records)| build_dataset(seller_count, &prices, records))
}

fn seller_position(dataset: &Dataset, id: &str) -> usize {
    dataset
        .sellers
        .iter()
        .position(|s| s.id == id)
        .unwrap_or(usize::MAX)
}

fn run(dataset: &Dataset) -> Vec<SellerReport> {
    analyze_sales_data(dataset, &AnalysisOptions::with_defaults()).unwrap()
}

proptest! {
    #[test]
    fn every_seller_is_reported_exactly_once(dataset in dataset_strategy()) {
        let reports = run(&dataset);

        prop_assert_eq!(reports.len(), dataset.sellers.len());
        let reported: HashSet<&str> = reports.iter().map(|r| r.seller_id.as_str()).collect();
        let expected: HashSet<&str> = dataset.sellers.iter().map(|s| s.id.as_str()).collect();
        prop_assert_eq!(reported, expected);
    }

    #[test]
    fn sales_count_matches_resolved_records(dataset in dataset_strategy()) {
        let reports = run(&dataset);
        let known: HashSet<&str> = dataset.sellers.iter().map(|s| s.id.as_str()).collect();
        let resolved = dataset
            .purchase_records
            .iter()
            .filter(|r| known.contains(r.seller_id.as_str()))
            .count() as u64;

        prop_assert_eq!(reports.iter().map(|r| r.sales_count).sum::<u64>(), resolved);
    }

    #[test]
    fn sorted_by_profit_and_stable_on_ties(dataset in dataset_strategy()) {
        let reports = run(&dataset);

        for pair in reports.windows(2) {
            prop_assert!(pair[0].profit >= pair[1].profit);
            if pair[0].profit == pair[1].profit {
                prop_assert!(
                    seller_position(&dataset, &pair[0].seller_id)
                        < seller_position(&dataset, &pair[1].seller_id)
                );
            }
        }
    }

    #[test]
    fn money_fields_carry_two_decimals(dataset in dataset_strategy()) {
        for report in run(&dataset) {
            for value in [report.revenue, report.profit, report.bonus] {
                prop_assert_eq!(value.scale(), 2);
                prop_assert_eq!(value, value.round_dp(2));
            }
        }
    }

    #[test]
    fn top_products_are_bounded_and_distinct(dataset in dataset_strategy()) {
        for report in run(&dataset) {
            prop_assert!(report.top_products.len() <= 10);
            let distinct: HashSet<&String> = report.top_products.iter().collect();
            prop_assert_eq!(distinct.len(), report.top_products.len());
        }
    }

    #[test]
    fn analysis_is_deterministic(dataset in dataset_strategy()) {
        let first = serde_json::to_string(&run(&dataset)).unwrap();
        let second = serde_json::to_string(&run(&dataset)).unwrap();
        prop_assert_eq!(first, second);
    }
}
