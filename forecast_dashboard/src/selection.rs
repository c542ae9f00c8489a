//! Product selection labels

use crate::error::Result;
use forecast_core::{load_metadata, ProductMetadata};
use std::path::Path;

/// Recover the product id from a selection label
///
/// `"Espresso Beans (BB0001)"` yields `BB0001`. Text without a parenthesised
/// group is taken as the id itself.
pub fn extract_product_id(selection: &str) -> String {
    let trimmed = selection.trim();
    if let (Some(open), Some(close)) = (trimmed.rfind('('), trimmed.rfind(')')) {
        if open < close {
            let inner = trimmed[open + 1..close].trim();
            if !inner.is_empty() {
                return inner.to_string();
            }
        }
    }
    trimmed.to_string()
}

/// Products offered for selection; empty when the table has not been generated
pub fn load_products(path: &Path) -> Result<Vec<ProductMetadata>> {
    Ok(load_metadata(path)?)
}

pub fn product_labels(products: &[ProductMetadata]) -> Vec<String> {
    products.iter().map(ProductMetadata::label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use rstest::rstest;

    #[rstest]
    #[case("Espresso Beans (BB0001)", "BB0001")]
    #[case("Mug (Large) (MG0002)", "MG0002")]
    #[case("  BB0003  ", "BB0003")]
    #[case("Filter Papers ( FP0004 )", "FP0004")]
    #[case("Broken (", "Broken (")]
    #[case("Empty ()", "Empty ()")]
    fn test_extract_product_id(#[case] selection: &str, #[case] expected: &str) {
        assert_eq!(extract_product_id(selection), expected);
    }

    #[test]
    fn test_unreadable_metadata_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("product_metadata.csv");
        std::fs::write(&path, "sku,title\nBB0001,Espresso Beans\n").unwrap();

        let err = load_products(&path).unwrap_err();
        assert!(matches!(err, DashboardError::Metadata(_)));
        assert!(load_products(&dir.path().join("absent.csv")).unwrap().is_empty());
    }

    #[test]
    fn test_labels_round_trip_to_ids() {
        let products = vec![
            ProductMetadata {
                product_id: "BB0001".to_string(),
                product: "Espresso Beans".to_string(),
            },
            ProductMetadata {
                product_id: "MG0002".to_string(),
                product: "Mug (Large)".to_string(),
            },
        ];

        let labels = product_labels(&products);
        assert_eq!(labels[0], "Espresso Beans (BB0001)");
        let ids: Vec<String> = labels.iter().map(|l| extract_product_id(l)).collect();
        assert_eq!(ids, vec!["BB0001", "MG0002"]);
    }
}
