use forecast_core::{generate_metadata, load_metadata, ForecastError, ProductMetadata};
use pretty_assertions::assert_eq;

mod common;
use common::{sales_rows, write_csv};

#[test]
fn test_one_row_per_product_id() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("historical_sales.csv");
    let destination = dir.path().join("out/product_metadata.csv");

    let mut rows = sales_rows("BB0001", "Bamboo Brush", 40);
    rows.extend(sales_rows("CC0002", "Cotton Cloth", 3));
    rows.extend(sales_rows("DD0003", "Denim Duster", 1));
    rows.extend(sales_rows("BB0001", "Bamboo Brush", 5));
    write_csv(&source, &rows);

    let count = generate_metadata(&source, &destination).unwrap();
    assert_eq!(count, 3);

    let mut entries = load_metadata(&destination).unwrap();
    entries.sort_by(|a, b| a.product_id.cmp(&b.product_id));
    assert_eq!(
        entries,
        vec![
            ProductMetadata {
                product_id: "BB0001".to_string(),
                product: "Bamboo Brush".to_string(),
            },
            ProductMetadata {
                product_id: "CC0002".to_string(),
                product: "Cotton Cloth".to_string(),
            },
            ProductMetadata {
                product_id: "DD0003".to_string(),
                product: "Denim Duster".to_string(),
            },
        ]
    );
}

#[test]
fn test_regeneration_overwrites_previous_table() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("historical_sales.csv");
    let destination = dir.path().join("product_metadata.csv");

    write_csv(&source, &sales_rows("BB0001", "Bamboo Brush", 4));
    assert_eq!(generate_metadata(&source, &destination).unwrap(), 1);

    let mut rows = sales_rows("BB0001", "Bamboo Brush", 4);
    rows.extend(sales_rows("EE0005", "Eco Eraser", 2));
    write_csv(&source, &rows);
    assert_eq!(generate_metadata(&source, &destination).unwrap(), 2);
    assert_eq!(load_metadata(&destination).unwrap().len(), 2);
}

#[test]
fn test_missing_source_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let err = generate_metadata(
        &dir.path().join("nope.csv"),
        &dir.path().join("product_metadata.csv"),
    )
    .unwrap_err();

    assert!(matches!(err, ForecastError::MissingSource(_)));
    assert!(err.to_string().contains("Generate sales data first"));
}
