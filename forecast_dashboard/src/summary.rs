use forecast_core::{ForecastReport, UrgencyStatus};

/// Urgency line for a report; the server's classification is taken as given
pub fn urgency_banner(report: &ForecastReport, current_stock: u64) -> String {
    match report.status {
        UrgencyStatus::Critical => format!(
            "CRITICAL: Stock {} < {}. Reorder now!",
            current_stock, report.reorder_point
        ),
        UrgencyStatus::Safe => format!(
            "SAFE: Stock {} >= {}.",
            current_stock, report.reorder_point
        ),
    }
}

pub fn format_summary(report: &ForecastReport, current_stock: u64) -> String {
    [
        format!(
            "Forecast period: {} to {}",
            report.start_date, report.end_date
        ),
        format!("Product: {} ({})", report.product_name, report.product_id),
        format!("Average daily sales: {:.1} units", report.average_sales),
        format!("Total forecast sales: {} units", report.total_sales),
        format!("Reorder point: {} units", report.reorder_point),
        urgency_banner(report, current_stock),
    ]
    .join("\n")
}
