use crate::models::SummaryRow;

/// Field delimiter of the report.
pub const DELIMITER: char = ',';

/// Wrap `product` in double quotes when it contains the delimiter.
///
/// Internal double quotes are left as they are; this is a minimal quoting
/// rule, not general CSV escaping.
///
/// # Examples
///
/// ```
/// use complaints_core::formatting::quote_product;
///
/// assert_eq!(quote_product("debt collection"), "debt collection");
/// assert_eq!(quote_product("checking or savings account, other"),
///            "\"checking or savings account, other\"");
/// ```
pub fn quote_product(product: &str) -> String {
    if product.contains(DELIMITER) {
        format!("\"{}\"", product)
    } else {
        product.to_string()
    }
}

/// Render one summary row as a report line (no line terminator).
///
/// Field order: product, year, total complaints, unique companies, highest
/// percent.
///
/// # Examples
///
/// ```
/// use complaints_core::formatting::format_row;
/// use complaints_core::models::SummaryRow;
///
/// let row = SummaryRow {
///     product: "debt collection".to_string(),
///     year: "2019".to_string(),
///     total_complaints: 1,
///     unique_companies: 1,
///     highest_percent: 100,
/// };
/// assert_eq!(format_row(&row), "debt collection,2019,1,1,100");
/// ```
pub fn format_row(row: &SummaryRow) -> String {
    format!(
        "{product}{d}{year}{d}{total}{d}{unique}{d}{percent}",
        product = quote_product(&row.product),
        year = row.year,
        total = row.total_complaints,
        unique = row.unique_companies,
        percent = row.highest_percent,
        d = DELIMITER,
    )
}

/// Render all rows, one per line, joined with `\n` and without a trailing
/// newline. An empty slice yields an empty string.
pub fn format_rows(rows: &[SummaryRow]) -> String {
    rows.iter().map(format_row).collect::<Vec<_>>().join("\n")
}
