use thousands::Separable;

/// Currency symbol used for every catalog price
pub const RUPEE: &str = "₹";

/// Format whole rupees with comma grouping, e.g. `₹15,999`
pub fn format_rupees(amount: u32) -> String {
    format!("{RUPEE}{}", amount.separate_with_commas())
}

/// Rounded discount percentage of `price` relative to `original_price`
///
/// Returns `None` when there is no markdown (including a zero or lower
/// original price).
pub fn discount_percent(price: u32, original_price: u32) -> Option<u32> {
    if original_price == 0 || price >= original_price {
        return None;
    }

    let saved = f64::from(original_price - price);
    Some((saved / f64::from(original_price) * 100.0).round() as u32)
}

/// Badge text shown on a discounted product, e.g. `27% OFF`
pub fn discount_badge(price: u32, original_price: u32) -> Option<String> {
    discount_percent(price, original_price).map(|percent| format!("{percent}% OFF"))
}
