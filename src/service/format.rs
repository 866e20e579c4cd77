/// The currency suffix appended to every formatted price.
pub const CURRENCY_SUFFIX: &str = "TL";

/// Formats a price for display: rounded to whole units, grouped by thousands, with the currency suffix.
///
/// `1234567.8` becomes `"1,234,568 TL"`.
pub fn format_price(price: f64) -> String {
    let rounded = format!("{:.0}", price.abs());
    let sign = if price < 0.0 && rounded != "0" { "-" } else { "" };

    format!("{sign}{} {CURRENCY_SUFFIX}", group_thousands(&rounded))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
