/// Stellar assets use 7 decimal places.
pub const STELLAR_DECIMALS: u32 = 7;

pub fn format_amount(amount: i128, decimals: u32) -> String {
    let divisor = 10_i128.pow(decimals);
    let sign = if amount < 0 { "-" } else { "" };
    let whole = (amount / divisor).abs();
    let fractional = (amount % divisor).abs();

    if fractional == 0 {
        format!("{}{}", sign, whole)
    } else {
        let formatted = format!(
            "{}{}.{:0width$}",
            sign,
            whole,
            fractional,
            width = decimals as usize
        );
        formatted.trim_end_matches('0').to_string()
    }
}

/// Parses the raw `get_balance` output of `stellar contract invoke`, which
/// prints the i128 as a quoted JSON string.
pub fn parse_contract_i128(output: &str) -> Option<i128> {
    let trimmed = output.trim();
    if let Ok(serde_json::Value::String(s)) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return s.parse().ok();
    }
    trimmed.parse().ok()
}
