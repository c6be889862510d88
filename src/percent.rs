/// Format `part` of `whole` as a percentage string with two decimal places.
///
/// Returns `"0.00%"` when either operand is zero, so a degenerate run never
/// divides by zero or presents a misleading ratio.
pub fn percentage(part: u64, whole: u64) -> String {
    if part == 0 || whole == 0 {
        return "0.00%".to_string();
    }

    format!("{:.2}%", part as f64 / whole as f64 * 100.0)
}
