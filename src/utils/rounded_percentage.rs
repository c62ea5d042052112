/// Returns `part / whole * 100` rounded to the nearest whole number, or `0` if `whole` is `0`.
///
/// The ratio is computed in `f64` before scaling so that boundary cases (e.g. `84.5`)
/// round exactly as previously stored results did.
///
/// ### Example:
/// ```rust
/// use typescribe::rounded_percentage;
///
/// assert_eq!(rounded_percentage(7, 8), 88);
/// assert_eq!(rounded_percentage(1, 3), 33);
/// assert_eq!(rounded_percentage(5, 0), 0);
/// ```
pub fn rounded_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }

    ((part as f64 / whole as f64) * 100.0).round() as u32
}
