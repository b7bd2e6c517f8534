//! Column width helpers for a fixed header over a scrolling body.

/// Spreads the slack between the table width and the summed column widths
/// evenly over the columns.
///
/// Each column receives `floor((table_width - Σ widths) / n)`. A negative
/// slack shrinks the columns (rounded toward negative infinity); widths
/// never drop below zero.
pub fn distribute_widths(table_width: u32, widths: &[u32]) -> Vec<u32> {
    if widths.is_empty() {
        return Vec::new();
    }
    let total: i64 = widths.iter().map(|&w| i64::from(w)).sum();
    let count = i64::try_from(widths.len()).unwrap_or(i64::MAX);
    let share = (i64::from(table_width) - total).div_euclid(count);

    widths
        .iter()
        .map(|&w| {
            let adjusted = (i64::from(w) + share).max(0);
            u32::try_from(adjusted).unwrap_or(u32::MAX)
        })
        .collect()
}
