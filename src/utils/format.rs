//! Display formatting helpers for monetary amounts

/// Format a USD amount for display
pub fn format_usd(cost: f64) -> String {
    if cost < 0.01 {
        format!("${:.6}", cost)
    } else if cost < 1.0 {
        format!("${:.4}", cost)
    } else {
        format!("${:.2}", cost)
    }
}

/// Format an INR amount for display
pub fn format_inr(cost: f64) -> String {
    format!("\u{20b9}{:.2}", cost)
}
