pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

pub fn format_dimensions(columns: u32, rows: u32) -> String {
    format!("{columns} x {rows}")
}
