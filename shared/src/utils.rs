// Formatting helpers shared by the engine and the visualizer.

pub mod money {
    use serde::Serializer;

    /// Renders an amount with exactly two decimals, e.g. `6.00`.
    pub fn format_amount(value: f64) -> String {
        format!("{:.2}", value)
    }

    pub fn serialize_two_places<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_amount(*value))
    }

    /// Compact label for axis ticks: "$1.5k" above a thousand, "$950.00" below.
    pub fn format_axis_amount(value: f64) -> String {
        if value.abs() >= 1000.0 {
            format!("${:.1}k", value / 1000.0)
        } else {
            format!("${}", format_amount(value))
        }
    }

}
