/// Render an energy value with its unit label.
///
/// Large values switch to scientific notation, everything else is fixed-point
/// with 4 fractional digits and thousands separators.
pub fn format_energy(value: f64, unit_label: &str) -> String {
    if value >= 1e6 {
        format!("{} {unit_label}", scientific(value))
    } else {
        format!("{} {unit_label}", fixed(value))
    }
}

/// `1.23e+07`: 2-digit mantissa fraction, signed zero-padded exponent.
fn scientific(value: f64) -> String {
    let rendered = format!("{value:.2e}");
    let Some((mantissa, exponent)) = rendered.split_once('e') else {
        // Infinity renders without an exponent.
        return rendered;
    };
    let exponent: i32 = exponent.parse().unwrap();
    format!("{mantissa}e{exponent:+03}")
}

/// `1,234.5678`: 4 fractional digits, grouped integer part.
fn fixed(value: f64) -> String {
    let rendered = format!("{value:.4}");
    let Some((integer, fraction)) = rendered.split_once('.') else {
        return rendered;
    };
    let mut grouped = String::with_capacity(rendered.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index != 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(fraction);
    grouped
}
