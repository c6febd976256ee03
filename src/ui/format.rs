pub fn format_currency(value: f64) -> String {
    if value == 0.0 {
        return "$0".to_string();
    }
    let decimals = if value.abs() < 1.0 { 4 } else { 2 };
    format!("${}", group_thousands(value, decimals))
}

pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    group_thousands(value, 0)
}

pub fn format_percentage(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{:.2}%", value)
}

pub fn format_large_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let tier = (value.abs().log10() / 3.0).floor() as usize;
    if tier == 0 {
        return group_thousands(value, 0);
    }

    let units = ["", "K", "M", "B", "T"];
    let tier = tier.min(units.len() - 1);
    let scaled = value / 10f64.powi((tier * 3) as i32);
    format!("{:.1}{}", scaled, units[tier])
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (whole, frac) = match formatted.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}
