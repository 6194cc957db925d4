use crate::config::DisplayConfig;

/// Box-drawing characters for table borders
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub selector: String,
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            selector: "►".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            selector: ">".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.len()))
}

/// Format ice time in seconds as "MMM:SS"
pub fn format_toi(ice_time_seconds: f64) -> String {
    let total = ice_time_seconds.max(0.0).round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Format a 0..1 rate in goalie style: 0.9173 -> ".917"
pub fn format_sv_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => {
            let s = format!("{:.3}", v);
            // Stat sheets print save percentage without the leading zero
            s.strip_prefix('0').unwrap_or(&s).to_string()
        }
        None => "-".to_string(),
    }
}

/// Format an optional rate with two decimals (GAA, per-60 rates)
pub fn format_rate2(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

/// Format an optional percentage with one decimal (corsi-for%)
pub fn format_pct1(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}

/// Format a float with one decimal (expected goals, GSAx)
pub fn format_f1(value: f64) -> String {
    format!("{:.1}", value)
}

/// Format an optional count, "-" when absent
pub fn format_opt_u32(value: Option<u32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_header_single_line_unicode() {
        let display = DisplayConfig { use_unicode: true, ..Default::default() };
        let result = format_header("Seasons", false, &display);
        assert_eq!(result, "Seasons\n───────\n");
    }

    #[test]
    fn test_format_header_double_line_ascii() {
        let mut display = DisplayConfig { use_unicode: false, ..Default::default() };
        display.box_chars = BoxChars::ascii();
        let result = format_header("Career", true, &display);
        assert_eq!(result, "Career\n======\n");
    }

    #[test]
    fn test_empty_header() {
        let display = DisplayConfig { use_unicode: true, ..Default::default() };
        assert_eq!(format_header("", false, &display), "\n\n");
    }

    #[test]
    fn test_format_toi() {
        assert_eq!(format_toi(0.0), "0:00");
        assert_eq!(format_toi(65.0), "1:05");
        assert_eq!(format_toi(90000.0), "1500:00");
        // Rounds rather than truncates
        assert_eq!(format_toi(59.6), "1:00");
    }

    #[test]
    fn test_format_sv_pct() {
        assert_eq!(format_sv_pct(Some(0.9173)), ".917");
        assert_eq!(format_sv_pct(Some(1.0)), "1.000");
        assert_eq!(format_sv_pct(None), "-");
    }

    #[test]
    fn test_format_rate2() {
        assert_eq!(format_rate2(Some(2.456)), "2.46");
        assert_eq!(format_rate2(None), "-");
    }

    #[test]
    fn test_format_pct1() {
        assert_eq!(format_pct1(Some(52.34)), "52.3");
        assert_eq!(format_pct1(None), "-");
    }

    #[test]
    fn test_format_opt_u32() {
        assert_eq!(format_opt_u32(Some(7)), "7");
        assert_eq!(format_opt_u32(None), "-");
    }
}
