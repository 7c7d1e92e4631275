/// Format seconds as zero-padded `MM:SS`.
///
/// Unknown values (`NaN`, infinities) render as `00:00`; negative values are
/// treated as zero.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "00:00".to_string();
    }
    let total = seconds.max(0.0).trunc() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// `elapsed / duration` label shown next to the seek bar.
pub fn time_label(current: f64, duration: Option<f64>) -> String {
    format!(
        "{} / {}",
        format_time(current),
        format_time(duration.unwrap_or(f64::NAN))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_minutes_and_seconds() {
        assert_eq!(format_time(65.0), "01:05");
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(59.99), "00:59");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(6000.0), "100:00");
    }

    #[test]
    fn unknown_values_render_as_zero() {
        assert_eq!(format_time(f64::NAN), "00:00");
        assert_eq!(format_time(f64::INFINITY), "00:00");
        assert_eq!(format_time(-3.0), "00:00");
    }

    #[test]
    fn label_joins_elapsed_and_duration() {
        assert_eq!(time_label(5.0, Some(185.2)), "00:05 / 03:05");
        assert_eq!(time_label(0.0, None), "00:00 / 00:00");
    }
}
