//! Unit conversion between the model's units (degrees, points, fractions) and the
//! integer units of the chart schema.

use super::constants::*;

// --- Angles ---

/// Converts degrees to schema angle units (60000ths of a degree).
pub fn to_angle(degrees: f64) -> i64 {
    (degrees * ANGLE_UNITS_PER_DEGREE).round() as i64
}

/// Converts schema angle units back to degrees.
pub fn to_degrees(angle: i64) -> f64 {
    angle as f64 / ANGLE_UNITS_PER_DEGREE
}

/// Like [`to_angle`], but first folds the angle into `[0, 360)` as required for
/// positive fixed angles (gradient direction, shadow direction).
pub fn to_positive_angle(degrees: f64) -> i64 {
    to_angle(degrees.rem_euclid(360.0))
}

// --- Lengths ---

/// Converts points to EMU.
pub fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMU_PER_PT).round() as i64
}

pub fn emu_to_pt(emu: i64) -> f64 {
    emu as f64 / EMU_PER_PT
}

/// Converts a font size in points to the schema's 100ths of a point.
pub fn font_size(pt: f64) -> i64 {
    (pt * FONT_SIZE_UNITS_PER_PT).round() as i64
}

// --- Scaling factors ---

/// Converts a fraction (`1.0` = 100%) to 1000ths of a percent.
pub fn to_percentage(fraction: f64) -> i64 {
    (fraction * PERCENT_UNITS).round() as i64
}

pub fn from_percentage(value: i64) -> f64 {
    value as f64 / PERCENT_UNITS
}

/// Formats a floating point value the way the schema's `xsd:double` fields expect:
/// integral values without a fractional part.
pub fn format_double(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_round_trip() {
        for degrees in [0_i64, 90, 180, 270, 359] {
            let angle = to_angle(degrees as f64);
            assert_eq!(to_degrees(angle), degrees as f64);
            // The same holds starting from schema units.
            assert_eq!(to_angle(to_degrees(degrees)), degrees);
            assert_eq!(to_angle(to_degrees(angle)), angle);
        }
    }

    #[test]
    fn test_positive_angle_folds() {
        assert_eq!(to_positive_angle(90.0), 5_400_000);
        assert_eq!(to_positive_angle(-90.0), 16_200_000);
        assert_eq!(to_positive_angle(360.0), 0);
    }

    #[test]
    fn test_lengths() {
        assert_eq!(pt_to_emu(1.0), 12700);
        assert_eq!(pt_to_emu(0.75), 9525);
        assert_eq!(emu_to_pt(25400), 2.0);
        assert_eq!(font_size(10.5), 1050);
    }

    #[test]
    fn test_percentages() {
        assert_eq!(to_percentage(0.5), 50000);
        assert_eq!(to_percentage(1.0), 100000);
        assert_eq!(from_percentage(25000), 0.25);
    }

    #[test]
    fn test_format_double() {
        assert_eq!(format_double(100.0), "100");
        assert_eq!(format_double(-3.0), "-3");
        assert_eq!(format_double(0.125), "0.125");
    }
}
