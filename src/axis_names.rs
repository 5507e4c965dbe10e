//! Centralized axis naming utilities
//!
//! The MPU logs three orthogonal sensor axes per channel group.

/// Number of sensor axes per channel group (accelerometer, gyroscope).
pub const AXIS_COUNT: usize = 3;

/// Get all axis names as a static array
pub const AXIS_NAMES: [&str; AXIS_COUNT] = ["X", "Y", "Z"];

/// Get the axis name for a given index
///
/// # Panics
/// Panics if index is greater than 2
pub fn axis_name(index: usize) -> &'static str {
    match index {
        0 => "X",
        1 => "Y",
        2 => "Z",
        _ => panic!(
            "Invalid axis index: {}. Expected 0 (X), 1 (Y), or 2 (Z)",
            index
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_name() {
        assert_eq!(axis_name(0), "X");
        assert_eq!(axis_name(1), "Y");
        assert_eq!(axis_name(2), "Z");
    }

    #[test]
    #[should_panic(expected = "Invalid axis index")]
    fn test_axis_name_panic() {
        axis_name(3);
    }

    #[test]
    fn test_axis_names_constant() {
        for (i, name) in AXIS_NAMES.iter().enumerate() {
            assert_eq!(*name, axis_name(i));
        }
    }
}
