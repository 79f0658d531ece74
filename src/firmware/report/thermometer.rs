use core::fmt::Write as _;

use fixed::types::I20F12;
use heapless::String;

/// Temperature sampling boundary; implemented by the sensor integration.
pub trait Thermometer {
    fn read_millicelsius(&mut self) -> i32;
}

pub const TEMPERATURE_TEXT_MAX: usize = 16;

// Weight kept by the previous smoothed value on each update.
const FLATTEN: I20F12 = I20F12::from_bits(1 << 11); // 0.5

/// Exponential smoothing over milli-celsius samples. The first sample
/// after construction or `reset` seeds the filter unchanged; resetting on
/// wake avoids slowly flattening up from a stale pre-sleep reading.
#[derive(Default)]
pub struct TemperatureFilter {
    last: Option<I20F12>,
}

impl TemperatureFilter {
    pub const fn new() -> Self {
        Self { last: None }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn update(&mut self, sample_millicelsius: i32) -> i32 {
        // Clamp to the I20F12 integer range; readings anywhere near the
        // bound are sensor garbage anyway.
        let sample = I20F12::from_num(sample_millicelsius.clamp(-500_000, 500_000));
        let next = match self.last {
            Some(last) => last * FLATTEN + sample * (I20F12::ONE - FLATTEN),
            None => sample,
        };
        self.last = Some(next);
        next.to_num()
    }

    pub fn last_millicelsius(&self) -> Option<i32> {
        self.last.map(|value| value.to_num())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    const fn suffix(self) -> char {
        match self {
            Self::Celsius => 'C',
            Self::Fahrenheit => 'F',
        }
    }
}

pub fn millicelsius_to_millifahrenheit(millicelsius: i32) -> i32 {
    millicelsius.saturating_mul(9) / 5 + 32_000
}

/// Render a reading as drawn on the display, e.g. `21.05oC` ("o" is the
/// degree mark in the device's glyph set). Two decimals, zero padded.
pub fn format_temperature(
    millis: i32,
    unit: TemperatureUnit,
) -> String<TEMPERATURE_TEXT_MAX> {
    let sign = if millis < 0 { "-" } else { "" };
    let magnitude = millis.unsigned_abs();
    let whole = magnitude / 1000;
    let decimals = (magnitude % 1000) / 10;
    let mut out = String::new();
    let _ = write!(out, "{}{}.{:02}o{}", sign, whole, decimals, unit.suffix());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_seeds_the_filter() {
        let mut filter = TemperatureFilter::new();
        assert_eq!(filter.update(21_500), 21_500);
        assert_eq!(filter.last_millicelsius(), Some(21_500));
    }

    #[test]
    fn updates_move_halfway_toward_the_sample() {
        let mut filter = TemperatureFilter::new();
        let _ = filter.update(20_000);
        assert_eq!(filter.update(22_000), 21_000);
        assert_eq!(filter.update(21_000), 21_000);
    }

    #[test]
    fn reset_clears_the_seed() {
        let mut filter = TemperatureFilter::new();
        let _ = filter.update(40_000);
        filter.reset();
        assert_eq!(filter.update(10_000), 10_000);
    }

    #[test]
    fn celsius_to_fahrenheit() {
        assert_eq!(millicelsius_to_millifahrenheit(0), 32_000);
        assert_eq!(millicelsius_to_millifahrenheit(21_500), 70_700);
        assert_eq!(millicelsius_to_millifahrenheit(-10_000), 14_000);
    }

    #[test]
    fn formatting_zero_pads_decimals() {
        assert_eq!(
            format_temperature(21_050, TemperatureUnit::Celsius).as_str(),
            "21.05oC"
        );
        assert_eq!(
            format_temperature(21_500, TemperatureUnit::Celsius).as_str(),
            "21.50oC"
        );
    }

    #[test]
    fn formatting_keeps_the_sign_below_one_degree() {
        assert_eq!(
            format_temperature(-500, TemperatureUnit::Celsius).as_str(),
            "-0.50oC"
        );
        assert_eq!(
            format_temperature(-21_050, TemperatureUnit::Fahrenheit).as_str(),
            "-21.05oF"
        );
    }
}
