mod controller;
mod thermometer;

pub use controller::ReportController;
pub use thermometer::{
    format_temperature, millicelsius_to_millifahrenheit, TemperatureFilter, TemperatureUnit,
    Thermometer, TEMPERATURE_TEXT_MAX,
};
