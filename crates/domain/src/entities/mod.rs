//! Domain entities

mod weather_record;

pub use weather_record::{
    FORECAST_DAYS, FORECAST_ICON_URL, ForecastEntry, WeatherRecord, synthetic_forecast,
};
