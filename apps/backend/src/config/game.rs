use std::env;

use time::UtcOffset;

use crate::domain::day::Cutover;
use crate::error::AppError;

/// Game-facing configuration: the day boundary and the display name
/// used on outbound notices.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub cutover: Cutover,
    pub display_name: String,
}

impl GameConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let hour = match env::var("CUTOVER_HOUR") {
            Err(_) => 9,
            Ok(raw) => raw.parse::<u8>().map_err(|_| {
                AppError::config(format!("CUTOVER_HOUR must be an hour (0-23), got '{raw}'"))
            })?,
        };
        let offset_hours = match env::var("CUTOVER_UTC_OFFSET") {
            Err(_) => -5,
            Ok(raw) => raw.parse::<i8>().map_err(|_| {
                AppError::config(format!(
                    "CUTOVER_UTC_OFFSET must be whole hours, got '{raw}'"
                ))
            })?,
        };
        let offset = UtcOffset::from_hms(offset_hours, 0, 0)
            .map_err(|e| AppError::config(format!("invalid CUTOVER_UTC_OFFSET: {e}")))?;
        let cutover = Cutover::new(hour, offset).map_err(AppError::from)?;

        let display_name =
            env::var("BOT_DISPLAY_NAME").unwrap_or_else(|_| "repgames".to_string());

        Ok(Self {
            cutover,
            display_name,
        })
    }
}
