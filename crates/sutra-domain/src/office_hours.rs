use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Horario de oficina del tenant (horas de reloj, `start_hour < end_hour`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl OfficeHours {
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self, DomainError> {
        let hours = Self { start_hour, end_hour };
        hours.validate()?;
        Ok(hours)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            return Err(DomainError::InvalidOfficeHours { start: self.start_hour,
                                                         end: self.end_hour });
        }
        Ok(())
    }

    pub fn working_hours(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour)
    }
}

impl Default for OfficeHours {
    fn default() -> Self {
        Self { start_hour: 9, end_hour: 18 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_nine_to_six() {
        let h = OfficeHours::default();
        assert_eq!((h.start_hour, h.end_hour), (9, 18));
        assert_eq!(h.working_hours(), 9);
    }

    #[test]
    fn inverted_or_overflowing_hours_are_rejected() {
        assert!(OfficeHours::new(18, 9).is_err());
        assert!(OfficeHours::new(9, 9).is_err());
        assert!(OfficeHours::new(9, 25).is_err());
        assert!(OfficeHours::new(8, 17).is_ok());
    }
}
