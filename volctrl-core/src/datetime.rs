//! Wall-clock time shown in the top line

use core::fmt::Write;

use heapless::String;

/// Characters in a top-line label
pub const LABEL_LEN: usize = 12;

/// Shown until the host has a valid time
pub const UNSET_LABEL: &str = "--:-- --- --";

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Local time to the minute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub hour: u8,
    pub minute: u8,
    /// 1-12
    pub month: u8,
    pub day: u8,
}

impl DateTime {
    pub const fn new(hour: u8, minute: u8, month: u8, day: u8) -> Self {
        Self {
            hour,
            minute,
            month,
            day,
        }
    }

    /// "HH:MM Mon DD"; an invalid month reads "---"
    pub fn label(&self) -> String<LABEL_LEN> {
        let month = usize::from(self.month)
            .checked_sub(1)
            .and_then(|i| MONTHS.get(i))
            .copied()
            .unwrap_or("---");

        let mut text = String::new();
        // Fields past two digits are clipped to keep the label width fixed
        let _ = write!(
            text,
            "{:02}:{:02} {} {:02}",
            self.hour % 100,
            self.minute % 100,
            month,
            self.day % 100
        );
        text
    }
}

/// Label for the top line, dashes while the time is unknown
pub fn label(time: Option<DateTime>) -> String<LABEL_LEN> {
    match time {
        Some(time) => time.label(),
        None => {
            let mut text = String::new();
            let _ = text.push_str(UNSET_LABEL);
            text
        }
    }
}
