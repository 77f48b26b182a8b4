//! Status output on a 16x2 character display.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use heapless::String;

pub const WELCOME_MESSAGE: &str = "Welcome AquaMate";
pub const WELCOME_MS: u32 = 2_000;

/// Character display driver. Rendering is fire-and-forget.
pub trait CharacterDisplay {
    fn clear(&mut self);
    fn set_cursor(&mut self, col: u8, row: u8);
    fn print(&mut self, text: &str);
}

pub struct StatusScreen<L> {
    lcd: L,
}

impl<L: CharacterDisplay> StatusScreen<L> {
    /// Show the splash message for [`WELCOME_MS`], then clear the screen.
    pub fn new<D: DelayNs>(mut lcd: L, delay: &mut D) -> Self {
        lcd.clear();
        lcd.print(WELCOME_MESSAGE);
        delay.delay_ms(WELCOME_MS);
        lcd.clear();
        Self { lcd }
    }

    /// Moisture on the top row, tank and pump status on the bottom row.
    ///
    /// `system_state` is accepted but not rendered; both rows are already
    /// full on a 16 column display.
    pub fn show_status(&mut self, tank: &str, pump: &str, moisture_percent: i32, system_state: &str) {
        // "Moist: -2147483648%" is the longest possible top row
        let mut top: String<20> = String::new();
        let _ = write!(top, "Moist: {}%", moisture_percent);
        log::debug!("status: {} tank={} pump={} state={}", top.as_str(), tank, pump, system_state);

        self.lcd.clear();
        self.lcd.set_cursor(0, 0);
        self.lcd.print(&top);
        self.lcd.set_cursor(0, 1);
        self.lcd.print("Tank: ");
        self.lcd.print(tank);
        self.lcd.print(" Pump: ");
        self.lcd.print(pump);
    }

    pub fn show_error(&mut self, error: &str) {
        log::warn!("display error: {}", error);
        self.show_message("Error:", error);
    }

    pub fn show_warning(&mut self, warning: &str) {
        log::warn!("display warning: {}", warning);
        self.show_message("Warning:", warning);
    }

    pub fn release(self) -> L {
        self.lcd
    }

    fn show_message(&mut self, heading: &str, message: &str) {
        self.lcd.clear();
        self.lcd.set_cursor(0, 0);
        self.lcd.print(heading);
        self.lcd.set_cursor(0, 1);
        self.lcd.print(message);
    }
}
