use crate::event::Event;

/// # Timers
/// Two 8-bit countdowns ticked by the host at 60Hz, independently of the CPU clock.
///
/// The tone is audible for as long as `sound` is above zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decrements both timers, stopping at zero.
    /// Returns `ToneStop` on the tick that brings `sound` down to zero.
    pub fn tick(&mut self) -> Option<Event> {
        self.delay = self.delay.saturating_sub(1);

        if self.sound > 0 {
            self.sound -= 1;
            if self.sound == 0 {
                return Some(Event::ToneStop);
            }
        }
        None
    }

    /// Sets the sound timer, reporting when the tone switches on or off as a result.
    pub fn set_sound(&mut self, value: u8) -> Option<Event> {
        let was_audible = self.tone_active();
        self.sound = value;
        match (was_audible, self.tone_active()) {
            (false, true) => Some(Event::ToneStart),
            (true, false) => Some(Event::ToneStop),
            _ => None,
        }
    }

    pub fn tone_active(&self) -> bool {
        self.sound > 0
    }
}

#[cfg(test)]
mod test_timers {
    use super::*;

    #[test]
    fn test_delay_counts_down_to_zero() {
        let mut timers = Timers::new();
        timers.delay = 60;
        for _ in 0..60 {
            timers.tick();
        }
        assert_eq!(timers.delay, 0);
        timers.tick();
        timers.tick();
        assert_eq!(timers.delay, 0);
    }

    #[test]
    fn test_timers_are_independent() {
        let mut timers = Timers::new();
        timers.delay = 5;
        timers.sound = 2;
        timers.tick();
        assert_eq!((timers.delay, timers.sound), (4, 1));
        timers.tick();
        timers.tick();
        assert_eq!((timers.delay, timers.sound), (2, 0));
    }

    #[test]
    fn test_tone_stop_fires_once() {
        let mut timers = Timers::new();
        timers.sound = 2;
        assert_eq!(timers.tick(), None);
        assert_eq!(timers.tick(), Some(Event::ToneStop));
        assert_eq!(timers.tick(), None);
        assert_eq!(timers.tick(), None);
    }

    #[test]
    fn test_set_sound_starts_tone() {
        let mut timers = Timers::new();
        assert_eq!(timers.set_sound(3), Some(Event::ToneStart));
        assert_eq!(timers.set_sound(10), None);
        assert!(timers.tone_active());
    }

    #[test]
    fn test_set_sound_zero_stops_tone() {
        let mut timers = Timers::new();
        timers.set_sound(3);
        assert_eq!(timers.set_sound(0), Some(Event::ToneStop));
        assert_eq!(timers.set_sound(0), None);
    }
}
