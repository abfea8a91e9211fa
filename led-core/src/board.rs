//! Board binding layer
//!
//! [`BoardConfig`] is the build-time table of LED wiring for one board, and
//! [`BoardLeds`] performs the raw pin I/O for descriptors taken from it.
//!
//! Nothing in this module reports errors. An absent descriptor, an unknown
//! port or an out-of-range pin makes the pin operation a no-op.

use crate::logic::resolve;
use crate::traits::{GpioPort, LedHardware};
use crate::types::{HwDescriptor, LedId, PinLevel};

/// LED wiring table of one board, one slot per [`LedId`]
///
/// Built with `const fn`s so a board can declare it as a `static`:
///
/// ```
/// # use led_core::{BoardConfig, HwDescriptor, LedId};
/// static BOARD: BoardConfig = BoardConfig::new().with_led(LedId::Led1, HwDescriptor::new(0, 5));
/// assert!(BOARD.is_supported(LedId::Led1));
/// assert!(!BOARD.is_supported(LedId::Led2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    descriptors: [HwDescriptor; LedId::COUNT],
    present: [bool; LedId::COUNT],
}

impl BoardConfig {
    /// Empty board: every slot absent, every descriptor zero-valued
    pub const fn new() -> Self {
        Self {
            descriptors: [HwDescriptor::new(0, 0); LedId::COUNT],
            present: [false; LedId::COUNT],
        }
    }

    /// Declares `id` as present with the given wiring
    ///
    /// `LedId::None` is ignored.
    pub const fn with_led(mut self, id: LedId, hw: HwDescriptor) -> Self {
        if let Some(index) = id.index() {
            self.descriptors[index] = hw;
            self.present[index] = true;
        }
        self
    }

    /// Descriptor slot for `id`, `None` outside the declared range
    ///
    /// A slot that is in range but was never declared yields the zero-valued
    /// descriptor, so check [`is_supported`](Self::is_supported) before
    /// trusting its contents.
    pub fn get_descriptor(&self, id: LedId) -> Option<&HwDescriptor> {
        id.index().map(|index| &self.descriptors[index])
    }

    /// `true` iff the board has a physical LED in this slot
    pub fn is_supported(&self, id: LedId) -> bool {
        id.index().is_some_and(|index| self.present[index])
    }

    /// Slots present on this board, in table order
    pub fn supported_leds(&self) -> impl Iterator<Item = LedId> + '_ {
        LedId::ALL.into_iter().filter(|id| self.is_supported(*id))
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Board LEDs: a wiring table plus the GPIO primitives to drive it
///
/// The table is borrowed for `'c`; boards keep it in a `static`, so
/// descriptors handed out by [`get_descriptor`](Self::get_descriptor) outlive
/// every LED handle built from them.
#[derive(Debug)]
pub struct BoardLeds<'c, G> {
    config: &'c BoardConfig,
    gpio: G,
}

impl<'c, G: GpioPort> BoardLeds<'c, G> {
    pub const fn new(config: &'c BoardConfig, gpio: G) -> Self {
        Self { config, gpio }
    }

    pub fn get_descriptor(&self, id: LedId) -> Option<&'c HwDescriptor> {
        self.config.get_descriptor(id)
    }

    pub fn is_supported(&self, id: LedId) -> bool {
        self.config.is_supported(id)
    }

    pub fn config(&self) -> &'c BoardConfig {
        self.config
    }

    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    pub fn gpio_mut(&mut self) -> &mut G {
        &mut self.gpio
    }
}

impl<G: GpioPort> LedHardware for BoardLeds<'_, G> {
    fn set_state(&mut self, hw: Option<&HwDescriptor>, state: bool) {
        let Some((bank, mask)) = resolve(hw) else {
            return;
        };
        self.gpio.write_pin(bank, mask, PinLevel::from(state));
    }

    fn toggle(&mut self, hw: Option<&HwDescriptor>) {
        let Some((bank, mask)) = resolve(hw) else {
            return;
        };
        self.gpio.toggle_pin(bank, mask);
    }

    fn get_state(&mut self, hw: Option<&HwDescriptor>) -> bool {
        let Some((bank, mask)) = resolve(hw) else {
            return false;
        };
        self.gpio.read_pin(bank, mask) == PinLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GpioBank;

    static BOARD: BoardConfig = BoardConfig::new()
        .with_led(LedId::Led1, HwDescriptor::new(0, 5))
        .with_led(LedId::Led3, HwDescriptor::new(2, 13));

    /// Counts GPIO calls and answers reads with a fixed level
    #[derive(Default)]
    struct CountingGpio {
        calls: usize,
        last_mask: Option<u16>,
        high: bool,
    }

    impl GpioPort for CountingGpio {
        fn write_pin(&mut self, _bank: GpioBank, mask: u16, _level: PinLevel) {
            self.calls += 1;
            self.last_mask = Some(mask);
        }

        fn toggle_pin(&mut self, _bank: GpioBank, mask: u16) {
            self.calls += 1;
            self.last_mask = Some(mask);
        }

        fn read_pin(&mut self, _bank: GpioBank, mask: u16) -> PinLevel {
            self.calls += 1;
            self.last_mask = Some(mask);
            PinLevel::from(self.high)
        }
    }

    #[test]
    fn test_get_descriptor_out_of_range() {
        assert_eq!(BOARD.get_descriptor(LedId::None), None);
    }

    #[test]
    fn test_get_descriptor_present_slot() {
        assert_eq!(
            BOARD.get_descriptor(LedId::Led3),
            Some(&HwDescriptor::new(2, 13))
        );
    }

    #[test]
    fn test_get_descriptor_undeclared_slot_is_zero_valued() {
        assert_eq!(BOARD.get_descriptor(LedId::Led2), Some(&HwDescriptor::default()));
        assert!(!BOARD.is_supported(LedId::Led2));
    }

    #[test]
    fn test_with_led_ignores_none() {
        let config = BoardConfig::new().with_led(LedId::None, HwDescriptor::new(1, 1));
        assert_eq!(config, BoardConfig::new());
    }

    #[test]
    fn test_supported_leds() {
        let mut ids = BOARD.supported_leds();
        assert_eq!(ids.next(), Some(LedId::Led1));
        assert_eq!(ids.next(), Some(LedId::Led3));
        assert_eq!(ids.next(), None);
    }

    #[test]
    fn test_absent_descriptor_is_noop() {
        let mut leds = BoardLeds::new(&BOARD, CountingGpio::default());
        leds.set_state(None, true);
        leds.toggle(None);
        assert!(!leds.get_state(None));
        assert_eq!(leds.gpio().calls, 0);
    }

    #[test]
    fn test_unknown_port_is_noop() {
        let hw = HwDescriptor::new(7, 5);
        let mut leds = BoardLeds::new(&BOARD, CountingGpio { high: true, ..Default::default() });
        leds.set_state(Some(&hw), true);
        leds.toggle(Some(&hw));
        assert!(!leds.get_state(Some(&hw)));
        assert_eq!(leds.gpio().calls, 0);
    }

    #[test]
    fn test_get_state_reads_high() {
        let mut leds = BoardLeds::new(&BOARD, CountingGpio { high: true, ..Default::default() });
        let hw = leds.get_descriptor(LedId::Led1);
        assert!(leds.get_state(hw));
        assert_eq!(leds.gpio().last_mask, Some(1 << 5));
    }
}
