//! Logical LED device
//!
//! [`Led`] is the handle application code drives. It starts unbound and is
//! bound to a board descriptor by [`Led::init`]; every other call checks the
//! binding first and then forwards to the [`LedHardware`] it owns.
//!
//! The handle borrows the descriptor, it never owns it. Descriptors come from
//! a board's `static` table and therefore outlive the handle.

use crate::traits::{LedError, LedHardware, Result};
use crate::types::{HwDescriptor, LedState};

pub struct Led<'a, H> {
    hw_config: Option<&'a HwDescriptor>,
    hardware: H,
}

impl<'a, H: LedHardware> Led<'a, H> {
    /// Creates an uninitialized handle on top of `hardware`
    pub const fn new(hardware: H) -> Self {
        Self {
            hw_config: None,
            hardware,
        }
    }

    /// Binds the handle to a descriptor
    ///
    /// Fails with `InvalidParameter` when `hw_config` is absent and leaves the
    /// handle untouched. Calling it again on a bound handle rebinds it.
    pub fn init(&mut self, hw_config: Option<&'a HwDescriptor>) -> Result<()> {
        let hw_config = hw_config.ok_or(LedError::InvalidParameter)?;
        self.hw_config = Some(hw_config);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.hw_config.is_some()
    }

    /// Descriptor the handle is bound to
    pub fn hw_config(&self) -> Option<&'a HwDescriptor> {
        self.hw_config
    }

    /// Drives the LED on or off
    ///
    /// Succeeds once the handle is bound, even if the descriptor turns out
    /// not to address a real pin.
    pub fn set_state(&mut self, state: LedState) -> Result<()> {
        let hw_config = self.bound()?;
        self.hardware.set_state(Some(hw_config), state.into());
        Ok(())
    }

    pub fn toggle(&mut self) -> Result<()> {
        let hw_config = self.bound()?;
        self.hardware.toggle(Some(hw_config));
        Ok(())
    }

    /// Reads the LED pin back as a logical state
    pub fn get_state(&mut self) -> Result<LedState> {
        let hw_config = self.bound()?;
        Ok(LedState::from(self.hardware.get_state(Some(hw_config))))
    }

    /// [`get_state`](Self::get_state) into a caller-provided slot
    ///
    /// An absent slot is `InvalidParameter`, checked before the binding.
    /// On error the slot is left unchanged.
    pub fn get_state_into(&mut self, out: Option<&mut LedState>) -> Result<()> {
        let out = out.ok_or(LedError::InvalidParameter)?;
        *out = self.get_state()?;
        Ok(())
    }

    pub fn hardware(&self) -> &H {
        &self.hardware
    }

    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hardware
    }

    pub fn into_hardware(self) -> H {
        self.hardware
    }

    fn bound(&self) -> Result<&'a HwDescriptor> {
        self.hw_config.ok_or(LedError::NotInitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts binding-layer calls, echoes the last written state
    #[derive(Default)]
    struct EchoHardware {
        calls: usize,
        state: bool,
    }

    impl LedHardware for EchoHardware {
        fn set_state(&mut self, _hw: Option<&HwDescriptor>, state: bool) {
            self.calls += 1;
            self.state = state;
        }

        fn toggle(&mut self, _hw: Option<&HwDescriptor>) {
            self.calls += 1;
            self.state = !self.state;
        }

        fn get_state(&mut self, _hw: Option<&HwDescriptor>) -> bool {
            self.calls += 1;
            self.state
        }
    }

    static HW: HwDescriptor = HwDescriptor::new(0, 1);

    #[test]
    fn test_new_is_uninitialized() {
        let led = Led::new(EchoHardware::default());
        assert!(!led.is_initialized());
        assert_eq!(led.hw_config(), None);
    }

    #[test]
    fn test_init_without_descriptor() {
        let mut led = Led::new(EchoHardware::default());
        assert_eq!(led.init(None), Err(LedError::InvalidParameter));
        assert!(!led.is_initialized());
    }

    #[test]
    fn test_init_binds_descriptor() {
        let mut led = Led::new(EchoHardware::default());
        assert_eq!(led.init(Some(&HW)), Ok(()));
        assert!(led.is_initialized());
        assert!(core::ptr::eq(led.hw_config().unwrap(), &HW));
    }

    #[test]
    fn test_failed_reinit_keeps_binding() {
        let mut led = Led::new(EchoHardware::default());
        led.init(Some(&HW)).unwrap();
        assert_eq!(led.init(None), Err(LedError::InvalidParameter));
        assert_eq!(led.hw_config(), Some(&HW));
    }

    #[test]
    fn test_reinit_rebinds() {
        let other = HwDescriptor::new(1, 7);
        let mut led = Led::new(EchoHardware::default());
        led.init(Some(&HW)).unwrap();
        assert_eq!(led.init(Some(&other)), Ok(()));
        assert_eq!(led.hw_config(), Some(&other));
    }

    #[test]
    fn test_uninitialized_calls_fail() {
        let mut led = Led::new(EchoHardware::default());
        assert_eq!(led.set_state(LedState::On), Err(LedError::NotInitialized));
        assert_eq!(led.toggle(), Err(LedError::NotInitialized));
        assert_eq!(led.get_state(), Err(LedError::NotInitialized));
        assert_eq!(led.hardware().calls, 0);
    }

    #[test]
    fn test_get_state_into_absent_slot() {
        let mut led = Led::new(EchoHardware::default());
        // checked before the binding
        assert_eq!(led.get_state_into(None), Err(LedError::InvalidParameter));
        led.init(Some(&HW)).unwrap();
        assert_eq!(led.get_state_into(None), Err(LedError::InvalidParameter));
        assert_eq!(led.hardware().calls, 0);
    }

    #[test]
    fn test_get_state_into_uninitialized_leaves_slot() {
        let mut led = Led::new(EchoHardware::default());
        let mut out = LedState::On;
        assert_eq!(led.get_state_into(Some(&mut out)), Err(LedError::NotInitialized));
        assert_eq!(out, LedState::On);
    }

    #[test]
    fn test_set_then_get() {
        let mut led = Led::new(EchoHardware::default());
        led.init(Some(&HW)).unwrap();
        led.set_state(LedState::On).unwrap();
        let mut out = LedState::Off;
        led.get_state_into(Some(&mut out)).unwrap();
        assert_eq!(out, LedState::On);
    }

    #[test]
    fn test_blink_step_alternates() {
        let mut led = Led::new(EchoHardware::default());
        led.init(Some(&HW)).unwrap();
        assert_eq!(crate::blink_step(&mut led), Ok(LedState::On));
        assert_eq!(crate::blink_step(&mut led), Ok(LedState::Off));
    }
}
