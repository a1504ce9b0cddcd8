mod tests {
    use myrtio_led_bank::{LedBank, LedError, LedMode};

    #[test]
    fn test_new_bank_is_off() {
        let bank = LedBank::<8>::new();
        assert_eq!(bank.len(), 8);
        assert_eq!(bank.status(), 0);
        assert!(bank.modes().iter().all(|mode| *mode == LedMode::Off));
    }

    #[test]
    fn test_set_status_round_trip() {
        let mut bank = LedBank::<32>::new();
        for status in [0, 1, 0x8000_0001, 0xDEAD_BEEF, u32::MAX] {
            bank.set_status(status);
            assert_eq!(bank.status(), status);
        }

        let mut bank = LedBank::<5>::new();
        bank.set_status(0b10110);
        assert_eq!(bank.status(), 0b10110);
        assert_eq!(bank.led(1), Ok(LedMode::On));
        assert_eq!(bank.led(0), Ok(LedMode::Off));
    }

    #[test]
    fn test_set_status_ignores_high_bits() {
        let mut bank = LedBank::<4>::new();
        bank.set_status(0xFF);
        assert_eq!(bank.status(), 0b1111);
    }

    #[test]
    fn test_set_status_discards_sequences() {
        let mut bank = LedBank::<2>::new();
        bank.set_led(0, LedMode::Flash).unwrap();
        bank.set_led(1, LedMode::Thrice).unwrap();
        bank.advance();
        bank.set_status(0b01);
        assert_eq!(bank.modes(), &[LedMode::On, LedMode::Off]);
    }

    #[test]
    fn test_set_led_out_of_range() {
        let mut bank = LedBank::<4>::new();
        assert_eq!(
            bank.set_led(4, LedMode::On),
            Err(LedError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            bank.led(10),
            Err(LedError::IndexOutOfRange { index: 10, len: 4 })
        );
        assert_eq!(bank.status(), 0);
    }

    #[test]
    fn test_set_led_internal_mode() {
        let mut bank = LedBank::<4>::new();
        bank.set_led(2, LedMode::On).unwrap();
        assert_eq!(
            bank.set_led(2, LedMode::FlashOff),
            Err(LedError::InternalMode(LedMode::FlashOff))
        );
        assert_eq!(bank.led(2), Ok(LedMode::On));
        assert_eq!(
            bank.set_all(LedMode::TwiceOff),
            Err(LedError::InternalMode(LedMode::TwiceOff))
        );
        assert_eq!(bank.status(), 0b0100);
    }

    #[test]
    fn test_set_all() {
        let mut bank = LedBank::<3>::new();
        bank.set_all(LedMode::Flash).unwrap();
        assert_eq!(bank.advance(), 0b111);
        assert_eq!(bank.advance(), 0b000);
        assert_eq!(bank.advance(), 0b111);
    }

    #[test]
    fn test_advance_reports_presented_phase() {
        let mut bank = LedBank::<4>::new();
        bank.set_led(0, LedMode::Once).unwrap();
        bank.set_led(1, LedMode::Twice).unwrap();
        bank.set_led(2, LedMode::Thrice).unwrap();
        bank.set_led(3, LedMode::On).unwrap();

        let statuses: Vec<u32> = (0..7).map(|_| bank.advance()).collect();
        assert_eq!(
            statuses,
            [0b1111, 0b1000, 0b1110, 0b1000, 0b1100, 0b1000, 0b1000]
        );
        assert_eq!(
            bank.modes(),
            &[LedMode::Off, LedMode::Off, LedMode::Off, LedMode::On]
        );
    }

    #[test]
    fn test_status_is_pure() {
        let mut bank = LedBank::<2>::new();
        bank.set_led(0, LedMode::Once).unwrap();
        assert_eq!(bank.status(), 0b01);
        assert_eq!(bank.status(), 0b01);
        assert_eq!(bank.led(0), Ok(LedMode::Once));
    }

    #[test]
    fn test_narrow_status_word() {
        let mut bank = LedBank::<8, u8>::new();
        bank.set_status(0b1010_0101);
        assert_eq!(bank.status(), 0b1010_0101_u8);
        bank.set_led(7, LedMode::Flash).unwrap();
        assert_eq!(bank.advance(), 0b1010_0101);
        assert_eq!(bank.status(), 0b0010_0101);
    }

    #[test]
    fn test_error_display() {
        let error = LedError::IndexOutOfRange { index: 9, len: 8 };
        assert_eq!(
            error.to_string(),
            "LED index 9 is out of range for a bank of 8 LEDs"
        );
        assert_eq!(
            LedError::InternalMode(LedMode::FlashOff).to_string(),
            "mode `flash_off` is an internal phase and cannot be assigned"
        );
    }
}
