mod tests {
    use myrtio_led_bank::LedMode;

    fn lit_sequence(mut mode: LedMode, steps: usize) -> Vec<bool> {
        (0..steps)
            .map(|_| {
                let (next, lit) = mode.step();
                mode = next;
                lit
            })
            .collect()
    }

    #[test]
    fn test_fixed_points() {
        assert_eq!(LedMode::On.step(), (LedMode::On, true));
        assert_eq!(LedMode::Off.step(), (LedMode::Off, false));
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(LedMode::Flash.next(), LedMode::FlashOff);
        assert_eq!(LedMode::FlashOff.next(), LedMode::Flash);
        assert_eq!(LedMode::Once.next(), LedMode::Off);
        assert_eq!(LedMode::Twice.next(), LedMode::TwiceOff);
        assert_eq!(LedMode::TwiceOff.next(), LedMode::Once);
        assert_eq!(LedMode::Thrice.next(), LedMode::ThriceOff);
        assert_eq!(LedMode::ThriceOff.next(), LedMode::Twice);
    }

    #[test]
    fn test_bounded_sequences_decay_to_off() {
        assert_eq!(lit_sequence(LedMode::Once, 3), [true, false, false]);
        assert_eq!(
            lit_sequence(LedMode::Twice, 6),
            [true, false, true, false, false, false]
        );
        assert_eq!(
            lit_sequence(LedMode::Thrice, 8),
            [true, false, true, false, true, false, false, false]
        );

        let mut mode = LedMode::Thrice;
        for _ in 0..5 {
            mode = mode.next();
        }
        assert_eq!(mode, LedMode::Off);
    }

    #[test]
    fn test_flash_never_settles() {
        let sequence = lit_sequence(LedMode::Flash, 10);
        for (index, lit) in sequence.iter().enumerate() {
            assert_eq!(*lit, index % 2 == 0);
        }
    }

    #[test]
    fn test_assignable() {
        for mode in LedMode::ASSIGNABLE {
            assert!(mode.is_assignable());
        }
        assert!(!LedMode::FlashOff.is_assignable());
        assert!(!LedMode::TwiceOff.is_assignable());
        assert!(!LedMode::ThriceOff.is_assignable());
    }

    #[test]
    fn test_mode_from_raw() {
        assert_eq!(LedMode::from_raw(0), Some(LedMode::On));
        assert_eq!(LedMode::from_raw(1), Some(LedMode::Off));
        assert_eq!(LedMode::from_raw(8), Some(LedMode::FlashOff));
        assert_eq!(LedMode::from_raw(9), None);
        assert_eq!(LedMode::Thrice.as_raw(), 5);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(LedMode::parse_from_str("flash"), Some(LedMode::Flash));
        assert_eq!(LedMode::parse_from_str("thrice"), Some(LedMode::Thrice));
        assert_eq!(LedMode::parse_from_str("flash_off"), None);
        assert_eq!(LedMode::parse_from_str("blink"), None);
        assert_eq!(LedMode::TwiceOff.as_str(), "twice_off");
    }
}
