mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_led_bank::{
        LedBankConfig, LedController, LedError, LedMode, NoSink, SharedLedController,
    };

    static LEDS: SharedLedController<NoSink, 4> = SharedLedController::new(
        LedController::detached(LedBankConfig::new(Duration::from_millis(100))),
    );

    #[test]
    fn test_shared_controller() {
        LEDS.set_status(0b0001);
        LEDS.set_led(3, LedMode::Twice).unwrap();
        assert_eq!(LEDS.led(3), Ok(LedMode::Twice));
        assert_eq!(
            LEDS.set_led(4, LedMode::On),
            Err(LedError::IndexOutOfRange { index: 4, len: 4 })
        );

        let result = LEDS.tick(Instant::from_millis(0));
        assert_eq!(result.status, Some(0b1001));
        assert!(!LEDS.tick(Instant::from_millis(20)).is_advanced());
        assert_eq!(LEDS.status(), 0b0001);

        let deadline = LEDS.lock(|controller| controller.deadline());
        assert_eq!(deadline, Some(Instant::from_millis(100)));
    }

    #[test]
    fn test_shared_controller_with_sink() {
        let mut published = Vec::new();
        let shared: SharedLedController<_, 2> = SharedLedController::new(LedController::new(
            LedBankConfig::new(Duration::from_millis(0)),
            |status: u32| published.push(status),
        ));
        shared.set_led(1, LedMode::Flash).unwrap();
        shared.tick(Instant::from_millis(0));
        shared.tick(Instant::from_millis(0));
        drop(shared.into_inner());
        assert_eq!(published, [0b10, 0b00]);
    }
}
