mod tests {
    use myrtio_led_engine::frame_scheduler::DEFAULT_FRAME_DURATION;
    use myrtio_led_engine::{Duration, FpsCounter, FrameScheduler, Instant};

    fn ms(value: u64) -> Instant {
        Instant::from_millis(value)
    }

    #[test]
    fn test_first_frame_is_due_immediately() {
        let scheduler = FrameScheduler::new(Duration::from_millis(50));
        assert!(scheduler.is_due(ms(0)));
    }

    #[test]
    fn test_fixed_cadence() {
        let mut scheduler = FrameScheduler::new(Duration::from_millis(50));

        let result = scheduler.advance(ms(0));
        assert!(result.rendered);
        assert_eq!(result.next_deadline, ms(50));
        assert_eq!(result.sleep_duration, Duration::from_millis(50));

        assert!(!scheduler.is_due(ms(49)));
        let idle = scheduler.idle(ms(20));
        assert!(!idle.rendered);
        assert_eq!(idle.sleep_duration, Duration::from_millis(30));

        assert!(scheduler.is_due(ms(50)));
        let result = scheduler.advance(ms(53));
        assert_eq!(result.next_deadline, ms(100));
        assert_eq!(result.sleep_duration, Duration::from_millis(47));
    }

    #[test]
    fn test_small_lag_catches_up() {
        let mut scheduler = FrameScheduler::new(Duration::from_millis(50));
        scheduler.advance(ms(0));

        let result = scheduler.advance(ms(120));
        assert_eq!(result.next_deadline, ms(100));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));
    }

    #[test]
    fn test_large_lag_resets_schedule() {
        let mut scheduler = FrameScheduler::new(Duration::from_millis(50));
        scheduler.advance(ms(0));

        let result = scheduler.advance(ms(400));
        assert_eq!(result.next_deadline, ms(450));
        assert_eq!(result.sleep_duration, Duration::from_millis(50));
    }

    #[test]
    fn test_zero_duration_uses_default() {
        let scheduler = FrameScheduler::new(Duration::from_millis(0));
        assert_eq!(scheduler.frame_duration(), DEFAULT_FRAME_DURATION);
        assert_eq!(DEFAULT_FRAME_DURATION, Duration::from_millis(50));
    }

    #[test]
    fn test_fps_publishes_after_full_window() {
        let mut counter = FpsCounter::new();
        for frame in 0..30u64 {
            assert_eq!(counter.record(ms(frame * 33)), 0);
        }
        assert_eq!(counter.record(ms(1000)), 30);

        for frame in 1..10u64 {
            counter.record(ms(1000 + frame * 100));
        }
        assert_eq!(counter.fps(), 30);
        assert_eq!(counter.record(ms(2000)), 10);
    }

    #[test]
    fn test_fps_saturates() {
        let mut counter = FpsCounter::new();
        for _ in 0..1000 {
            counter.record(ms(0));
        }
        assert_eq!(counter.record(ms(1000)), 255);
    }
}
