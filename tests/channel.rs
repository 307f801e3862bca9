mod tests {
    use myrtio_led_engine::{AnimationMode, AnimationState, Instant, StateChannel};

    fn state(mode: AnimationMode, brightness: u8) -> AnimationState {
        AnimationState::new().with_mode(mode).with_brightness(brightness)
    }

    #[test]
    fn test_initial_state_is_stale() {
        let initial = state(AnimationMode::Rainbow, 10);
        let channel = StateChannel::new(initial);

        assert!(!channel.has_pending());
        let snapshot = channel.consume();
        assert_eq!(snapshot.state, initial);
        assert!(!snapshot.fresh);
        assert_eq!(snapshot.timestamp, Instant::from_millis(0));
    }

    #[test]
    fn test_latest_write_wins() {
        let channel = StateChannel::default();
        let publisher = channel.publisher();

        publisher.publish(Instant::from_millis(10), state(AnimationMode::Chase, 1));
        publisher.publish(Instant::from_millis(11), state(AnimationMode::Dash, 2));
        channel.publish(Instant::from_millis(12), state(AnimationMode::Pulse, 3));
        assert!(channel.has_pending());

        let snapshot = channel.consume();
        assert!(snapshot.fresh);
        assert_eq!(snapshot.state, state(AnimationMode::Pulse, 3));
        assert_eq!(snapshot.timestamp, Instant::from_millis(12));
        assert!(!channel.has_pending());
    }

    #[test]
    fn test_consume_without_publish_repeats_active() {
        let channel = StateChannel::default();
        channel.publish(Instant::from_millis(40), state(AnimationMode::Sparkle, 99));
        let first = channel.consume();

        let second = channel.consume();
        assert!(!second.fresh);
        assert_eq!(second.state, first.state);
        assert_eq!(second.timestamp, Instant::from_millis(40));
        assert_eq!(channel.active(), first.state);
    }

    #[test]
    fn test_seed_active_keeps_pending() {
        let channel = StateChannel::default();
        channel.publish(Instant::from_millis(5), state(AnimationMode::Chase, 50));
        channel.seed_active(state(AnimationMode::Solid, 128));

        assert_eq!(channel.active(), state(AnimationMode::Solid, 128));
        assert!(channel.has_pending());
        assert_eq!(channel.consume().state, state(AnimationMode::Chase, 50));
    }

    #[test]
    fn test_concurrent_publishers() {
        let channel = StateChannel::default();

        std::thread::scope(|scope| {
            for producer in 0..4u8 {
                let publisher = channel.publisher();
                scope.spawn(move || {
                    for i in 0..100u8 {
                        let state = AnimationState::new().with_brightness(i).with_mode(AnimationMode::from_raw(producer));
                        publisher.publish(Instant::from_millis(u64::from(i)), state);
                    }
                });
            }
        });

        let snapshot = channel.consume();
        assert!(snapshot.fresh);
        assert_eq!(snapshot.state.master_brightness, 99);
        assert!((snapshot.state.mode as u8) < 4);
    }
}
