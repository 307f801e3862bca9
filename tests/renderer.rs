mod tests {
    use myrtio_led_engine::{
        AnimationMode, AnimationState, CapacityError, ColorRgbw, Duration, Instant, MirrorMode,
        Phase, Renderer,
    };

    const RED: ColorRgbw = ColorRgbw::new(255, 0, 0, 0);

    fn state(speed: u8) -> AnimationState {
        let mut state = AnimationState::new()
            .with_mode(AnimationMode::Solid)
            .with_colors(RED, ColorRgbw::BLACK);
        state.animation_speed = speed;
        state
    }

    fn renderer() -> Renderer<16> {
        Renderer::new(4, Duration::from_millis(50), 1).unwrap()
    }

    #[test]
    fn test_capacity() {
        assert_eq!(
            Renderer::<4>::new(5, Duration::from_millis(50), 1).err(),
            Some(CapacityError {
                requested: 5,
                capacity: 4,
            })
        );
        assert_eq!(renderer().frame(), &[ColorRgbw::BLACK; 4]);
    }

    #[test]
    fn test_first_frame_uses_frame_interval() {
        let mut renderer = renderer();
        renderer.render(&state(10), Instant::from_millis(1000));
        assert_eq!(renderer.phase(), Phase::new(500));
    }

    #[test]
    fn test_same_clock_still_advances() {
        let mut renderer = renderer();
        renderer.render(&state(10), Instant::from_millis(1000));
        renderer.render(&state(10), Instant::from_millis(1000));
        assert_eq!(renderer.phase(), Phase::new(510));

        renderer.render(&state(10), Instant::from_millis(1020));
        assert_eq!(renderer.phase(), Phase::new(710));
    }

    #[test]
    fn test_clock_going_backwards_counts_as_one_ms() {
        let mut renderer = renderer();
        renderer.render(&state(10), Instant::from_millis(1000));
        renderer.render(&state(10), Instant::from_millis(900));
        assert_eq!(renderer.phase(), Phase::new(510));
    }

    #[test]
    fn test_render_applies_filters() {
        let mut renderer = renderer();
        let mut state = state(0);
        state.strobe_rate = 1;
        state.mirror = MirrorMode::Full;

        // 200ms into a 500ms strobe period is dark
        assert_eq!(renderer.render(&state, Instant::from_millis(200)), &[ColorRgbw::BLACK; 4]);
        assert_eq!(renderer.render(&state, Instant::from_millis(500)), &[RED; 4]);
    }

    #[test]
    fn test_reset() {
        let mut renderer = renderer();
        renderer.render(&state(10), Instant::from_millis(1000));
        assert_eq!(renderer.frame(), &[RED; 4]);

        renderer.reset();
        assert_eq!(renderer.phase(), Phase::default());
        assert_eq!(renderer.frame(), &[ColorRgbw::BLACK; 4]);

        // timing restarts too: the next frame uses the interval again
        renderer.render(&state(10), Instant::from_millis(5000));
        assert_eq!(renderer.phase(), Phase::new(500));
    }
}
