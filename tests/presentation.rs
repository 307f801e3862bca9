mod tests {
    use std::sync::Barrier;
    use std::thread;
    use std::time::{Duration as StdDuration, Instant as StdInstant};

    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use myrtio_led_engine::{
        AnimationMode, AnimationState, CapacityError, ColorRgbw, EngineShared, Instant,
        PresentationBuffer, Rgb, SpinRawMutex,
    };

    #[test]
    fn test_allocate_and_present() {
        let buffer = PresentationBuffer::<SpinRawMutex, 8>::new();
        assert!(buffer.is_empty());
        assert_eq!(
            buffer.allocate(9),
            Err(CapacityError {
                requested: 9,
                capacity: 8,
            })
        );

        buffer.allocate(4).unwrap();
        assert_eq!(buffer.snapshot().as_slice(), &[ColorRgbw::BLACK; 4]);

        // longer frames are cut to the allocated length
        buffer.present(&[ColorRgbw::new(1, 2, 3, 4); 6], 17);
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.fps(), 17);
        assert_eq!(buffer.preview_pixels()[3], Rgb { r: 1, g: 2, b: 3 });

        buffer.release();
        assert!(buffer.is_empty());
        assert_eq!(buffer.fps(), 0);
    }

    #[test]
    fn test_read_borrows_presented_frame() {
        let buffer = PresentationBuffer::<CriticalSectionRawMutex, 8>::new();
        buffer.allocate(3).unwrap();
        buffer.present(&[ColorRgbw::new(9, 0, 0, 1); 3], 5);

        let (white, fps) = buffer.read(|pixels, fps| (pixels.iter().map(|p| u32::from(p.w)).sum::<u32>(), fps));
        assert_eq!(white, 3);
        assert_eq!(fps, 5);
    }

    #[test]
    fn test_publish_does_not_wait_for_preview_reader() {
        let shared = EngineShared::<16>::new();
        shared.frames().allocate(16).unwrap();
        let reading = Barrier::new(2);

        thread::scope(|scope| {
            scope.spawn(|| {
                shared.frames().read(|_, _| {
                    reading.wait();
                    thread::sleep(StdDuration::from_millis(300));
                });
            });

            reading.wait();
            let started = StdInstant::now();
            let state = AnimationState::new().with_mode(AnimationMode::Pulse);
            shared.publisher().publish(Instant::from_millis(1), state);
            let snapshot = shared.states().consume();
            let waited = started.elapsed();

            assert!(snapshot.fresh);
            assert_eq!(snapshot.state, state);
            assert!(waited < StdDuration::from_millis(150), "publish waited {waited:?}");
        });
    }
}
