mod tests {
    use myrtio_led_engine::math8::{
        beatsin8, lerp8, map_range, sawtooth8, scale8, sin8, square8, triangle8,
    };

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale8_bounds_are_identity_and_zero() {
        for x in 0..=255u8 {
            assert_eq!(scale8(x, 255), x);
            assert_eq!(scale8(x, 0), 0);
        }
    }

    #[test]
    fn test_lerp8() {
        assert_eq!(lerp8(0, 255, 0), 0);
        assert_eq!(lerp8(0, 255, 128), 127);
        assert_eq!(lerp8(0, 255, 255), 254);
        assert_eq!(lerp8(255, 0, 128), 127);
        assert_eq!(lerp8(10, 10, 200), 10);
    }

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(128, 0, 255, 1, 2), 1);
        assert_eq!(map_range(255, 0, 255, 1, 2), 2);
        assert_eq!(map_range(0, 0, 255, 10, 60), 10);
        assert_eq!(map_range(255, 0, 255, 10, 60), 60);
    }

    #[test]
    fn test_map_range_descending_output() {
        assert_eq!(map_range(1, 1, 255, 500, 20), 500);
        assert_eq!(map_range(255, 1, 255, 500, 20), 20);
        assert_eq!(map_range(128, 1, 255, 500, 20), 260);
    }

    #[test]
    fn test_map_range_clamps_and_handles_empty_input() {
        assert_eq!(map_range(300, 0, 255, 0, 10), 10);
        assert_eq!(map_range(0, 1, 255, 500, 20), 500);
        assert_eq!(map_range(5, 5, 5, 7, 9), 7);
    }

    #[test]
    fn test_sin8() {
        assert_eq!(sin8(0), 128);
        assert!(sin8(64) >= 254);
        assert!(sin8(192) <= 1);
    }

    #[test]
    fn test_beatsin8() {
        assert_eq!(beatsin8(0, 5, 200, 1234), 5);
        assert_eq!(beatsin8(60, 200, 100, 1234), 200);
        assert_eq!(beatsin8(60, 0, 255, 0), 128);
        // a quarter beat at 60bpm
        assert!(beatsin8(60, 0, 255, 250) >= 250);
        assert!(beatsin8(60, 0, 255, 750) <= 2);
    }

    #[test]
    fn test_waves() {
        assert_eq!(triangle8(0), 0);
        assert_eq!(triangle8(64), 128);
        assert_eq!(triangle8(127), 254);
        assert_eq!(triangle8(128), 255);
        assert_eq!(triangle8(255), 1);

        assert_eq!(square8(0), 255);
        assert_eq!(square8(127), 255);
        assert_eq!(square8(128), 0);

        assert_eq!(sawtooth8(77), 77);
    }
}
