mod tests {
    use myrtio_led_engine::color::{ColorRgbw, Hsv, Rgb, hsv_to_rgb};
    use myrtio_led_engine::gamma::{apply_output_levels, gamma8, output_level};

    const fn hsv(hue: u8, sat: u8, val: u8) -> Hsv {
        Hsv { hue, sat, val }
    }

    #[test]
    fn test_hsv_red() {
        assert_eq!(hsv_to_rgb(hsv(0, 255, 255)), Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_hsv_blue_has_smallest_red() {
        let color = hsv_to_rgb(hsv(160, 255, 255));
        assert_eq!(color, Rgb { r: 0, g: 69, b: 255 });
        assert!(color.r < color.g && color.r < color.b);
    }

    #[test]
    fn test_hsv_green_sector() {
        let color = hsv_to_rgb(hsv(85, 255, 255));
        assert_eq!(color, Rgb { r: 3, g: 255, b: 0 });
    }

    #[test]
    fn test_hsv_zero_saturation_is_gray() {
        assert_eq!(hsv_to_rgb(hsv(123, 0, 77)), Rgb { r: 77, g: 77, b: 77 });
    }

    #[test]
    fn test_from_hsv_keeps_white() {
        let color = ColorRgbw::from_hsv(hsv(0, 255, 255), 77);
        assert_eq!(color, ColorRgbw::new(255, 0, 0, 77));
    }

    #[test]
    fn test_scale_and_fade() {
        let white = ColorRgbw::new(255, 255, 255, 255);
        assert_eq!(white.scale(255), white);
        assert_eq!(white.scale(0), ColorRgbw::BLACK);
        assert_eq!(white.fade(20), ColorRgbw::new(235, 235, 235, 235));
        assert_eq!(white.fade(10), ColorRgbw::new(245, 245, 245, 245));
    }

    #[test]
    fn test_lerp() {
        let a = ColorRgbw::new(0, 255, 0, 100);
        let b = ColorRgbw::new(255, 0, 0, 100);
        assert_eq!(a.lerp(b, 0), a);
        assert_eq!(a.lerp(b, 128), ColorRgbw::new(127, 127, 0, 100));
    }

    #[test]
    fn test_rgb_conversion_drops_white() {
        let color = ColorRgbw::new(1, 2, 3, 4);
        assert_eq!(Rgb::from(color), Rgb { r: 1, g: 2, b: 3 });
        assert_eq!(ColorRgbw::from(Rgb { r: 1, g: 2, b: 3 }), ColorRgbw::new(1, 2, 3, 0));
    }

    #[test]
    fn test_gamma8() {
        assert_eq!(gamma8(0), 0);
        assert_eq!(gamma8(128), 64);
        assert_eq!(gamma8(255), 255);
    }

    #[test]
    fn test_output_level() {
        let color = ColorRgbw::new(255, 128, 0, 255);
        assert_eq!(output_level(color, 0), ColorRgbw::BLACK);
        assert_eq!(output_level(color, 255), ColorRgbw::new(255, 64, 0, 255));
        assert_eq!(output_level(color, 128), ColorRgbw::new(128, 32, 0, 128));
    }

    #[test]
    fn test_apply_output_levels() {
        let frame = [ColorRgbw::new(255, 0, 0, 0); 3];
        let mut out = [ColorRgbw::BLACK; 2];
        apply_output_levels(&frame, 255, &mut out);
        assert_eq!(out, [ColorRgbw::new(255, 0, 0, 0); 2]);
    }
}
