mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use sparkle_composer::canvas::{BLACK_CANVAS, RED_BLUE_PURPLE_PINK};
    use sparkle_composer::color::{Rgb, WHITE, wheel};
    use sparkle_composer::config::{PIXEL_COUNT, SPARKLE_LAYER_LEN};
    use sparkle_composer::math8::scale_from_fraction;
    use sparkle_composer::{
        Brightness, LoopConfig, Mode, OutputDriver, RenderLoop, SwitchVector,
    };

    const T: bool = true;
    const F: bool = false;

    /// Sink that remembers the last brightness and buffer it received
    #[derive(Default)]
    struct RecordingOutput {
        brightness: Option<u8>,
        pixels: Vec<Rgb>,
        writes: usize,
    }

    impl OutputDriver for RecordingOutput {
        fn set_brightness(&mut self, brightness: u8) {
            self.brightness = Some(brightness);
        }

        fn write(&mut self, colors: &[Rgb]) {
            self.pixels = colors.to_vec();
            self.writes += 1;
        }
    }

    type TestLoop = RenderLoop<SwitchVector, RecordingOutput, RecordingOutput, SmallRng>;

    fn render_loop(states: [bool; 4], config: LoopConfig) -> TestLoop {
        RenderLoop::new(
            SwitchVector::new(states),
            RecordingOutput::default(),
            [
                RecordingOutput::default(),
                RecordingOutput::default(),
                RecordingOutput::default(),
            ],
            SmallRng::seed_from_u64(0xC0FFEE),
            config,
        )
    }

    #[test]
    fn test_palette_mode_low_brightness_no_sparkle() {
        let mut render = render_loop([T, F, F, F], LoopConfig::DEFAULT);
        let frame = render.render_frame().clone();

        assert_eq!(frame.mode, Mode::RedBluePurplePink);
        assert_eq!(frame.brightness, Brightness::Low);
        assert_eq!(frame.indicator, Rgb { r: 255, g: 0, b: 0 });

        let canvas = render.canvases().get(Mode::RedBluePurplePink).unwrap();
        for string in &frame.strings {
            assert_eq!(string, canvas);
            assert!(string.iter().all(|led| RED_BLUE_PURPLE_PINK.contains(led)));
        }

        assert_eq!(render.indicator().pixels, vec![Rgb { r: 255, g: 0, b: 0 }]);
        assert_eq!(render.indicator().brightness, None);
        for (sink, string) in render.strings().iter().zip(frame.strings.iter()) {
            assert_eq!(sink.brightness, Some(scale_from_fraction(0.03)));
            assert_eq!(sink.pixels.as_slice(), string.as_slice());
        }
    }

    #[test]
    fn test_all_switches_on_cycles_rainbow() {
        let mut render = render_loop([T, T, T, T], LoopConfig::DEFAULT);
        let frame = render.render_frame().clone();

        assert_eq!(frame.mode, Mode::RainbowCycle);
        assert_eq!(frame.brightness, Brightness::High);
        assert_eq!(frame.strings[0][0], wheel(0));
        for string in &frame.strings {
            for (i, led) in string.iter().enumerate() {
                assert_eq!(*led, wheel(i32::try_from(i).unwrap()));
            }
        }
        for sink in render.strings() {
            assert_eq!(sink.brightness, Some(255));
        }

        render.advance();
        let frame = render.render_frame();
        let step = i32::try_from(LoopConfig::DEFAULT.rainbow_compression).unwrap();
        assert_eq!(frame.strings[0][0], wheel(step));
    }

    #[test]
    fn test_sparkles_overwrite_canvas_with_white() {
        let mut render = render_loop([F, T, T, F], LoopConfig::DEFAULT);
        let sparkles = render.sparkles().clone();
        let frame = render.render_frame().clone();
        let canvas = *render.canvases().get(Mode::Frozen).unwrap();

        for (index, string) in frame.strings.iter().enumerate() {
            let lit: Vec<usize> = sparkles.for_string(index).collect();
            for pixel in 0..PIXEL_COUNT {
                let expected = if lit.contains(&pixel) {
                    WHITE
                } else {
                    canvas[pixel]
                };
                assert_eq!(string[pixel], expected, "string {index} pixel {pixel}");
            }
        }
        // the cached canvas itself is untouched
        assert!(!render.canvases().get(Mode::Frozen).unwrap().contains(&WHITE));
    }

    #[test]
    fn test_both_pattern_switches_suppress_sparkles() {
        let mut render = render_loop([T, T, T, F], LoopConfig::DEFAULT);
        let frame = render.render_frame();
        for string in &frame.strings {
            for (i, led) in string.iter().enumerate() {
                assert_eq!(*led, wheel(i32::try_from(i).unwrap()));
            }
        }
    }

    #[test]
    fn test_idle_timeout_blacks_out_until_switch_change() {
        let config = LoopConfig::DEFAULT.with_idle_timeout_ticks(3);
        let mut render = render_loop([T, F, T, T], config);

        // idle counter runs 0, 1, 2, 3 -> still lit
        for expected_idle in 0..=3 {
            let frame = render.step().clone();
            assert_eq!(render.state().idle_ticks(), expected_idle);
            assert!(!render.state().is_blackout());
            assert_ne!(frame.strings[0], BLACK_CANVAS);
            assert!(frame.strings[0].contains(&WHITE));
        }

        // past the timeout every frame is black, sparkles included
        for _ in 0..10 {
            let frame = render.step().clone();
            assert!(render.state().is_blackout());
            assert_eq!(frame.mode, Mode::RedBluePurplePink);
            for string in &frame.strings {
                assert_eq!(*string, BLACK_CANVAS);
            }
            // the indicator is not part of the blackout
            assert_eq!(frame.indicator, Rgb { r: 255, g: 0, b: 0 });
        }

        let toggled = render.input().toggled(3);
        *render.input_mut() = toggled;
        let frame = render.step().clone();
        assert_eq!(render.state().idle_ticks(), 0);
        assert!(!render.state().is_blackout());
        assert_ne!(frame.strings[0], BLACK_CANVAS);
    }

    #[test]
    fn test_default_idle_timeout_is_thirty_minutes() {
        assert_eq!(LoopConfig::DEFAULT.idle_timeout_ticks, 18_000);
        assert_eq!(LoopConfig::DEFAULT.frame_period.as_millis(), 100);
    }

    #[test]
    fn test_step_advances_tick_and_sparkles() {
        let mut render = render_loop([F, F, F, F], LoopConfig::DEFAULT);
        let before: Vec<usize> = render.sparkles().iter().collect();
        render.step();
        let after: Vec<usize> = render.sparkles().iter().collect();

        assert_eq!(render.state().tick(), 1);
        assert_eq!(after.len(), SPARKLE_LAYER_LEN);
        assert_eq!(&after[..SPARKLE_LAYER_LEN - 1], &before[1..]);

        for _ in 0..255 {
            render.step();
        }
        assert_eq!(render.state().tick(), 0);
    }

    #[test]
    fn test_every_sink_is_written_each_frame() {
        let mut render = render_loop([F, F, F, F], LoopConfig::DEFAULT);
        for _ in 0..5 {
            render.step();
        }
        assert_eq!(render.indicator().writes, 5);
        assert_eq!(render.indicator().pixels, vec![Rgb { r: 0, g: 0, b: 255 }]);
        for sink in render.strings() {
            assert_eq!(sink.writes, 5);
            assert_eq!(sink.pixels.len(), PIXEL_COUNT);
            assert!(sink.pixels.iter().all(|led| *led == Rgb::default()));
        }
    }
}
