mod tests {
    use sparkle_composer::color::{
        BLACK, ChannelOrder, HexColorError, Rgb, WHITE, hex_to_color, wheel,
    };
    use sparkle_composer::hex_color;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_wheel_out_of_range_is_black() {
        assert_eq!(wheel(-1), BLACK);
        assert_eq!(wheel(-300), BLACK);
        assert_eq!(wheel(256), BLACK);
        assert_eq!(wheel(i32::MAX), BLACK);
    }

    #[test]
    fn test_wheel_segment_ends() {
        assert_eq!(wheel(0), GREEN);
        assert_eq!(wheel(84), Rgb { r: 252, g: 3, b: 0 });
        assert_eq!(wheel(85), RED);
        assert_eq!(wheel(169), Rgb { r: 3, g: 0, b: 252 });
        assert_eq!(wheel(170), BLUE);
        assert_eq!(wheel(255), GREEN);
    }

    #[test]
    fn test_wheel_first_segment_ramp() {
        for position in 0..85 {
            let color = wheel(position);
            assert_eq!(color.b, 0, "position {position}");
            assert_eq!(u16::from(color.r) + u16::from(color.g), 255);
            assert_eq!(i32::from(color.r), position * 3);
        }
    }

    #[test]
    fn test_wheel_keeps_one_channel_dark() {
        for position in 0..=255 {
            let color = wheel(position);
            let dark = [color.r, color.g, color.b]
                .iter()
                .filter(|&&channel| channel == 0)
                .count();
            assert!(dark >= 1, "position {position} gave {color:?}");
        }
    }

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#ff0000"), Ok(RED));
        assert_eq!(hex_to_color("ff028d"), Ok(Rgb { r: 255, g: 2, b: 141 }));
        assert_eq!(hex_to_color("#0343df"), Ok(Rgb { r: 3, g: 67, b: 223 }));
        assert_eq!(hex_to_color("#D6FFFA"), Ok(Rgb { r: 214, g: 255, b: 250 }));
        assert_eq!(hex_to_color("000000"), Ok(BLACK));
        assert_eq!(hex_to_color("#FfFfFf"), Ok(WHITE));
    }

    #[test]
    fn test_hex_to_color_rejects_malformed() {
        for input in ["", "#", "#fff", "ff00000", "#gg0000", "##ff0000", "#ff 000", "+ff0000"] {
            assert_eq!(
                hex_to_color(input),
                Err(HexColorError::InvalidFormat),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_hex_color_macro() {
        const PURPLE: Rgb = hex_color!("#35063e");
        assert_eq!(PURPLE, Rgb { r: 0x35, g: 0x06, b: 0x3e });
    }

    #[test]
    fn test_hex_color_error_display() {
        assert_eq!(
            HexColorError::InvalidFormat.to_string(),
            "expected six hex digits"
        );
    }

    #[test]
    fn test_channel_order_encode() {
        let color = Rgb { r: 1, g: 2, b: 3 };
        assert_eq!(ChannelOrder::Rgb.encode(color), color);
        assert_eq!(ChannelOrder::Grb.encode(color), Rgb { r: 2, g: 1, b: 3 });
        assert_eq!(ChannelOrder::Grb.encode(ChannelOrder::Grb.encode(color)), color);
    }
}
