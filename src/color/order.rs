use crate::color::Rgb;

/// Channel order expected by a physical output device
///
/// Colors are stored and combined in R, G, B order everywhere in the crate.
/// The only place they are permuted is [`ChannelOrder::encode`], right before
/// the pixels leave for the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    /// Device takes red, green, blue (the on-board indicator)
    #[default]
    Rgb,
    /// Device takes green, red, blue (WS2811/WS2812 strings)
    Grb,
}

impl ChannelOrder {
    /// Reorder a canonical color into the device's channel order
    pub const fn encode(self, color: Rgb) -> Rgb {
        match self {
            Self::Rgb => color,
            Self::Grb => Rgb {
                r: color.g,
                g: color.r,
                b: color.b,
            },
        }
    }
}
