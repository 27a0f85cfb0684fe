use image::Rgb;

/// Outline colors available for face boxes.
///
/// RGB values follow the CSS named colors of the same name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoxColor {
    Red,
    Green,
    Blue,
    Orange,
    Purple,
    Cyan,
    Yellow,
    Pink,
    Lime,
    Brown,
}

/// Color-coded mode cycles through this list by face index within an image.
pub const PALETTE: [BoxColor; 10] = [
    BoxColor::Red,
    BoxColor::Green,
    BoxColor::Blue,
    BoxColor::Orange,
    BoxColor::Purple,
    BoxColor::Cyan,
    BoxColor::Yellow,
    BoxColor::Pink,
    BoxColor::Lime,
    BoxColor::Brown,
];

/// Single color used for every box when color coding is off.
pub const DEFAULT_BOX_COLOR: BoxColor = BoxColor::Red;

impl BoxColor {
    pub const fn rgb(self) -> Rgb<u8> {
        match self {
            BoxColor::Red => Rgb([255, 0, 0]),
            BoxColor::Green => Rgb([0, 128, 0]),
            BoxColor::Blue => Rgb([0, 0, 255]),
            BoxColor::Orange => Rgb([255, 165, 0]),
            BoxColor::Purple => Rgb([128, 0, 128]),
            BoxColor::Cyan => Rgb([0, 255, 255]),
            BoxColor::Yellow => Rgb([255, 255, 0]),
            BoxColor::Pink => Rgb([255, 192, 203]),
            BoxColor::Lime => Rgb([0, 255, 0]),
            BoxColor::Brown => Rgb([165, 42, 42]),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BoxColor::Red => "red",
            BoxColor::Green => "green",
            BoxColor::Blue => "blue",
            BoxColor::Orange => "orange",
            BoxColor::Purple => "purple",
            BoxColor::Cyan => "cyan",
            BoxColor::Yellow => "yellow",
            BoxColor::Pink => "pink",
            BoxColor::Lime => "lime",
            BoxColor::Brown => "brown",
        }
    }

    /// Color for the `index`-th face of an image.
    pub fn for_face(index: usize, color_coded: bool) -> BoxColor {
        if color_coded {
            PALETTE[index % PALETTE.len()]
        } else {
            DEFAULT_BOX_COLOR
        }
    }
}

impl std::fmt::Display for BoxColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
