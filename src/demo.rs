//! Demo screens
//!
//! Everything draws through [`DrawTarget`], so the screens run on the panel
//! driver as well as on any other 320x240 target. The layout:
//!
//! ```text
//!  +--------------------------------------+
//!  |          LCD Demonstration           |
//!  |  +-------+     +----+     +-------+  |
//!  |  |  RED  |     |grey|     | GREEN |  |
//!  |  +-------+     |ramp|     +-------+  |
//!  |  +-------+     |    |     +-------+  |
//!  |  | MULTI |     |    |     | BLUE  |  |
//!  |  +-------+     +----+     +-------+  |
//!  |      ( 00:01:23.456 )                |
//!  +--------------------------------------+
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::{iso_8859_15::FONT_10X20, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    ContainsPoint, PointsIter, PrimitiveStyle, Rectangle, RoundedRectangle,
};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};

use crate::runtime::clock::{Clock, Uptime};
use crate::runtime::console::{Console, SerialPort};
use crate::ssd2119::color::{pixel_rgb, rgb565, Color};
use crate::ssd2119::{HEIGHT, WIDTH};

/// Height of one bar of the test card
const BAR_HEIGHT: u32 = 32;
/// Columns sharing one shade in the test card
const BAND_WIDTH: u32 = 10;

const BOX_SIZE: Size = Size::new(100, 60);
const BOX_RADIUS: Size = Size::new(10, 10);
/// Top left corners, in the order the fill kinds rotate through them
const BOX_ORIGINS: [Point; 4] = [
    Point::new(20, 35),
    Point::new(200, 35),
    Point::new(200, 110),
    Point::new(20, 110),
];

const GREY_RAMP: Rectangle = Rectangle::new(Point::new(135, 35), Size::new(50, 135));

const CLOCK_BANNER: Rectangle = Rectangle::new(Point::new(40, 190), Size::new(240, 32));
const CLOCK_RADIUS: Size = Size::new(15, 15);

/// How a labelled box is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxFill {
    Red,
    Green,
    Blue,
    /// Red/green across, blue down
    Multi,
}

impl BoxFill {
    /// Fill kind for a rotating index, wraps every four
    pub fn from_index(index: u32) -> Self {
        match index & 0x3 {
            0 => BoxFill::Red,
            1 => BoxFill::Green,
            2 => BoxFill::Blue,
            _ => BoxFill::Multi,
        }
    }

    fn label(self) -> &'static str {
        match self {
            BoxFill::Red => "RED",
            BoxFill::Green => "GREEN",
            BoxFill::Blue => "BLUE",
            BoxFill::Multi => "MULTI",
        }
    }

    fn base_color(self) -> u16 {
        match self {
            BoxFill::Red => Color::RED,
            BoxFill::Green => Color::GREEN,
            BoxFill::Blue => Color::BLUE,
            BoxFill::Multi => Color::WHITE,
        }
    }
}

fn centered() -> TextStyle {
    TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build()
}

fn fill<D>(display: &mut D, x: u32, y: u32, width: u32, height: u32, color: u16) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let area = Rectangle::new(Point::new(x as i32, y as i32), Size::new(width, height));
    display.fill_solid(&area, rgb565(color))
}

/// Greeting shown right after init, black on whatever is there
pub fn splash<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(&FONT_10X20, Rgb565::BLACK);
    Text::with_baseline(
        "LCD Test demo\nTesting lower case.\n switching in 5 seconds",
        Point::new(10, 10),
        style,
        Baseline::Top,
    )
    .draw(display)?;
    Ok(())
}

/// Packed color from 5 bit steps per channel
fn ramp(r: u32, g: u32, b: u32) -> u16 {
    pixel_rgb((r << 3) as u8, (g << 3) as u8, (b << 3) as u8)
}

/// Test card: grey ramp, red, green and blue bars, three color ramps and a white border
pub fn rgb_test<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let bars: [fn(u32) -> u16; 7] = [
        |band| ramp(band, band, band),
        |_| Color::RED,
        |_| Color::GREEN,
        |_| Color::BLUE,
        |band| ramp(band, (band + 5) % 31, (band + 10) % 31),
        |band| ramp((band + 2) % 31, (band + 8) % 31, (band + 16) % 31),
        |band| ramp((band + 3) % 31, (band + 7) % 31, (band + 5) % 31),
    ];

    for (row, bar) in bars.iter().enumerate() {
        let y = row as u32 * BAR_HEIGHT;
        for band in 0..u32::from(WIDTH) / BAND_WIDTH {
            fill(display, band * BAND_WIDTH, y, BAND_WIDTH, BAR_HEIGHT, bar(band))?;
        }
    }

    let (width, height) = (u32::from(WIDTH), u32::from(HEIGHT));
    fill(display, 0, 0, width, 1, Color::WHITE)?;
    fill(display, 0, height - 1, width, 1, Color::WHITE)?;
    fill(display, 0, 0, 1, height, Color::WHITE)?;
    fill(display, width - 1, 0, 1, height, Color::WHITE)?;
    Ok(())
}

/// Centered white title on the top line
pub fn title<D>(display: &mut D, text: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(&FONT_10X20, Rgb565::WHITE);
    let top_center = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build();
    Text::with_text_style(text, Point::new(i32::from(WIDTH) / 2, 0), style, top_center)
        .draw(display)?;
    Ok(())
}

/// Multi gradient: red rises over the left half, green falls over the right,
/// blue rises over the top half
fn gradient(dx: u32, dy: u32) -> u16 {
    let r = if dx < 50 { 255 * dx / 50 } else { 255 };
    let g = if dx > 50 { 255 * (100 - dx) / 50 } else { 255 };
    let b = if dy < 30 { 255 * dy / 30 } else { 255 };
    pixel_rgb(r as u8, g as u8, b as u8)
}

/// One 100x60 rounded box with its label in the middle
pub fn fill_box<D>(display: &mut D, origin: Point, kind: BoxFill) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let outline = RoundedRectangle::with_equal_corners(Rectangle::new(origin, BOX_SIZE), BOX_RADIUS);

    outline
        .into_styled(PrimitiveStyle::with_fill(rgb565(kind.base_color())))
        .draw(display)?;

    let label_color = if kind == BoxFill::Multi {
        let pixels = outline
            .rectangle
            .points()
            .filter(|point| outline.contains(*point))
            .map(|point| {
                let offset = point - origin;
                Pixel(point, rgb565(gradient(offset.x as u32, offset.y as u32)))
            });
        display.draw_iter(pixels)?;
        Rgb565::BLACK
    } else {
        Rgb565::WHITE
    };

    outline
        .into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, 1))
        .draw(display)?;

    let style = MonoTextStyle::new(&FONT_10X20, label_color);
    Text::with_text_style(kind.label(), outline.rectangle.center(), style, centered())
        .draw(display)?;
    Ok(())
}

/// The four boxes for round `round`, each round shifts the fills one box on
pub fn draw_boxes<D>(display: &mut D, round: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for (slot, origin) in BOX_ORIGINS.iter().enumerate() {
        let kind = BoxFill::from_index(round.wrapping_add(slot as u32));
        fill_box(display, *origin, kind)?;
    }
    Ok(())
}

/// Vertical grey ramp from black at the top to near white at the bottom
pub fn show_grey<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.fill_solid(&GREY_RAMP, Rgb565::BLACK)?;

    let height = GREY_RAMP.size.height;
    for row in 0..height {
        let level = (row * 255 / height) as u8;
        let line = Rectangle::new(
            GREY_RAMP.top_left + Point::new(0, row as i32),
            Size::new(GREY_RAMP.size.width, 1),
        );
        display.fill_solid(&line, rgb565(pixel_rgb(level, level, level)))?;
    }

    GREY_RAMP
        .into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, 1))
        .draw(display)?;
    Ok(())
}

/// Redraw the uptime banner
///
/// Returns true while `uptime` sits on a ten-second mark, which the demo
/// loop takes as its cue to move on.
pub fn show_time<D>(display: &mut D, uptime: Uptime) -> Result<bool, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let banner = RoundedRectangle::with_equal_corners(CLOCK_BANNER, CLOCK_RADIUS);
    banner
        .into_styled(PrimitiveStyle::with_fill(Rgb565::BLUE))
        .draw(display)?;
    banner
        .into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, 1))
        .draw(display)?;

    let mut text: heapless::String<16> = heapless::String::new();
    // HH:MM:SS.mmm always fits, a blank banner beats a clipped one
    if write!(text, "{}", uptime).is_err() {
        text.clear();
    }

    let style = MonoTextStyle::new(&FONT_10X20, Rgb565::YELLOW);
    Text::with_text_style(&text, CLOCK_BANNER.center(), style, centered()).draw(display)?;

    Ok(uptime.on_ten_second_mark())
}

/// Banner refresh while waiting for input
const CLOCK_REFRESH_MS: u32 = 100;

/// One round of the interactive demo
///
/// Draws the boxes for `round` and the grey ramp, then keeps the uptime banner
/// running until a space arrives on the console or a ten-second mark passes.
pub fn run_round<D, P>(
    display: &mut D,
    console: &mut Console<'_, P>,
    clock: &Clock,
    round: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    P: SerialPort,
{
    draw_boxes(display, round)?;
    show_grey(display)?;
    console.write_string("Type space to continue ...\n");

    loop {
        let mark = show_time(display, clock.uptime())?;
        if mark || console.read_char(false) == Some(b' ') {
            return Ok(());
        }
        clock.delay(CLOCK_REFRESH_MS);
    }
}
