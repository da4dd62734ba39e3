//! `embedded-graphics` adapter
//!
//! Streams pixels straight to the controller; there is no framebuffer.
//! Solid and contiguous fills use one address window for the whole area.

use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use platform::{DisplayError, DisplayInterface};

use crate::Driver;

const STREAM_CHUNK: usize = 32;

/// Inclusive controller window for `rect`, or `None` when it is empty or
/// has a negative corner.
fn window(rect: &Rectangle) -> Option<(u16, u16, u16, u16)> {
    let bottom_right = rect.bottom_right()?;
    Some((
        u16::try_from(rect.top_left.x).ok()?,
        u16::try_from(rect.top_left.y).ok()?,
        u16::try_from(bottom_right.x).ok()?,
        u16::try_from(bottom_right.y).ok()?,
    ))
}

impl<DI, RST, DELAY> OriginDimensions for Driver<DI, RST, DELAY>
where
    DI: DisplayInterface,
    RST: OutputPin,
    DELAY: DelayNs,
{
    fn size(&self) -> Size {
        let (width, height) = Driver::size(self);
        Size::new(u32::from(width), u32::from(height))
    }
}

impl<DI, RST, DELAY> DrawTarget for Driver<DI, RST, DELAY>
where
    DI: DisplayInterface,
    RST: OutputPin,
    DELAY: DelayNs,
{
    type Color = Rgb565;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if !bounds.contains(point) {
                continue;
            }
            let Some((x, y, _, _)) = window(&Rectangle::new(point, Size::new(1, 1))) else {
                continue;
            };
            self.set_window(x, y, x, y)?;
            self.write_pixels(&[color.into_storage()])?;
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let bounds = self.bounding_box();
        if bounds.intersection(area) != *area {
            // Partially visible: clip pixel by pixel.
            return self.draw_iter(
                area.points()
                    .zip(colors)
                    .map(|(point, color)| Pixel(point, color)),
            );
        }
        let Some((x0, y0, x1, y1)) = window(area) else {
            return Ok(());
        };
        self.set_window(x0, y0, x1, y1)?;

        let count = area.size.width.saturating_mul(area.size.height);
        let mut buffer = [0u16; STREAM_CHUNK];
        let mut len = 0;
        for color in colors
            .into_iter()
            .take(usize::try_from(count).unwrap_or(usize::MAX))
        {
            if let Some(slot) = buffer.get_mut(len) {
                *slot = color.into_storage();
                len += 1;
            }
            if len == STREAM_CHUNK {
                self.write_pixels(&buffer)?;
                len = 0;
            }
        }
        self.write_pixels(buffer.get(..len).unwrap_or(&[]))
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped = self.bounding_box().intersection(area);
        let Some((x0, y0, x1, y1)) = window(&clipped) else {
            return Ok(());
        };
        self.set_window(x0, y0, x1, y1)?;
        self.fill_pixels(
            color.into_storage(),
            clipped.size.width.saturating_mul(clipped.size.height),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{create_driver, Dcs};
    use embedded_graphics::primitives::PrimitiveStyle;
    use platform::mocks::{BusEvent, MockBus, MockDelay, MockResetPin};
    use tft_specs::{ChipModel, Configuration};

    fn driver(model: ChipModel) -> (Driver<MockBus, MockResetPin, MockDelay>, MockBus) {
        let bus = MockBus::new();
        let config = Configuration::for_chip(model).with_spi_pins(11, 13);
        let driver =
            create_driver(config, bus.clone(), Some(bus.reset_pin()), bus.delay()).unwrap();
        (driver, bus)
    }

    #[test]
    fn test_bounding_box_follows_rotation() {
        let (mut driver, _bus) = driver(ChipModel::Ili9341);
        assert_eq!(driver.bounding_box().size, Size::new(240, 320));
        driver.set_rotation(1).unwrap();
        assert_eq!(driver.bounding_box().size, Size::new(320, 240));
    }

    #[test]
    fn test_fill_solid_uses_one_window() {
        let (mut driver, bus) = driver(ChipModel::Ili9341);
        Rectangle::new(Point::new(10, 20), Size::new(4, 2))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
            .draw(&mut driver)
            .unwrap();

        assert_eq!(bus.commands(), vec![Dcs::CASET, Dcs::RASET, Dcs::RAMWR]);
        let words: Vec<_> = bus
            .events()
            .into_iter()
            .filter(|e| matches!(e, BusEvent::Data16(_)))
            .collect();
        assert_eq!(words, vec![BusEvent::Data16(0xF800); 8]);
    }

    #[test]
    fn test_offscreen_pixels_are_dropped() {
        let (mut driver, bus) = driver(ChipModel::Ili9341);
        driver
            .draw_iter([
                Pixel(Point::new(-1, 0), Rgb565::BLUE),
                Pixel(Point::new(0, 400), Rgb565::BLUE),
            ])
            .unwrap();
        assert!(bus.events().is_empty());
    }
}
