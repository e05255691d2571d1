use crate::core::data::pixel_colour::PixelColour;

pub trait ColourMap<T> {
    fn map(&self, value: T) -> PixelColour;

    fn display_name(&self) -> &str;
}
