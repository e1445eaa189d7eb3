//! Lamp board styling.

use egui::Color32;

use crate::export::raster;

/// Visual styling for the on-screen board. Sizes default to the same
/// geometry as the PNG export so both look alike.
#[derive(Clone, Debug)]
pub struct LampStyle {
    pub lamp_radius: f32,
    pub lamp_pitch: f32,
    pub on_color: Color32,
    pub off_color: Color32,
    pub hover_color: Color32,
    pub focus_color: Color32,
}

impl Default for LampStyle {
    fn default() -> Self {
        let [r, g, b, _] = raster::ON_COLOR.0;
        let [or, og, ob, _] = raster::OFF_COLOR.0;
        Self {
            lamp_radius: raster::LAMP_RADIUS as f32,
            lamp_pitch: raster::LAMP_PITCH as f32,
            on_color: Color32::from_rgb(r, g, b),
            off_color: Color32::from_rgb(or, og, ob),
            hover_color: Color32::from_gray(140),
            focus_color: Color32::from_rgb(100, 180, 255),
        }
    }
}
