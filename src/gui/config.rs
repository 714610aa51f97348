use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const TITLE: &'static str = "Game of Life";

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 320.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const BACKGROUND_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const FIELD_COLOR: Color32 = Color32::BLACK;
    pub const LIVE_COLOR: Color32 = Color32::WHITE;

    pub const MIN_FPS: f64 = 1.;
    pub const MAX_FPS: f64 = 240.;
    pub const GAP_ABOVE_STATS: f32 = 30.;
}
