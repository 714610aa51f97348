use super::{App, Config};
use crate::{mesh, NiceInt, UpdatePolicy};
use eframe::egui::{
    pos2, vec2, Button, Checkbox, Mesh, Pos2, Rect, RichText, Sense, Shape, Slider, Stroke, Ui,
};

/// Maps normalized device coordinates onto `rect`, with `y` pointing up.
fn to_screen(rect: Rect, [x, y]: [f32; 2]) -> Pos2 {
    pos2(
        rect.left() + (x + 1.) / 2. * rect.width(),
        rect.bottom() - (y + 1.) / 2. * rect.height(),
    )
}

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button<'_> {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.is_paused = !self.is_paused;
        }

        ui.add_enabled_ui(self.is_paused, |ui| {
            if ui.add(Self::new_button("Next step")).clicked() {
                self.do_one_step = true;
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Update: "));
            let mut policy = self.driver.policy();
            ui.radio_value(
                &mut policy,
                UpdatePolicy::Synchronous,
                Self::new_text("Synchronous"),
            );
            ui.radio_value(
                &mut policy,
                UpdatePolicy::Sequential,
                Self::new_text("Sequential"),
            );
            if policy != self.driver.policy() {
                tracing::info!(?policy, "update policy changed");
                self.driver.set_policy(policy);
            }
        });

        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Reset field")).clicked() {
                self.reset_field();
            }
            ui.add_enabled(
                self.simulation.seed.is_some(),
                Checkbox::new(&mut self.reseed_randomly, Self::new_text("new seed")),
            );
        });

        ui.label(Self::new_text(&format!(
            "Generation: {}",
            NiceInt::from(self.driver.generation())
        )));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            NiceInt::from_usize(self.driver.grid().population())
        )));
        ui.label(Self::new_text(&format!(
            "Last step: {:.3} ms",
            self.last_update_duration * 1e3
        )));
    }

    fn draw_appearance_controls(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max FPS: "));
            ui.add(
                Slider::new(&mut self.max_fps, Config::MIN_FPS..=Config::MAX_FPS)
                    .logarithmic(true),
            );
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Cell color: "));
            ui.color_edit_button_srgba(&mut self.live_color);
        });

        if ui.add(Self::new_button("Reset appearance")).clicked() {
            self.reset_appearance();
        }
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_simulation_controls(ui);
                });
            });

            ui.add_space(Config::GAP_ABOVE_STATS);

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_appearance_controls(ui);
                });
            });
        });
    }

    fn draw_field(&mut self, ui: &mut Ui, cell_px: f32) {
        let (columns, rows) = self.driver.grid().dimensions();
        let size = vec2(cell_px * columns as f32, cell_px * rows as f32);
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        let rect = response.rect;

        painter.rect_filled(rect, 0., Config::FIELD_COLOR);

        let mut cells = Mesh::default();
        for vertex in mesh::live_vertices(self.driver.grid()) {
            cells.colored_vertex(to_screen(rect, vertex), self.live_color);
        }
        for i in (0..cells.vertices.len() as u32).step_by(3) {
            cells.add_triangle(i, i + 1, i + 2);
        }
        painter.add(Shape::mesh(cells));

        // toggling cells by hand while paused
        if self.is_paused && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let column = ((pos.x - rect.left()) / cell_px).floor() as isize;
                let row = ((rect.bottom() - pos.y) / cell_px).floor() as isize;
                // clicks on the margin miss the grid
                let _ = self.driver.toggle(column, row);
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();
        let (columns, rows) = self.driver.grid().dimensions();

        let field_width = (area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN).max(0.);
        let cell_px = (field_width / columns as f32).min(area.y / rows as f32);

        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(Config::FRAME_MARGIN);

            ui.vertical_centered(|ui| {
                self.draw_field(ui, cell_px);
            });
        });
    }
}
