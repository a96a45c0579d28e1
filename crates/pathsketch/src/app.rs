use eframe::egui;

use crate::command::{Command, CommandError, ConnectionForm, Controller, Outcome};
use crate::config::Config;
use crate::render::{self, CanvasTransform};
use crate::theme::{NodeColor, Theme};

const CONTROLS_WIDTH: f32 = 260.0;
const FIELD_WIDTH: f32 = 72.0;

struct GraphApp {
    controller: Controller,
    theme: Theme,
    form: ConnectionForm,
    /// Message shown in the modal error window until dismissed
    error: Option<String>,
}

impl GraphApp {
    fn new(node_color: NodeColor, theme: Theme) -> Self {
        Self {
            controller: Controller::new(node_color),
            theme,
            form: ConnectionForm::default(),
            error: None,
        }
    }

    fn submit(&mut self, command: Result<Command, CommandError>) {
        let result = command.and_then(|c| self.controller.dispatch(c));
        match result {
            Ok(Outcome::NodePlaced(id)) => tracing::debug!(%id, "placed from canvas click"),
            Ok(_) => {}
            Err(e) => self.error = Some(capitalize(&e.to_string())),
        }
    }

    fn draw_controls(&mut self, ui: &mut egui::Ui) {
        let mut pending: Option<Result<Command, CommandError>> = None;

        ui.add_space(6.0);
        ui.label(egui::RichText::new("Graph controls").strong().size(16.0));
        ui.add_space(8.0);

        egui::Grid::new("connection_form")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Start node:");
                ui.add(egui::TextEdit::singleline(&mut self.form.source).desired_width(FIELD_WIDTH));
                ui.end_row();

                ui.label("End node:");
                ui.add(egui::TextEdit::singleline(&mut self.form.target).desired_width(FIELD_WIDTH));
                ui.end_row();

                ui.label("Weight:");
                ui.add(egui::TextEdit::singleline(&mut self.form.weight).desired_width(FIELD_WIDTH));
                ui.end_row();
            });

        ui.add_space(8.0);
        let button_size = egui::vec2(ui.available_width(), 26.0);
        if ui
            .add_sized(button_size, egui::Button::new("Add connection"))
            .clicked()
        {
            pending = Some(self.form.add_edge_command());
        }
        if ui
            .add_sized(button_size, egui::Button::new("Run Dijkstra"))
            .clicked()
        {
            pending = Some(self.form.find_path_command());
        }

        ui.add_space(12.0);
        ui.label("Node color:");
        let mut color = self.controller.node_color;
        for &choice in NodeColor::all() {
            ui.radio_value(&mut color, choice, choice.display_name());
        }
        if color != self.controller.node_color {
            pending = Some(Ok(Command::SetNodeColor(color)));
        }

        ui.add_space(16.0);
        ui.label(egui::RichText::new("Result:").strong());
        ui.label(self.controller.result_text());

        if let Some(command) = pending {
            self.submit(command);
        }
    }

    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let transform = CanvasTransform::new(render::canvas_rect(response.rect));

        if response.clicked() {
            let position = response
                .interact_pointer_pos()
                .and_then(|pos| transform.to_graph(pos));
            if let Some(position) = position {
                self.submit(Ok(Command::PlaceNode(position)));
            }
        }

        render::draw_graph(
            &painter,
            &transform,
            &self.controller.graph,
            self.controller.highlighted.as_ref(),
            self.controller.node_color,
            &self.theme,
        );

        if self.controller.graph.is_empty() {
            painter.text(
                transform.rect.center(),
                egui::Align2::CENTER_CENTER,
                "Click to place a node",
                egui::FontId::proportional(18.0),
                Theme::with_opacity(self.theme.node_label, 0.4),
            );
        }
    }

    /// Show the error window. Enter/Escape only dismiss an error that was already
    /// open when the frame started, so the key press that raised it cannot also hide it.
    fn draw_error(&mut self, ctx: &egui::Context, was_open: bool) {
        let Some(message) = self.error.clone() else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        let key_dismiss = was_open
            && ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape));
        if dismissed || key_dismiss {
            self.error = None;
        }
    }
}

impl eframe::App for GraphApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let modal_open = self.error.is_some();

        egui::SidePanel::right("controls")
            .resizable(false)
            .exact_width(CONTROLS_WIDTH)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!modal_open, |ui| self.draw_controls(ui));
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.theme.background).inner_margin(6.0))
            .show(ctx, |ui| {
                ui.add_enabled_ui(!modal_open, |ui| self.draw_canvas(ui));
            });

        self.draw_error(ctx, modal_open);
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn run(color: Option<NodeColor>, theme: Option<String>) -> anyhow::Result<()> {
    // CLI flags override config
    let config = Config::load_or_default();
    let node_color = color.unwrap_or_else(|| config.node_color());
    let theme = Theme::from_name(theme.as_deref().unwrap_or(config.theme()));
    let title = "Dijkstra \u{2014} pathsketch";

    tracing::info!(%node_color, theme = %theme.name, "starting editor");

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(config.window_size())
        .with_min_inner_size([480.0, 320.0])
        .with_title(title);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |cc| {
            if theme.is_dark() {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }
            Ok(Box::new(GraphApp::new(node_color, theme)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter_pressed() -> egui::RawInput {
        let mut input = egui::RawInput::default();
        input.events.push(egui::Event::Key {
            key: egui::Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        });
        input
    }

    #[test]
    fn error_raised_by_enter_stays_visible() {
        let ctx = egui::Context::default();
        let mut app = GraphApp::new(NodeColor::Blue, Theme::light());
        app.form.source = "1".to_string();
        app.form.target = "2".to_string();

        let _ = ctx.run(enter_pressed(), |ctx| {
            let was_open = app.error.is_some();
            let command = app.form.find_path_command();
            app.submit(command);
            app.draw_error(ctx, was_open);
        });
        assert_eq!(app.error.as_deref(), Some("Node 1 does not exist"));

        // The next Enter dismisses it.
        let _ = ctx.run(enter_pressed(), |ctx| {
            let was_open = app.error.is_some();
            app.draw_error(ctx, was_open);
        });
        assert!(app.error.is_none());
    }

    #[test]
    fn open_error_survives_frames_without_keys() {
        let ctx = egui::Context::default();
        let mut app = GraphApp::new(NodeColor::Blue, Theme::light());
        app.error = Some("Node 3 does not exist".to_string());
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.draw_error(ctx, true));
        assert!(app.error.is_some());
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("node 4 does not exist"), "Node 4 does not exist");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn rejected_command_opens_error() {
        let mut app = GraphApp::new(NodeColor::Blue, Theme::light());
        app.form.source = "1".to_string();
        app.form.target = "2".to_string();
        app.form.weight = "3".to_string();
        let command = app.form.add_edge_command();
        app.submit(command);
        assert_eq!(app.error.as_deref(), Some("Node 1 does not exist"));
    }

    #[test]
    fn invalid_input_opens_error_without_touching_graph() {
        let mut app = GraphApp::new(NodeColor::Blue, Theme::light());
        app.submit(Ok(Command::PlaceNode(crate::graph::Position::new(0.5, 0.5))));
        app.form.source = "one".to_string();
        let command = app.form.find_path_command();
        app.submit(command);
        assert!(app.error.as_deref().is_some_and(|m| m.starts_with("Invalid start node")));
        assert_eq!(app.controller.graph.node_count(), 1);
    }
}
