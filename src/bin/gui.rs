use std::collections::HashMap;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin, EguiPrimaryContextPass};
use daggerheart_tracker::config::{WINDOW_SIZE, WINDOW_TITLE};
use daggerheart_tracker::{
	AddResourceForm, Condition, FileStorage, IdGenerator, Locale, PALETTE, ResourceView, Tracker,
	TrackerConfig, parse_hex_color,
};

// ---------- Constants ----------
const BAR_HEIGHT: f32 = 14.0;
const SWATCH_SIZE: f32 = 22.0;
const GEAR_LABEL: &str = "⚙";
const REMOVE_LABEL: &str = "×";

// ---------- Resources ----------
#[derive(Resource)]
struct TrackerState {
	tracker: Tracker<FileStorage>,
}

#[derive(Resource, Default)]
struct UiState {
	add_form: AddResourceForm,
	form_current_input: String,
	form_max_input: String,
	// Text buffers for max fields in edit mode, keyed by resource id.
	max_inputs: HashMap<String, String>,
	confirm_reset_open: bool,
}

impl UiState {
	/// Dialogs and edit buffers only exist while edit mode is on.
	fn leave_edit_mode(&mut self) {
		self.add_form.close();
		self.confirm_reset_open = false;
		self.max_inputs.clear();
	}
}

// ---------- Entry ----------
fn main() {
	let config = TrackerConfig::from_env();
	App::new()
		.add_plugins(
			DefaultPlugins
				.set(WindowPlugin {
					primary_window: Some(Window {
						title: WINDOW_TITLE.to_string(),
						resolution: WINDOW_SIZE.into(),
						..Default::default()
					}),
					..Default::default()
				})
				.set(LogPlugin {
					filter: config.log_filter.clone(),
					..Default::default()
				}),
		)
		.add_plugins(EguiPlugin::default())
		.insert_resource(open_tracker(&config))
		.insert_resource(UiState::default())
		.add_systems(Startup, setup_camera)
		.add_systems(EguiPrimaryContextPass, draw_ui)
		.run();
}

// ---------- Setup ----------
fn open_tracker(config: &TrackerConfig) -> TrackerState {
	info!("using data directory {}", config.data_dir.display());
	let storage = FileStorage::new(config.data_dir.clone());
	TrackerState {
		tracker: Tracker::open(storage, IdGenerator::default(), &config.system_language),
	}
}

fn setup_camera(mut commands: Commands) {
	commands.spawn(Camera2d);
}

// ---------- Utilities ----------
fn color32(hex: &str) -> egui::Color32 {
	match parse_hex_color(hex) {
		Some([r, g, b]) => egui::Color32::from_rgb(r, g, b),
		None => egui::Color32::GRAY,
	}
}

fn form_inputs_from(form: &AddResourceForm) -> (String, String) {
	(form.current.to_string(), form.max.to_string())
}

// ---------- Systems: UI ----------
fn draw_ui(mut egui_ctx: EguiContexts, mut state: ResMut<TrackerState>, mut ui: ResMut<UiState>) {
	let Ok(ctx) = egui_ctx.ctx_mut() else {
		return;
	};
	let tracker = &mut state.tracker;

	// Header
	egui::TopBottomPanel::top("header").show(&*ctx, |ui_top| {
		ui_top.horizontal(|ui_row| {
			ui_row.heading(tracker.t("title"));
			ui_row.label(tracker.t("version"));
			ui_row.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui_right| {
				let gear = ui_right
					.selectable_label(tracker.edit_mode(), GEAR_LABEL)
					.on_hover_text(tracker.t("configMode"));
				if gear.clicked() {
					tracker.toggle_edit_mode();
					if tracker.edit_mode() {
						ui.max_inputs.clear();
					} else {
						ui.leave_edit_mode();
					}
				}
				let mut locale = tracker.locale();
				egui::ComboBox::from_label(tracker.t("language"))
					.selected_text(locale.code())
					.show_ui(ui_right, |ui_combo| {
						for l in Locale::ALL {
							ui_combo.selectable_value(&mut locale, l, l.code());
						}
					});
				if locale != tracker.locale() {
					tracker.set_locale(locale);
				}
			});
		});
	});

	// Conditions
	egui::TopBottomPanel::bottom("conditions").show(&*ctx, |ui_bottom| {
		ui_bottom.horizontal_wrapped(|ui_row| {
			ui_row.label(tracker.t("conditions"));
			for cond in Condition::ALL {
				let mut on = tracker.conditions().is_active(cond);
				if ui_row.checkbox(&mut on, tracker.t(cond.label_key())).changed() {
					tracker.toggle_condition(cond);
				}
			}
		});
	});

	// Resources
	egui::CentralPanel::default().show(&*ctx, |ui_main| {
		if tracker.edit_mode() {
			ui_main.horizontal(|ui_row| {
				if ui_row.button(tracker.t("addResource")).clicked() {
					ui.add_form.open();
					let (current, max) = form_inputs_from(&ui.add_form);
					ui.form_current_input = current;
					ui.form_max_input = max;
				}
				if ui_row.button(tracker.t("reset")).clicked() {
					ui.confirm_reset_open = true;
				}
				let mode = tracker.mode();
				let toggle = ui_row
					.button(tracker.t(mode.label_key()))
					.on_hover_text(tracker.t(mode.toggle_hint_key()));
				if toggle.clicked() {
					tracker.toggle_mode();
					ui.max_inputs.clear();
				}
			});
			ui_main.separator();
		}

		egui::ScrollArea::vertical().show(ui_main, |ui_scroll| {
			for view in tracker.views() {
				draw_resource_card(ui_scroll, tracker, &mut ui, &view);
				ui_scroll.add_space(6.0);
			}
		});
	});

	// Add resource dialog
	if ui.add_form.is_open() {
		draw_add_form(&*ctx, tracker, &mut ui);
	}

	// Reset confirmation
	if ui.confirm_reset_open {
		egui::Window::new(tracker.t("reset"))
			.collapsible(false)
			.resizable(false)
			.anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
			.show(&*ctx, |ui_win| {
				ui_win.label(tracker.t("confirmReset"));
				ui_win.horizontal(|ui_row| {
					if ui_row.button(tracker.t("confirmYes")).clicked() {
						// The dialog itself is the prompt; reaching here means "yes".
						tracker.reset_all(&mut |message: &str| {
							info!("reset confirmed: {message}");
							true
						});
						ui.max_inputs.clear();
						ui.confirm_reset_open = false;
					}
					if ui_row.button(tracker.t("confirmNo")).clicked() {
						ui.confirm_reset_open = false;
					}
				});
			});
	}
}

fn draw_resource_card(
	ui_parent: &mut egui::Ui,
	tracker: &mut Tracker<FileStorage>,
	ui: &mut UiState,
	view: &ResourceView,
) {
	let color = color32(&view.color);
	egui::Frame::group(ui_parent.style())
		.stroke(egui::Stroke::new(2.0, color))
		.show(ui_parent, |ui_card| {
			ui_card.horizontal(|ui_row| {
				if view.editable {
					let mut name = tracker
						.store()
						.get(&view.id)
						.map(|r| r.name.clone())
						.unwrap_or_default();
					if ui_row.text_edit_singleline(&mut name).changed() {
						tracker.store_mut().rename(&view.id, &name);
					}
					ui_row.label(format!("{} /", view.current));
					let input = ui
						.max_inputs
						.entry(view.id.clone())
						.or_insert_with(|| view.max.to_string());
					let edit = egui::TextEdit::singleline(&mut *input).desired_width(40.0);
					if ui_row.add(edit).changed() {
						tracker.edit_max(&view.id, input.as_str());
					}
					if view.removable {
						let remove = ui_row
							.small_button(REMOVE_LABEL)
							.on_hover_text(tracker.t("removeResource"));
						if remove.clicked() {
							tracker.store_mut().remove(&view.id);
							ui.max_inputs.remove(&view.id);
						}
					}
				} else {
					ui_row.label(egui::RichText::new(&view.name).strong());
					ui_row.label(view.value_label());
				}
			});

			ui_card.add(
				egui::ProgressBar::new(view.fill_fraction)
					.fill(color)
					.desired_height(BAR_HEIGHT),
			);

			ui_card.horizontal(|ui_row| {
				if ui_row.add_enabled(view.can_decrement, egui::Button::new("-")).clicked() {
					tracker.store_mut().decrement(&view.id);
				}
				if ui_row.add_enabled(view.can_increment, egui::Button::new("+")).clicked() {
					tracker.store_mut().increment(&view.id);
				}
			});
		});
}

fn draw_add_form(ctx: &egui::Context, tracker: &mut Tracker<FileStorage>, ui: &mut UiState) {
	let mut keep_open = true;
	egui::Window::new(tracker.t("formTitleAddResource"))
		.open(&mut keep_open)
		.collapsible(false)
		.resizable(false)
		.anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
		.show(ctx, |ui_win| {
			ui_win.label(tracker.t("formName"));
			ui_win.add(
				egui::TextEdit::singleline(&mut ui.add_form.name)
					.hint_text(tracker.t("formNamePlaceholder")),
			);

			ui_win.horizontal(|ui_row| {
				ui_row.label(tracker.t("formCurrent"));
				if ui_row.text_edit_singleline(&mut ui.form_current_input).changed() {
					ui.add_form.set_current_input(&ui.form_current_input);
				}
				ui_row.label(tracker.t("formMax"));
				if ui_row.text_edit_singleline(&mut ui.form_max_input).changed() {
					ui.add_form.set_max_input(&ui.form_max_input);
				}
			});

			ui_win.label(tracker.t("formColor"));
			ui_win.horizontal_wrapped(|ui_row| {
				for swatch in PALETTE {
					let button = egui::Button::new("")
						.fill(color32(swatch))
						.min_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE))
						.selected(ui.add_form.color == swatch);
					if ui_row.add(button).clicked() {
						ui.add_form.pick_color(swatch);
					}
				}
			});

			ui_win.separator();
			ui_win.horizontal(|ui_row| {
				if ui_row.button(tracker.t("formCancel")).clicked() {
					ui.add_form.close();
				}
				if ui_row.button(tracker.t("formSubmit")).clicked() {
					if let Some(draft) = ui.add_form.submit() {
						tracker.store_mut().add(draft);
					}
				}
			});
		});
	if !keep_open {
		ui.add_form.close();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use daggerheart_tracker::Mode;

	#[test]
	fn tracker_state_opens_from_config_dir() {
		let tmp = tempfile::tempdir().unwrap();
		let config = TrackerConfig {
			data_dir: tmp.path().to_path_buf(),
			system_language: "de_DE.UTF-8".to_string(),
			..TrackerConfig::default()
		};
		let state = open_tracker(&config);
		assert_eq!(state.tracker.locale(), Locale::De);
		assert_eq!(state.tracker.mode(), Mode::Player);
		assert!(tmp.path().join("daggerheart-resources-player").exists());
	}

	#[test]
	fn leaving_edit_mode_closes_dialogs() {
		let mut ui = UiState::default();
		ui.add_form.open();
		ui.add_form.name = "Mana".to_string();
		ui.confirm_reset_open = true;
		ui.max_inputs.insert("hope".to_string(), "4".to_string());

		ui.leave_edit_mode();
		assert!(!ui.add_form.is_open());
		assert!(!ui.confirm_reset_open);
		assert!(ui.max_inputs.is_empty());
	}

	#[test]
	fn palette_colors_convert() {
		assert_eq!(color32("#e74c3c"), egui::Color32::from_rgb(0xe7, 0x4c, 0x3c));
		assert_eq!(color32("not a color"), egui::Color32::GRAY);
	}

	#[test]
	fn camera_is_spawned() {
		let mut app = App::new();
		app.add_plugins(MinimalPlugins);
		app.add_systems(Startup, setup_camera);
		app.update();
		let mut q = app.world_mut().query::<&Camera2d>();
		assert_eq!(q.iter(app.world()).count(), 1);
	}
}
