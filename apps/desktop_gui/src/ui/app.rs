//! App shell: the menu editing screen and the checkout screen over one
//! owned [`MenuStore`].

use eframe::egui::{self, RichText};
use menu_core::{format_price, CheckoutSnapshot, DishDraft, MenuStore};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ui::theme::{self, BoardTheme};

pub const SETTINGS_STORAGE_KEY: &str = "bite_board_settings";

const BOARD_TITLE: &str = "Christoffel's Daily Bite Board";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppViewState {
    Menu,
    Checkout,
}

/// UI preferences persisted through eframe storage. Carries no menu data;
/// the dish list itself lives and dies with the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedBoardSettings {
    pub text_scale: f32,
    pub show_course_in_list: bool,
}

impl Default for PersistedBoardSettings {
    fn default() -> Self {
        Self {
            text_scale: 1.0,
            show_course_in_list: true,
        }
    }
}

pub struct MenuBoardApp {
    store: MenuStore,
    view_state: AppViewState,
    // Owned copy captured at navigation time; the live store can change
    // underneath without touching a checkout already in view.
    checkout: Option<CheckoutSnapshot>,

    name_input: String,
    price_input: String,
    course_input: String,

    status: String,
    show_course_in_list: bool,
    settings_open: bool,

    theme: BoardTheme,
    applied_theme: Option<BoardTheme>,
}

impl MenuBoardApp {
    pub fn new(store: MenuStore, settings: PersistedBoardSettings) -> Self {
        let theme = BoardTheme {
            text_scale: settings.text_scale.clamp(0.8, 1.6),
            ..BoardTheme::default()
        };
        Self {
            store,
            view_state: AppViewState::Menu,
            checkout: None,
            name_input: String::new(),
            price_input: String::new(),
            course_input: String::new(),
            status: "Ready".to_string(),
            show_course_in_list: settings.show_course_in_list,
            settings_open: false,
            theme,
            applied_theme: None,
        }
    }

    fn try_add_dish(&mut self) {
        let draft = DishDraft::new(
            self.name_input.clone(),
            self.price_input.clone(),
            self.course_input.clone(),
        );
        let name = draft.name.trim().to_string();
        if self.store.add_item(draft).is_some() {
            self.name_input.clear();
            self.price_input.clear();
            self.course_input.clear();
            self.status = format!("Added {name}");
        }
        // Rejected drafts are a silent no-op: inputs stay as typed and no
        // error is surfaced. The store logs the reason at debug level.
    }

    fn clear_menu(&mut self) {
        self.store.clear();
        self.status = "Menu cleared".to_string();
        info!("menu cleared");
    }

    fn go_to_checkout(&mut self) {
        let snapshot = self.store.snapshot();
        info!(lines = snapshot.line_count(), "navigating to checkout");
        self.checkout = Some(snapshot);
        self.view_state = AppViewState::Checkout;
    }

    fn back_to_menu(&mut self) {
        info!("returning to menu");
        self.checkout = None;
        self.view_state = AppViewState::Menu;
        self.status = "Ready".to_string();
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }
        theme::apply(ctx, self.theme);
        self.applied_theme = Some(self.theme);
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }

        egui::Window::new("Settings")
            .open(&mut self.settings_open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add(
                    egui::Slider::new(&mut self.theme.text_scale, 0.8..=1.6)
                        .text("Text scale")
                        .step_by(0.05),
                );
                ui.checkbox(&mut self.show_course_in_list, "Show course labels in the list");
                if ui.button("Reset to defaults").clicked() {
                    self.theme = BoardTheme::default();
                    self.show_course_in_list = true;
                }
            });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small("Status:");
                ui.small(RichText::new(&self.status).weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("⚙").clicked() {
                        self.settings_open = true;
                    }
                });
            });
        });
    }

    fn show_add_form(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Add Menu Item").strong());
        ui.add_space(4.0);

        let name_resp = ui.add(
            egui::TextEdit::singleline(&mut self.name_input)
                .hint_text("Dish name")
                .desired_width(f32::INFINITY),
        );
        let price_resp = ui.add(
            egui::TextEdit::singleline(&mut self.price_input)
                .hint_text("Price")
                .desired_width(f32::INFINITY),
        );
        let course_resp = ui.add(
            egui::TextEdit::singleline(&mut self.course_input)
                .hint_text("Course (e.g. Starter, Main)")
                .desired_width(f32::INFINITY),
        );

        let enter_pressed = ui.ctx().input(|i| i.key_pressed(egui::Key::Enter));
        let submitted = enter_pressed
            && (name_resp.lost_focus() || price_resp.lost_focus() || course_resp.lost_focus());

        ui.add_space(6.0);
        let mut add_clicked = false;
        let mut clear_clicked = false;
        ui.horizontal(|ui| {
            let add_btn = egui::Button::new(RichText::new("Add Dish").color(egui::Color32::WHITE))
                .fill(self.theme.accent)
                .min_size(egui::vec2(120.0, 28.0));
            add_clicked = ui.add(add_btn).clicked();

            let clear_btn = egui::Button::new("Clear Menu").min_size(egui::vec2(100.0, 28.0));
            clear_clicked = ui.add_enabled(!self.store.is_empty(), clear_btn).clicked();
        });

        if add_clicked || submitted {
            self.try_add_dish();
        }
        if clear_clicked {
            self.clear_menu();
        }
    }

    fn show_menu_list(&mut self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new(format!("Current Menu Items ({})", self.store.len())).strong(),
        );
        ui.add_space(4.0);

        if self.store.is_empty() {
            ui.weak("No items on the menu yet.");
            return;
        }

        egui::ScrollArea::vertical()
            .max_height(260.0)
            .show(ui, |ui| {
                for item in self.store.items() {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.strong(item.name.as_str());
                            if self.show_course_in_list {
                                ui.weak(item.course.as_str());
                            }
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    RichText::new(format_price(item.price))
                                        .color(self.theme.accent)
                                        .strong(),
                                );
                            },
                        );
                    });
                    ui.separator();
                }
            });
    }

    fn show_menu_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new(BOARD_TITLE).color(self.theme.accent).strong());
            });
            ui.add_space(8.0);

            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                self.show_add_form(ui);
            });

            ui.add_space(10.0);
            self.show_menu_list(ui);
            ui.add_space(10.0);

            if !self.store.is_empty() {
                let label = format!("Go to Checkout ({} items)", self.store.len());
                let checkout_btn =
                    egui::Button::new(RichText::new(label).color(egui::Color32::WHITE).strong())
                        .fill(self.theme.accent)
                        .min_size(egui::vec2(ui.available_width(), 34.0));
                if ui.add(checkout_btn).clicked() {
                    self.go_to_checkout();
                }
            }
        });
    }

    fn show_checkout_screen(&mut self, ctx: &egui::Context) {
        let snapshot = self.checkout.clone().unwrap_or_default();
        let mut go_back = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new("Checkout").color(self.theme.accent).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("← Back to Menu").clicked() {
                        go_back = true;
                    }
                });
            });
            ui.weak("Here's your current menu order:");
            ui.add_space(8.0);

            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(format!("Order Summary ({} items)", snapshot.line_count()))
                        .strong(),
                );
                ui.separator();

                egui::ScrollArea::vertical()
                    .max_height(320.0)
                    .show(ui, |ui| {
                        for item in snapshot.lines() {
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.label(item.name.as_str());
                                    ui.weak(item.course.as_str());
                                });
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(format_price(item.price));
                                    },
                                );
                            });
                            ui.separator();
                        }
                    });

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Total:").color(self.theme.accent).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(snapshot.formatted_total())
                                .color(self.theme.accent)
                                .strong(),
                        );
                    });
                });
            });
        });

        if go_back {
            self.back_to_menu();
        }
    }
}

impl eframe::App for MenuBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);
        self.show_status_bar(ctx);
        self.show_settings_window(ctx);

        match self.view_state {
            AppViewState::Menu => self.show_menu_screen(ctx),
            AppViewState::Checkout => self.show_checkout_screen(ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedBoardSettings {
            text_scale: self.theme.text_scale,
            show_course_in_list: self.show_course_in_list,
        };
        if let Ok(text) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(store: MenuStore) -> MenuBoardApp {
        MenuBoardApp::new(store, PersistedBoardSettings::default())
    }

    #[test]
    fn successful_add_resets_the_form() {
        let mut app = app_with(MenuStore::new());
        app.name_input = "Signature Pasta".to_string();
        app.price_input = "120.00".to_string();
        app.course_input = "Main".to_string();

        app.try_add_dish();

        assert_eq!(app.store.len(), 1);
        assert!(app.name_input.is_empty());
        assert!(app.price_input.is_empty());
        assert!(app.course_input.is_empty());
        assert_eq!(app.status, "Added Signature Pasta");
    }

    #[test]
    fn rejected_add_keeps_the_form_as_typed() {
        let mut app = app_with(MenuStore::new());
        app.name_input = "Mystery Dish".to_string();
        app.price_input = "abc".to_string();
        app.course_input = "Main".to_string();
        let status_before = app.status.clone();

        app.try_add_dish();

        assert!(app.store.is_empty());
        assert_eq!(app.price_input, "abc");
        assert_eq!(app.status, status_before);
    }

    #[test]
    fn checkout_navigation_captures_a_detached_snapshot() {
        let mut store = MenuStore::new();
        store.add_item(DishDraft::new("Signature Pasta", "120.00", "Main"));
        store.add_item(DishDraft::new("Prawn Cocktail", "85.50", "Starter"));
        let mut app = app_with(store);

        app.go_to_checkout();
        assert_eq!(app.view_state, AppViewState::Checkout);
        let snapshot = app.checkout.clone().expect("snapshot");
        assert_eq!(snapshot.line_count(), 2);
        assert_eq!(snapshot.formatted_total(), "R205.50");

        app.clear_menu();
        let held = app.checkout.clone().expect("snapshot");
        assert_eq!(held.formatted_total(), "R205.50");

        app.back_to_menu();
        assert_eq!(app.view_state, AppViewState::Menu);
        assert!(app.checkout.is_none());

        app.go_to_checkout();
        let empty = app.checkout.clone().expect("snapshot");
        assert_eq!(empty.line_count(), 0);
        assert_eq!(empty.formatted_total(), "R0.00");
    }

    #[test]
    fn clamps_persisted_text_scale_into_range() {
        let app = MenuBoardApp::new(
            MenuStore::new(),
            PersistedBoardSettings {
                text_scale: 9.0,
                show_course_in_list: false,
            },
        );
        assert_eq!(app.theme.text_scale, 1.6);
        assert!(!app.show_course_in_list);
    }
}
