//! Main application for the Othello GUI
//!
//! The app owns a [`GameController`] and only forwards input to it. The one
//! piece of timing lives here: after a human move the AI reply is requested
//! once the configured delay has elapsed.

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::info;

use super::board_view::{BoardOverlay, BoardView};
use super::theme::*;
use crate::game::{GameConfig, GameController, GameMode, GamePhase};
use crate::{GameOutcome, Player};

/// Main Othello application
pub struct OthelloApp {
    game: GameController,
    board_view: BoardView,
    /// When the pending AI reply should be requested
    auto_due: Option<Instant>,
    show_debug: bool,
}

impl Default for OthelloApp {
    fn default() -> Self {
        Self {
            game: GameController::new(GameConfig::default()),
            board_view: BoardView::default(),
            auto_due: None,
            show_debug: false,
        }
    }
}

impl OthelloApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn new_game(&mut self, mode: GameMode) {
        let config = GameConfig {
            mode,
            ..self.game.config().clone()
        };
        info!(?mode, "starting new game");
        self.game = GameController::new(config);
        self.auto_due = None;
    }

    /// Request the AI move once its delay has passed
    fn drive_auto_turn(&mut self, ctx: &Context) {
        if !self.game.is_auto_turn() {
            self.auto_due = None;
            return;
        }

        let delay = self.game.config().auto_move_delay;
        let due = *self.auto_due.get_or_insert_with(|| Instant::now() + delay);
        let now = Instant::now();
        if now >= due {
            self.auto_due = None;
            self.game.request_auto_move();
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(due - now);
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs AI - Black)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs AI - White)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.game.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "AI Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.game.config().mode {
                        GameMode::PvE { human } => format!("vs AI - You: {}", human),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("OTHELLO").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_score_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.game.outcome() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (title, status, color) = match self.game.phase() {
                GamePhase::HumanTurn(p) => (p.name().to_uppercase(), "Your turn", STATUS_READY),
                GamePhase::AutoTurn(p) => (p.name().to_uppercase(), "AI thinking...", STATUS_WAITING),
                GamePhase::GameOver => ("-".to_string(), "Game over", WIN_HIGHLIGHT),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                if let Some(player) = self.game.current_player() {
                    let fill = match player {
                        Player::Black => BLACK_STONE,
                        Player::White => WHITE_STONE,
                    };
                    ui.painter().circle_filled(rect.center(), 16.0, fill);
                }
                ui.add_space(10.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(title).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        let score = self.game.score();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("● {}", score.black)).size(20.0).color(TEXT_PRIMARY));
                ui.add_space(16.0);
                ui.label(RichText::new(format!("○ {}", score.white)).size(20.0).color(TEXT_PRIMARY));
            });
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{}", self.game.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("↩ Undo (U)").clicked() {
                    self.game.undo();
                    self.auto_due = None;
                }
                if ui.button("New (N)").clicked() {
                    self.game.reset();
                    self.auto_due = None;
                }
            });
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match self.game.last_ai_result() {
                Some(result) => {
                    if let Some(pos) = result.best_move {
                        let col = (b'a' + pos.col) as char;
                        ui.label(
                            RichText::new(format!("→ {}{}", col, pos.row + 1))
                                .size(12.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                    ui.label(RichText::new(format!("Score: {:+}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    ui.label(
                        RichText::new(format!(
                            "{} nodes, {} cutoffs, {}ms",
                            result.nodes, result.cutoffs, result.time_ms
                        ))
                        .size(10.0)
                        .color(TEXT_MUTED),
                    );
                }
                None => {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: GameOutcome) {
        let score = self.game.score();
        let headline = match (outcome, self.game.config().mode) {
            (GameOutcome::Draw, _) => "Draw".to_string(),
            (GameOutcome::Win(p), GameMode::PvE { human }) if p == human => "You win!".to_string(),
            (GameOutcome::Win(_), GameMode::PvE { .. }) => "AI wins!".to_string(),
            (GameOutcome::Win(p), GameMode::PvP) => format!("{} wins!", p),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(score.to_string()).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(10.0);
                    if ui.button("New Game").clicked() {
                        self.game.reset();
                        self.auto_due = None;
                    }
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let legal_moves = self.game.current_legal_moves();
            let overlay = BoardOverlay {
                legal_moves: &legal_moves,
                turn: self.game.current_player(),
                last_move: self.game.last_move(),
                last_flips: self.game.last_flips(),
                accept_input: matches!(self.game.phase(), GamePhase::HumanTurn(_)),
            };

            if let Some(pos) = self.board_view.show(ui, self.game.board(), &overlay) {
                self.game.apply_human_move(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (debug, undo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if debug {
            self.show_debug = !self.show_debug;
        }
        if undo {
            self.game.undo();
            self.auto_due = None;
        }
        if new_game {
            self.game.reset();
            self.auto_due = None;
        }
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.drive_auto_turn(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
