//! egui rendition of the page content over the scene backgrounds

use egui::{Align2, Color32, Id, LayerId, Order, RichText, Stroke};

use crate::core::Color;
use crate::page::content::{self, Link};
use crate::page::{FieldName, Page, Rect, SectionId};
use crate::scenes::palette::{BACKGROUND, CYAN, INDIGO};

/// Menu collapses behind a toggle below this width, in points
const MOBILE_BREAKPOINT: f32 = 768.0;
const TOAST_WIDTH: f32 = 380.0;
const CONTENT_MARGIN: f32 = 48.0;
/// Unrevealed sections sit this far below their final position
const REVEAL_SHIFT: f32 = 50.0;

fn color32(color: Color) -> Color32 {
    let [r, g, b, a] = color.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn faded(color: Color, alpha: f32) -> Color32 {
    color32(color.with_alpha(alpha))
}

/// Page rectangle in physical pixels to an egui rect in points
fn to_points(rect: Rect, pixels_per_point: f32) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(rect.x / pixels_per_point, rect.y / pixels_per_point),
        egui::vec2(rect.width / pixels_per_point, rect.height / pixels_per_point),
    )
}

fn to_pixels(rect: egui::Rect, pixels_per_point: f32) -> Rect {
    Rect::new(
        rect.min.x * pixels_per_point,
        rect.min.y * pixels_per_point,
        rect.width() * pixels_per_point,
        rect.height() * pixels_per_point,
    )
}

/// Draw the whole page for this frame, applying interactions to `page`
pub fn draw_page(ctx: &egui::Context, page: &mut Page, now: f32, fps: Option<f32>) {
    let ppp = ctx.pixels_per_point();
    let scroll = page.scroll_offset();
    let viewport = page.layout().viewport();
    let screen_width = viewport.width as f32 / ppp;
    let screen_height = viewport.height as f32 / ppp;

    let sections: Vec<(SectionId, Rect)> = page.layout().sections().collect();
    for (id, rect) in sections {
        let on_screen = rect.translated(0.0, -scroll);
        if on_screen.bottom() < 0.0 || on_screen.y > viewport.height as f32 {
            continue;
        }
        draw_section(ctx, page, id, to_points(on_screen, ppp), now);
    }

    draw_navbar(ctx, page, screen_width, now);
    draw_toasts(ctx, page, now);
    draw_loading_cover(ctx, page, screen_width, screen_height, now);

    if let Some(fps) = fps {
        egui::Window::new("FPS")
            .title_bar(false)
            .resizable(false)
            .anchor(Align2::LEFT_BOTTOM, egui::vec2(10.0, -10.0))
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.label(RichText::new(format!("{fps:.0} FPS")).size(12.0).color(Color32::GRAY));
            });
    }
}

fn draw_section(ctx: &egui::Context, page: &mut Page, id: SectionId, rect: egui::Rect, now: f32) {
    let revealed = page.is_revealed(id);
    let shift = if revealed { 0.0 } else { REVEAL_SHIFT };
    let origin = rect.min + egui::vec2(CONTENT_MARGIN, CONTENT_MARGIN * 1.5 + shift);
    let width = (rect.width() - CONTENT_MARGIN * 2.0).max(200.0);

    egui::Area::new(Id::new(("section", id.id())))
        .order(Order::Middle)
        .fixed_pos(origin)
        .show(ctx, |ui| {
            ui.set_width(width);
            if !revealed {
                ui.multiply_opacity(0.0);
            }
            match id {
                SectionId::Hero => draw_hero(ui, page, now),
                SectionId::About => draw_about(ui),
                SectionId::Skills => draw_skills(ui, page, now),
                SectionId::Projects => draw_projects(ui, page),
                SectionId::Contact => draw_contact(ui, page, now),
            }
        });
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).size(36.0).strong().color(Color32::WHITE));
    ui.add_space(24.0);
}

fn draw_hero(ui: &mut egui::Ui, page: &mut Page, now: f32) {
    ui.add_space(120.0);
    ui.label(RichText::new(content::HERO_TITLE).size(56.0).strong().color(Color32::WHITE));
    ui.label(RichText::new(content::HERO_SUBTITLE).size(20.0).color(color32(CYAN)));
    ui.add_space(32.0);

    ui.horizontal(|ui| {
        for Link { label, href } in content::HERO_BUTTONS {
            if ui.button(RichText::new(label).size(16.0)).clicked() {
                page.click_hero_button(href, now);
            }
        }
    });

    ui.add_space(160.0);
    if ui.link(RichText::new("scroll ↓").color(Color32::LIGHT_GRAY)).clicked() {
        page.click_scroll_indicator(now);
    }
}

fn draw_about(ui: &mut egui::Ui) {
    section_heading(ui, "About Me");
    for paragraph in content::ABOUT_PARAGRAPHS {
        ui.label(RichText::new(paragraph).size(18.0).color(Color32::LIGHT_GRAY));
        ui.add_space(12.0);
    }
}

fn draw_skills(ui: &mut egui::Ui, page: &mut Page, now: f32) {
    section_heading(ui, "Skills");

    ui.horizontal_wrapped(|ui| {
        for (index, skill) in content::SKILLS.iter().enumerate() {
            let hovered = page.skill_cards().get(index).is_some_and(|card| card.is_hovered());
            let lift = if hovered { 0.0 } else { 10.0 };
            let stroke = if hovered {
                Stroke::new(2.0, faded(CYAN, 0.6))
            } else {
                Stroke::new(1.0, faded(INDIGO, 0.3))
            };

            let card = egui::Frame::new()
                .fill(faded(BACKGROUND[1], 0.85))
                .stroke(stroke)
                .corner_radius(12.0)
                .inner_margin(egui::Margin::same(16))
                .outer_margin(egui::Margin {
                    top: lift as i8,
                    bottom: (10.0 - lift) as i8,
                    ..egui::Margin::same(8)
                })
                .show(ui, |ui| {
                    ui.set_width(220.0);
                    ui.label(RichText::new(skill.name).size(18.0).color(Color32::WHITE));
                    let width = page.skill_bars.width(index, now);
                    ui.add(
                        egui::ProgressBar::new(width / 100.0)
                            .desired_width(220.0)
                            .fill(color32(CYAN))
                            .text(format!("{width:.0}%")),
                    );
                });

            page.skill_card_hover(index, card.response.contains_pointer());
        }
    });
}

fn draw_projects(ui: &mut egui::Ui, page: &mut Page) {
    section_heading(ui, "Projects");
    let ppp = ui.ctx().pixels_per_point();

    ui.horizontal_wrapped(|ui| {
        for (index, project) in content::PROJECTS.iter().enumerate() {
            let tilt = page.project_cards().get(index).map(|card| card.tilt()).unwrap_or_default();

            let card = egui::Frame::new()
                .fill(faded(BACKGROUND[2], 0.85))
                .stroke(Stroke::new(1.0, faded(CYAN, 0.2 + tilt.translate_z / 50.0)))
                .corner_radius(12.0)
                .inner_margin(egui::Margin {
                    left: (16.0 + tilt.rotate_y * 0.5) as i8,
                    right: (16.0 - tilt.rotate_y * 0.5) as i8,
                    top: (16.0 - tilt.rotate_x * 0.5) as i8,
                    bottom: (16.0 + tilt.rotate_x * 0.5) as i8,
                })
                .outer_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    ui.set_width(280.0);
                    ui.label(RichText::new(project.title).size(20.0).strong().color(Color32::WHITE));
                    ui.label(RichText::new(project.description).color(Color32::LIGHT_GRAY));
                    ui.horizontal(|ui| {
                        for tag in project.tags {
                            ui.label(RichText::new(*tag).small().color(color32(CYAN)));
                        }
                    });
                });

            let response = card.response;
            match response.hover_pos().filter(|_| response.contains_pointer()) {
                Some(pointer) => page.project_pointer_move(
                    index,
                    to_pixels(response.rect, ppp),
                    glam::Vec2::new(pointer.x * ppp, pointer.y * ppp),
                ),
                None => page.project_pointer_leave(index),
            }
        }
    });
}

fn draw_contact(ui: &mut egui::Ui, page: &mut Page, now: f32) {
    section_heading(ui, "Get In Touch");
    ui.label(RichText::new(content::CONTACT_BLURB).size(16.0).color(Color32::LIGHT_GRAY));
    ui.add_space(16.0);

    for name in FieldName::ALL {
        let focused = page.form.is_focused(name);
        let label_color = if focused { color32(CYAN) } else { Color32::GRAY };
        let label_size = if focused { 12.0 } else { 14.0 };
        ui.label(RichText::new(name.label()).size(label_size).color(label_color));

        let value = page.form.value_mut(name);
        let edit = if name.is_multiline() {
            egui::TextEdit::multiline(value).desired_rows(4)
        } else {
            egui::TextEdit::singleline(value)
        };
        let response = ui.add(edit.desired_width(420.0));

        if response.gained_focus() {
            page.form.focus(name);
        }
        if response.lost_focus() {
            page.form.blur(name);
        }
        ui.add_space(8.0);
    }

    if ui.button(RichText::new("Send Message").size(16.0)).clicked() {
        page.submit_contact(now);
    }
}

fn draw_navbar(ctx: &egui::Context, page: &mut Page, screen_width: f32, now: f32) {
    let fill = if page.navbar.is_scrolled() {
        faded(BACKGROUND[0], 0.95)
    } else {
        Color32::TRANSPARENT
    };
    let mobile = screen_width < MOBILE_BREAKPOINT;

    egui::Area::new(Id::new("navbar"))
        .order(Order::Foreground)
        .fixed_pos(egui::pos2(0.0, 0.0))
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(fill)
                .inner_margin(egui::Margin::symmetric(24, 12))
                .show(ui, |ui| {
                    ui.set_width(screen_width - 48.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(content::SITE_TITLE).size(22.0).strong().color(color32(CYAN)));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if mobile {
                                if ui.button("☰").clicked() {
                                    page.toggle_menu();
                                }
                            } else {
                                for Link { label, href } in content::NAV_LINKS.iter().rev() {
                                    if ui.link(RichText::new(*label).color(Color32::WHITE)).clicked() {
                                        page.click_nav_link(href, now);
                                    }
                                }
                            }
                        });
                    });

                    if mobile && page.navbar.is_menu_open() {
                        for Link { label, href } in content::NAV_LINKS {
                            if ui.link(RichText::new(label).size(18.0).color(Color32::WHITE)).clicked() {
                                page.click_nav_link(href, now);
                            }
                        }
                    }
                });
        });
}

fn draw_toasts(ctx: &egui::Context, page: &Page, now: f32) {
    for (slot, toast) in page.toasts.toasts().iter().enumerate() {
        let slide = toast.offset(now) * (TOAST_WIDTH + 20.0);
        egui::Area::new(Id::new(("toast", toast.id)))
            .order(Order::Tooltip)
            .anchor(Align2::RIGHT_TOP, egui::vec2(-20.0 + slide, 20.0 + slot as f32 * 64.0))
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(color32(toast.kind.background()))
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(32, 16))
                    .show(ui, |ui| {
                        ui.set_max_width(TOAST_WIDTH);
                        ui.label(RichText::new(&toast.message).color(Color32::WHITE));
                    });
            });
    }
}

fn draw_loading_cover(ctx: &egui::Context, page: &Page, width: f32, height: f32, now: f32) {
    let opacity = page.overlay_opacity(now);
    if opacity <= 0.0 {
        return;
    }

    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("loading-cover")));
    let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(width, height));
    painter.rect_filled(rect, 0.0, faded(BACKGROUND[0], opacity));
    painter.rect_filled(
        egui::Rect::from_min_max(egui::pos2(0.0, height * 0.5), rect.max),
        0.0,
        faded(BACKGROUND[2], opacity * 0.5),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_pixel_conversion_round_trips() {
        let rect = Rect::new(10.0, 20.0, 300.0, 150.0);
        let back = to_pixels(to_points(rect, 2.0), 2.0);
        assert_eq!(back, rect);
    }

    #[test]
    fn test_color_conversion_keeps_alpha() {
        let c = color32(CYAN.with_alpha(0.5));
        assert_eq!(c.a(), 128);
    }
}
