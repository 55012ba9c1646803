//! Create project dialog component.

use gpui::{Context, IntoElement, div, prelude::*, px, rgb};

use crate::state::{AppState, DialogState};
use crate::views::MainView;

/// Render the create project dialog.
///
/// Name input captures keyboard input; Enter submits and Escape cancels.
pub fn render_create_project_dialog(
    state: &AppState,
    cx: &mut Context<MainView>,
) -> impl IntoElement {
    let (name, dialog_error) = match state.dialog() {
        DialogState::CreateProject { form, error, .. } => (form.name.clone(), error.clone()),
        DialogState::None => (String::new(), None),
    };
    let is_loading = state.is_dialog_loading();

    // Overlay background (press Escape or click Cancel to dismiss)
    div()
        .id("create-project-dialog-overlay")
        .absolute()
        .inset_0()
        .bg(gpui::rgba(0x000000aa))
        .flex()
        .justify_center()
        .items_center()
        .child(
            div()
                .id("create-project-dialog-box")
                .w(px(400.0))
                .bg(rgb(0x2d2d2d))
                .rounded_lg()
                .border_1()
                .border_color(rgb(0x444444))
                .flex()
                .flex_col()
                // Title bar
                .child(
                    div()
                        .px_4()
                        .py_3()
                        .border_b_1()
                        .border_color(rgb(0x444444))
                        .child(
                            div()
                                .text_lg()
                                .text_color(rgb(0xffffff))
                                .child("Create a Project"),
                        ),
                )
                // Name field
                .child(
                    div()
                        .px_4()
                        .py_4()
                        .flex()
                        .flex_col()
                        .gap_1()
                        .child(
                            div()
                                .text_sm()
                                .text_color(rgb(0xaaaaaa))
                                .child("Project Name"),
                        )
                        .child(
                            div()
                                .px_3()
                                .py_2()
                                .bg(rgb(0x1e1e1e))
                                .rounded_md()
                                .border_1()
                                .border_color(rgb(0x4a9eff))
                                .min_h(px(36.0))
                                .child(
                                    div()
                                        .text_color(if name.is_empty() {
                                            rgb(0x666666)
                                        } else {
                                            rgb(0xffffff)
                                        })
                                        .child(if name.is_empty() {
                                            "Type project name...".to_string()
                                        } else {
                                            format!("{}|", name)
                                        }),
                                ),
                        ),
                )
                // Error message
                .when_some(dialog_error, |this, error| {
                    this.child(
                        div()
                            .mx_4()
                            .mb_2()
                            .px_3()
                            .py_2()
                            .bg(rgb(0x662222))
                            .rounded_md()
                            .child(div().text_sm().text_color(rgb(0xff6b6b)).child(error)),
                    )
                })
                // Buttons
                .child(
                    div()
                        .px_4()
                        .py_3()
                        .border_t_1()
                        .border_color(rgb(0x444444))
                        .flex()
                        .justify_end()
                        .gap_2()
                        .child(
                            div()
                                .id("create-project-cancel-btn")
                                .px_4()
                                .py_2()
                                .bg(rgb(0x444444))
                                .hover(|style| style.bg(rgb(0x555555)))
                                .rounded_md()
                                .cursor_pointer()
                                .on_mouse_up(
                                    gpui::MouseButton::Left,
                                    cx.listener(|view, _, _, cx| {
                                        view.on_create_cancel(cx);
                                    }),
                                )
                                .child(div().text_color(rgb(0xffffff)).child("Cancel")),
                        )
                        .child(
                            div()
                                .id("create-project-submit-btn")
                                .px_4()
                                .py_2()
                                .bg(if is_loading {
                                    rgb(0x335577)
                                } else {
                                    rgb(0x4a9eff)
                                })
                                .when(!is_loading, |this| {
                                    this.hover(|style| style.bg(rgb(0x5aafff)))
                                        .cursor_pointer()
                                })
                                .rounded_md()
                                .on_mouse_up(
                                    gpui::MouseButton::Left,
                                    cx.listener(|view, _, _, cx| {
                                        view.on_create_submit(cx);
                                    }),
                                )
                                .child(div().text_color(rgb(0xffffff)).child(if is_loading {
                                    "Creating..."
                                } else {
                                    "Create"
                                })),
                        ),
                ),
        )
}
