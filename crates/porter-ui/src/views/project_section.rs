//! Project section of the sidebar.
//!
//! Shows either a "Create a Project" call-to-action or the current project
//! with a dropdown for switching.

use gpui::{Context, FontWeight, IntoElement, div, prelude::*, px, rgb};

use porter_core::selector::ProjectOption;
use porter_core::{Project, SelectorView};

use crate::views::MainView;

/// Width of the sidebar in pixels.
pub const SIDEBAR_WIDTH: f32 = 220.0;

/// Distance from the window top to the dropdown menu (header + trigger).
const DROPDOWN_TOP: f32 = 104.0;

/// Horizontal inset of the section inside the sidebar.
const SECTION_INSET: f32 = 12.0;

fn render_project_icon(initial: String, size: f32) -> impl IntoElement {
    div()
        .size(px(size))
        .flex_none()
        .bg(rgb(0x4a9eff))
        .rounded_md()
        .flex()
        .items_center()
        .justify_center()
        .text_sm()
        .font_weight(FontWeight::BOLD)
        .text_color(rgb(0xffffff))
        .child(initial)
}

/// Render the project section in the sidebar.
///
/// The dropdown menu itself is rendered separately by
/// [`render_project_dropdown`] so it can sit above the click-away backdrop.
pub fn render_project_section(
    view: &SelectorView<'_>,
    cx: &mut Context<MainView>,
) -> impl IntoElement {
    let error = view.error().map(str::to_string);

    let body = match view {
        SelectorView::Initialize { .. } => render_create_call_to_action(cx).into_any_element(),
        SelectorView::Selector {
            current, expanded, ..
        } => render_trigger(current, *expanded, cx).into_any_element(),
    };

    div()
        .id("project-section")
        .px(px(SECTION_INSET))
        .py_2()
        .flex()
        .flex_col()
        .gap_1()
        .child(body)
        .when_some(error, |this, error| {
            this.child(
                div()
                    .id("project-fetch-error")
                    .text_sm()
                    .text_color(rgb(0xff6b6b))
                    .child(error),
            )
        })
}

fn render_create_call_to_action(cx: &mut Context<MainView>) -> impl IntoElement {
    div()
        .id("project-create-cta")
        .px_3()
        .py_2()
        .bg(rgb(0x444444))
        .hover(|style| style.bg(rgb(0x555555)))
        .rounded_md()
        .cursor_pointer()
        .on_mouse_up(
            gpui::MouseButton::Left,
            cx.listener(|view, _, _, cx| {
                view.on_create_project_click(cx);
            }),
        )
        .child(
            div()
                .flex()
                .items_center()
                .gap_2()
                .child(div().text_color(rgb(0x4a9eff)).child("+"))
                .child(div().text_color(rgb(0xffffff)).child("Create a Project")),
        )
}

fn render_trigger(current: &Project, expanded: bool, cx: &mut Context<MainView>) -> impl IntoElement {
    div()
        .id("project-selector-trigger")
        .px_2()
        .py_2()
        .rounded_md()
        .cursor_pointer()
        .hover(|style| style.bg(rgb(0x333333)))
        .when(expanded, |this| this.bg(rgb(0x333333)))
        .on_mouse_up(
            gpui::MouseButton::Left,
            cx.listener(|view, _, _, cx| {
                view.on_toggle_dropdown(cx);
            }),
        )
        .child(
            div()
                .flex()
                .items_center()
                .gap_2()
                .child(render_project_icon(current.initial(), 24.0))
                .child(
                    div()
                        .flex_1()
                        .text_color(rgb(0xffffff))
                        .overflow_hidden()
                        .text_ellipsis()
                        .child(current.name.clone()),
                )
                .child(
                    div()
                        .text_color(rgb(0x888888))
                        .text_sm()
                        .child(if expanded { "▲" } else { "▼" }),
                ),
        )
}

/// Render the open dropdown: every listed project plus a create option.
pub fn render_project_dropdown(
    options: &[ProjectOption<'_>],
    cx: &mut Context<MainView>,
) -> impl IntoElement {
    div()
        .id("project-dropdown-menu")
        .absolute()
        .top(px(DROPDOWN_TOP))
        .left(px(SECTION_INSET))
        .w(px(SIDEBAR_WIDTH - SECTION_INSET * 2.0))
        .max_h(px(360.0))
        .overflow_y_scroll()
        .bg(rgb(0x2d2d2d))
        .border_1()
        .border_color(rgb(0x444444))
        .rounded_md()
        .shadow_lg()
        .flex()
        .flex_col()
        .py_1()
        .children(options.iter().map(|option| {
            let index = option.index;
            let selected = option.selected;

            div()
                .id(("project-option", index))
                .px_3()
                .py_2()
                .cursor_pointer()
                .hover(|style| style.bg(rgb(0x3d3d3d)))
                .when(selected, |this| this.bg(rgb(0x3a3f4b)))
                .on_mouse_up(
                    gpui::MouseButton::Left,
                    cx.listener(move |view, _, _, cx| {
                        view.on_project_select(index, cx);
                    }),
                )
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap_2()
                        .child(render_project_icon(option.project.initial(), 20.0))
                        .child(
                            div()
                                .flex_1()
                                .text_color(if selected {
                                    rgb(0xffffff)
                                } else {
                                    rgb(0xcccccc)
                                })
                                .overflow_hidden()
                                .text_ellipsis()
                                .child(option.project.name.clone()),
                        ),
                )
        }))
        .child(div().h(px(1.0)).bg(rgb(0x444444)).mx_2().my_1())
        .child(
            div()
                .id("project-create-option")
                .px_3()
                .py_2()
                .cursor_pointer()
                .hover(|style| style.bg(rgb(0x3d3d3d)))
                .on_mouse_up(
                    gpui::MouseButton::Left,
                    cx.listener(|view, _, _, cx| {
                        view.on_create_project_click(cx);
                    }),
                )
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap_2()
                        .child(div().w(px(20.0)).text_color(rgb(0x4a9eff)).child("+"))
                        .child(div().text_color(rgb(0xffffff)).child("Create a Project")),
                ),
        )
}
