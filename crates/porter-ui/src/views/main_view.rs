//! Main view for porter-ui.
//!
//! Root view that composes the sidebar, the main pane and the create project
//! dialog. Owns the project selector and drives its fetches.

use std::sync::Arc;

use gpui::{
    Context, FocusHandle, Focusable, FontWeight, IntoElement, KeyDownEvent, Render, Task, Window,
    div, prelude::*, px, rgb,
};

use porter_core::api::UserProjects;
use porter_core::selector::FetchTicket;
use porter_core::{ApiError, ProjectContext, ProjectSelector, ProjectsApi, SelectorView};

use crate::actions;
use crate::state::{AppState, DialogState};
use crate::views::{create_project_dialog, project_section};

/// Main application view.
///
/// Owns application state and the project selector, and handles keyboard
/// input for the create project dialog.
pub struct MainView {
    state: AppState,
    selector: ProjectSelector,
    api: Arc<dyn ProjectsApi>,
    focus_handle: FocusHandle,
    /// In-flight project fetch. Replacing or dropping it cancels the fetch.
    _fetch_task: Option<Task<()>>,
}

impl MainView {
    pub fn new(api: Arc<dyn ProjectsApi>, user_id: Option<u64>, cx: &mut Context<Self>) -> Self {
        let mut view = Self {
            state: AppState::new(user_id),
            selector: ProjectSelector::new(),
            api,
            focus_handle: cx.focus_handle(),
            _fetch_task: None,
        };
        view.refresh_projects(cx);
        view
    }

    /// Fetch the user's projects on the background executor.
    fn refresh_projects(&mut self, cx: &mut Context<Self>) {
        let ticket = self.selector.begin_fetch();
        let api = Arc::clone(&self.api);
        let user_id = self.state.user_id();

        let task = cx.spawn(async move |this, cx: &mut gpui::AsyncApp| {
            let result = cx
                .background_executor()
                .spawn(async move { actions::fetch_projects(api.as_ref(), user_id) })
                .await;

            if let Err(e) = this.update(cx, |view, cx| {
                view.apply_fetch(ticket, result);
                cx.notify();
            }) {
                tracing::debug!(
                    event = "ui.fetch_projects.view_dropped",
                    error = ?e
                );
            }
        });

        self._fetch_task = Some(task);
    }

    fn apply_fetch(&mut self, ticket: FetchTicket, result: Result<UserProjects, ApiError>) {
        let result = result.map(|loaded| {
            self.state.set_user_id(loaded.user_id);
            loaded.projects
        });
        let outcome = self.selector.complete_fetch(ticket, result, &mut self.state);
        tracing::debug!(event = "ui.fetch_projects.applied", outcome = ?outcome);
    }

    pub fn on_toggle_dropdown(&mut self, cx: &mut Context<Self>) {
        let expanded = self.selector.toggle_expanded();
        tracing::debug!(event = "ui.project_dropdown.toggled", expanded = expanded);
        cx.notify();
    }

    fn on_close_dropdown(&mut self, cx: &mut Context<Self>) {
        self.selector.close_dropdown();
        cx.notify();
    }

    pub fn on_project_select(&mut self, index: usize, cx: &mut Context<Self>) {
        if let Err(e) = self.selector.select(index, &mut self.state) {
            tracing::warn!(event = "ui.project_select.failed", error = %e);
        }
        cx.notify();
    }

    pub fn on_create_project_click(&mut self, cx: &mut Context<Self>) {
        self.selector.request_create(&mut self.state);
        cx.notify();
    }

    pub fn on_create_cancel(&mut self, cx: &mut Context<Self>) {
        tracing::info!(event = "ui.create_dialog.cancelled");
        self.state.close_dialog();
        cx.notify();
    }

    pub fn on_create_submit(&mut self, cx: &mut Context<Self>) {
        if self.state.is_dialog_loading() {
            return;
        }

        let DialogState::CreateProject { form, request, .. } = self.state.dialog() else {
            tracing::error!(
                event = "ui.create_submit.invalid_state",
                "on_create_submit called when CreateProject dialog not open"
            );
            return;
        };
        let name = form.name.clone();
        let request = *request;
        let api = Arc::clone(&self.api);

        self.state.set_dialog_loading();
        cx.notify();

        cx.spawn(async move |this, cx: &mut gpui::AsyncApp| {
            let result = cx
                .background_executor()
                .spawn(async move { actions::create_project(api.as_ref(), &name) })
                .await;

            if let Err(e) = this.update(cx, |view, cx| {
                view.state.clear_dialog_loading();
                match result {
                    Ok(project) => {
                        if view
                            .state
                            .project_created(&mut view.selector, &project, request)
                        {
                            view.refresh_projects(cx);
                        }
                    }
                    Err(e) => {
                        tracing::warn!(event = "ui.create_submit.error_displayed", error = %e);
                        view.state.set_dialog_error(e);
                    }
                }
                cx.notify();
            }) {
                tracing::warn!(
                    event = "ui.create_submit.view_update_failed",
                    error = ?e
                );
            }
        })
        .detach();
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let key_str = event.keystroke.key.to_string();

        match self.state.dialog_mut() {
            DialogState::None => {
                if key_str == "escape" && self.selector.is_expanded() {
                    self.on_close_dropdown(cx);
                }
            }

            DialogState::CreateProject { form, .. } => match key_str.as_str() {
                "backspace" => {
                    form.name.pop();
                    cx.notify();
                }
                "enter" => {
                    self.on_create_submit(cx);
                }
                "escape" => {
                    self.on_create_cancel(cx);
                }
                "space" => {
                    form.name.push(' ');
                    cx.notify();
                }
                key if key.chars().count() == 1 => {
                    if let Some(c) = key.chars().next()
                        && !c.is_control()
                    {
                        form.name.push(c);
                        cx.notify();
                    }
                }
                _ => {
                    // Ignore other keys
                }
            },
        }
    }

    fn render_main_pane(&self) -> impl IntoElement {
        let (title, subtitle) = match self.state.current_project() {
            Some(project) => (
                project.name.clone(),
                format!("Project #{}", project.id),
            ),
            None => (
                "Welcome to Porter".to_string(),
                "Create a project to get started.".to_string(),
            ),
        };

        div()
            .flex_1()
            .h_full()
            .px_6()
            .py_6()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(rgb(0xffffff))
                    .child(title),
            )
            .child(div().text_color(rgb(0x888888)).child(subtitle))
    }
}

impl Focusable for MainView {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for MainView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let selector_view = self.selector.view(&self.state);
        let dropdown_options = match &selector_view {
            SelectorView::Selector {
                expanded: true,
                options,
                ..
            } => Some(options.as_slice()),
            _ => None,
        };

        div()
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .size_full()
            .relative()
            .flex()
            .flex_row()
            .bg(rgb(0x1e1e1e))
            // Sidebar
            .child(
                div()
                    .w(px(project_section::SIDEBAR_WIDTH))
                    .h_full()
                    .flex_none()
                    .bg(rgb(0x252525))
                    .border_r_1()
                    .border_color(rgb(0x333333))
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .px_4()
                            .py_3()
                            .border_b_1()
                            .border_color(rgb(0x333333))
                            .text_lg()
                            .font_weight(FontWeight::BOLD)
                            .text_color(rgb(0xffffff))
                            .child("Porter"),
                    )
                    .child(
                        div()
                            .px_4()
                            .pt_3()
                            .text_xs()
                            .text_color(rgb(0x888888))
                            .child("PROJECT"),
                    )
                    .child(project_section::render_project_section(&selector_view, cx)),
            )
            .child(self.render_main_pane())
            // Click-away backdrop, then the menu above it
            .when_some(dropdown_options, |this, options| {
                this.child(
                    div()
                        .id("project-dropdown-backdrop")
                        .absolute()
                        .inset_0()
                        .occlude()
                        .on_mouse_up(
                            gpui::MouseButton::Left,
                            cx.listener(|view, _, _, cx| {
                                view.on_close_dropdown(cx);
                            }),
                        ),
                )
                .child(project_section::render_project_dropdown(options, cx))
            })
            .when(self.state.dialog().is_create_project(), |this| {
                this.child(create_project_dialog::render_create_project_dialog(
                    &self.state,
                    cx,
                ))
            })
    }
}
