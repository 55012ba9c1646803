use crate::api::{self, ApiError, ProjectsApi};
use crate::errors::PorterError;
use crate::selector::context::{CreateProjectRequest, ModalRequest, ProjectContext};
use crate::selector::errors::SelectorError;
use crate::selector::view::{ProjectOption, SelectorView};
use crate::types::Project;

/// Identifies one fetch. Only the most recently issued ticket is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// Result of applying a fetch to the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The list was replaced.
    Applied {
        count: usize,
        selection: SelectionChange,
    },
    /// The fetch failed; list and current project are untouched.
    Failed,
    /// A newer fetch was issued after this one; result discarded.
    Stale,
}

/// How the current project changed while applying a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Unchanged,
    /// The project with this id was selected.
    Selected(u64),
    /// The current project vanished and the list is empty.
    Cleared,
}

/// Project list and dropdown state for the project section.
///
/// Invariant: the context's current project is a member (by id) of the last
/// fetched `projects`, or absent. The selector only sets it from that list.
#[derive(Debug, Clone, Default)]
pub struct ProjectSelector {
    /// Last successfully fetched list, in server order.
    projects: Vec<Project>,
    /// Dropdown visibility.
    expanded: bool,
    /// Generation of the most recently issued fetch.
    latest_generation: u64,
    loading: bool,
    /// Message of the last failed fetch, cleared by the next success.
    last_error: Option<String>,
    /// Project to select once a successful fetch lists it.
    preferred: Option<u64>,
}

impl ProjectSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Select `project_id` on the next successful fetch that lists it.
    ///
    /// Used after creating a project: the new project only becomes current
    /// once it is part of the fetched list.
    pub fn prefer_project(&mut self, project_id: u64) {
        tracing::debug!(event = "core.selector.preference_set", project_id = project_id);
        self.preferred = Some(project_id);
    }

    pub fn preferred_project(&self) -> Option<u64> {
        self.preferred
    }

    /// Start a fetch. Any fetch issued earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_generation += 1;
        self.loading = true;

        tracing::debug!(
            event = "core.selector.fetch_started",
            generation = self.latest_generation
        );

        FetchTicket {
            generation: self.latest_generation,
        }
    }

    /// Apply the result of a fetch started with [`begin_fetch`](Self::begin_fetch).
    ///
    /// On success the list is replaced and, when no listed project is
    /// current, the first project is selected. On failure the error is logged
    /// and recorded, and nothing else changes.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Project>, ApiError>,
        ctx: &mut dyn ProjectContext,
    ) -> FetchOutcome {
        if ticket.generation != self.latest_generation {
            tracing::debug!(
                event = "core.selector.fetch_discarded",
                generation = ticket.generation,
                latest = self.latest_generation
            );
            return FetchOutcome::Stale;
        }

        self.loading = false;

        let projects = match result {
            Ok(projects) => projects,
            Err(e) => {
                tracing::warn!(
                    event = "core.selector.fetch_failed",
                    error = %e,
                    error_code = e.error_code()
                );
                self.last_error = Some(e.to_string());
                return FetchOutcome::Failed;
            }
        };

        self.last_error = None;
        self.projects = projects;
        let preferred = self.preferred.take();
        let selection = self.reconcile_current(preferred, ctx);

        tracing::info!(
            event = "core.selector.fetch_completed",
            count = self.projects.len(),
            selection = ?selection
        );

        FetchOutcome::Applied {
            count: self.projects.len(),
            selection,
        }
    }

    /// Fetch synchronously through `api` and apply the result.
    pub fn fetch(&mut self, api: &dyn ProjectsApi, ctx: &mut dyn ProjectContext) -> FetchOutcome {
        let ticket = self.begin_fetch();
        let result = api::load_user_projects(api, ctx.user_id()).map(|loaded| loaded.projects);
        self.complete_fetch(ticket, result, ctx)
    }

    /// Select the preferred project when listed. Otherwise keep the current
    /// project when it is listed, else fall back to the first listed project
    /// (or clear when the list is empty).
    fn reconcile_current(
        &self,
        preferred: Option<u64>,
        ctx: &mut dyn ProjectContext,
    ) -> SelectionChange {
        let current_id = ctx.current_project().map(|p| p.id);

        if let Some(id) = preferred
            && current_id != Some(id)
            && let Some(project) = self.projects.iter().find(|p| p.id == id)
        {
            ctx.set_current_project(project.clone());
            return SelectionChange::Selected(id);
        }

        if current_id.is_some_and(|id| self.projects.iter().any(|p| p.id == id)) {
            return SelectionChange::Unchanged;
        }

        match (self.projects.first(), current_id) {
            (Some(first), _) => {
                ctx.set_current_project(first.clone());
                SelectionChange::Selected(first.id)
            }
            (None, Some(stale_id)) => {
                tracing::warn!(
                    event = "core.selector.current_project_missing",
                    project_id = stale_id
                );
                ctx.clear_current_project();
                SelectionChange::Cleared
            }
            (None, None) => SelectionChange::Unchanged,
        }
    }

    /// Flip dropdown visibility, returning the new state.
    pub fn toggle_expanded(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Close the dropdown (click on the overlay outside it).
    pub fn close_dropdown(&mut self) {
        self.expanded = false;
    }

    /// Make the listed project at `index` current.
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::IndexOutOfRange` if `index` is not a listed position.
    pub fn select(
        &mut self,
        index: usize,
        ctx: &mut dyn ProjectContext,
    ) -> Result<(), SelectorError> {
        let project = self
            .projects
            .get(index)
            .cloned()
            .ok_or(SelectorError::IndexOutOfRange {
                index,
                len: self.projects.len(),
            })?;

        self.expanded = false;

        tracing::info!(
            event = "core.selector.project_selected",
            project_id = project.id,
            name = %project.name
        );

        ctx.set_current_project(project);
        Ok(())
    }

    /// Ask the application to open the create-project modal.
    pub fn request_create(&mut self, ctx: &mut dyn ProjectContext) {
        self.expanded = false;
        tracing::info!(event = "core.selector.create_requested");
        ctx.open_modal(ModalRequest::CreateProject(CreateProjectRequest::default()));
    }

    /// Describe what to render given the current context.
    pub fn view<'a>(&'a self, ctx: &'a dyn ProjectContext) -> SelectorView<'a> {
        let error = self.last_error.as_deref();

        let Some(current) = ctx.current_project() else {
            return SelectorView::Initialize { error };
        };

        let options = if self.expanded {
            self.projects
                .iter()
                .enumerate()
                .map(|(index, project)| ProjectOption {
                    index,
                    project,
                    selected: project.same_as(current),
                })
                .collect()
        } else {
            Vec::new()
        };

        SelectorView::Selector {
            current,
            expanded: self.expanded,
            options,
            error,
        }
    }
}
