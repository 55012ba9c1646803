use porter_core::{Cluster, Project};

/// Widest a column may grow before its cells are truncated.
const MAX_COLUMN_WIDTH: usize = 50;

/// Box-drawn table with columns sized to their content.
pub struct TableFormatter {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl TableFormatter {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Projects as `ID | NAME`, marking the current one.
    pub fn projects(projects: &[Project], current_id: Option<u64>) -> Self {
        let mut table = Self::new(vec!["ID", "Name"]);
        for project in projects {
            let name = if Some(project.id) == current_id {
                format!("{} (current project)", project.name)
            } else {
                project.name.clone()
            };
            table.push_row(vec![project.id.to_string(), name]);
        }
        table
    }

    pub fn clusters(clusters: &[Cluster]) -> Self {
        let mut table = Self::new(vec!["ID", "Name", "Server"]);
        for cluster in clusters {
            table.push_row(vec![
                cluster.id.to_string(),
                cluster.name.clone(),
                cluster.server.clone(),
            ]);
        }
        table
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn print_table(&self) {
        print!("{}", self.render());
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.len()))
                    .max()
                    .unwrap_or(0)
                    .min(MAX_COLUMN_WIDTH)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        out.push_str(&border('┌', '┬', '┐', &widths));
        out.push_str(&line(self.headers.iter().copied(), &widths));
        out.push_str(&border('├', '┼', '┤', &widths));
        for row in &self.rows {
            out.push_str(&line(row.iter().map(String::as_str), &widths));
        }
        out.push_str(&border('└', '┴', '┘', &widths));

        out
    }
}

fn border(left: char, middle: char, right: char, widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}\n", left, segments.join(&middle.to_string()), right)
}

fn line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let cells: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!(" {} ", truncate(cell, *width)))
        .collect();
    format!("│{}│\n", cells.join("│"))
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Counts characters, not bytes, so multi-byte names are cut safely.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
