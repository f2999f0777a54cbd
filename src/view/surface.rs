use super::ViewTree;

/// Something that displays rendered views: the terminal, the CLI printer,
/// or a test double.
pub trait Surface {
    /// Replace everything shown with `view`
    fn show(&mut self, view: &ViewTree);
    /// Update only the remaining-count label of the detail region
    fn show_count(&mut self, label: &str);
}

/// Keeps the most recently shown tree, for callers that paint it later
/// (the TUI draw loop, the CLI printer)
#[derive(Debug, Clone, Default)]
pub struct RetainedSurface {
    pub view: ViewTree,
}

impl RetainedSurface {
    /// Flip a task row in place without a re-render, the way a checkbox
    /// updates itself when clicked
    pub fn set_row_checked(&mut self, task_id: &str, checked: bool) {
        if let Some(row) = self
            .view
            .detail
            .as_mut()
            .and_then(|d| d.find_task_mut(task_id))
        {
            row.complete = checked;
        }
    }
}

impl Surface for RetainedSurface {
    fn show(&mut self, view: &ViewTree) {
        self.view = view.clone();
    }

    fn show_count(&mut self, label: &str) {
        if let Some(detail) = &mut self.view.detail {
            detail.remaining = label.to_string();
        }
    }
}

/// One recorded call on a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Show(ViewTree),
    ShowCount(String),
}

/// Records every call instead of drawing anything
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent full view shown, if any
    pub fn last_view(&self) -> Option<&ViewTree> {
        self.calls.iter().rev().find_map(|c| match c {
            SurfaceCall::Show(view) => Some(view),
            SurfaceCall::ShowCount(_) => None,
        })
    }

    pub fn last_call(&self) -> Option<&SurfaceCall> {
        self.calls.last()
    }
}

impl Surface for RecordingSurface {
    fn show(&mut self, view: &ViewTree) {
        self.calls.push(SurfaceCall::Show(view.clone()));
    }

    fn show_count(&mut self, label: &str) {
        self.calls.push(SurfaceCall::ShowCount(label.to_string()));
    }
}
