#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs available in the assistant sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarTab {
    #[default]
    Context,
    Documents,
    Ocr,
}
