use super::*;

#[test]
fn sidebar_tab_default_is_context() {
    assert_eq!(SidebarTab::default(), SidebarTab::Context);
}

#[test]
fn sidebar_tab_variants_are_distinct() {
    assert_ne!(SidebarTab::Context, SidebarTab::Documents);
    assert_ne!(SidebarTab::Context, SidebarTab::Ocr);
    assert_ne!(SidebarTab::Documents, SidebarTab::Ocr);
}
