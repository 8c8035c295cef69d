use crate::common::*;
use client::JoinFormHandler;

#[test]
fn install_without_form_returns_none() {
    let page = MemoryPage {
        form: None,
        status: Some(MemoryStatus::default()),
    };
    let transport = ScriptedTransport::default();

    let handler = JoinFormHandler::install(&page, transport.clone());

    assert!(handler.is_none());
    assert!(transport.requests().is_empty());
    assert_eq!(page.status_container().writes(), 0);
}

#[test]
fn install_on_empty_page_returns_none() {
    let handler = JoinFormHandler::install(&MemoryPage::default(), ScriptedTransport::default());
    assert!(handler.is_none());
}

#[test]
fn install_with_form_and_status_binds() {
    let page = MemoryPage::with_join_form(MemoryForm::join("Alice", "2"));
    let handler = JoinFormHandler::install(&page, ScriptedTransport::default());
    assert!(handler.is_some());
}

#[test]
fn install_without_status_container_still_binds() {
    let page = MemoryPage {
        form: Some(MemoryForm::join("Alice", "2")),
        status: None,
    };
    let handler = JoinFormHandler::install(&page, ScriptedTransport::default());
    assert!(handler.is_some());
}

#[test]
fn install_does_not_touch_the_page() {
    let page = MemoryPage::with_join_form(MemoryForm::join("Alice", "2"));
    let _handler = JoinFormHandler::install(&page, ScriptedTransport::default());

    assert_eq!(page.join_form().value("name").as_deref(), Some("Alice"));
    assert_eq!(page.join_form().resets(), 0);
    assert_eq!(page.status_container().content(), None);
}
