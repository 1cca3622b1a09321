//! Tag-edit form flow, driven end to end through the controller.

mod common;

use common::fake_http::{FakeHttp, Request};
use common::fixtures;

use linkstash::{Handled, InteractionController, MemoryPage, Page, PageEvent};

fn filled_page() -> MemoryPage {
    let mut page = MemoryPage::new();
    page.append_to_root(fixtures::edit_form("/l/abc123", "")).unwrap();
    page.set_input_value("url", "http://x");
    page.set_input_value("name", "n");
    page.set_input_value("description", "d");
    page.set_checked("private", true);
    page
}

#[tokio::test]
async fn test_submit_is_always_intercepted() {
    let page = filled_page();
    let mut controller = InteractionController::mount(page, FakeHttp::ok()).unwrap();

    // Any handled submit (never `Ignored`) tells the host binding the
    // browser's native navigation-based submission was suppressed.
    let handled = controller.handle(PageEvent::submit("edit_link")).await.unwrap();
    assert_ne!(handled, Handled::Ignored);
}

#[tokio::test]
async fn test_post_body_and_endpoint() {
    let page = filled_page();
    let http = FakeHttp::ok();
    let mut controller = InteractionController::mount(page, http.clone()).unwrap();
    let tags = &mut controller.edit_form_mut().unwrap().tags;
    tags.add("a");
    tags.add("b");

    controller.handle(PageEvent::submit("edit_link")).await.unwrap();

    let recorded = http.recorded();
    assert_eq!(recorded.len(), 1);
    let Request::Post { url, body } = &recorded[0] else {
        panic!("expected a POST, got {recorded:?}");
    };
    assert_eq!(url, "/l/abc123");
    insta::assert_snapshot!(
        body,
        @r#"{"url":"http://x","name":"n","description":"d","private":true,"tags":["a","b"]}"#
    );
}

#[tokio::test]
async fn test_response_redirect_navigates_there() {
    let page = filled_page();
    let http = FakeHttp::with_post_response(r#"{"redirect":"/done"}"#);
    let mut controller = InteractionController::mount(page, http).unwrap();

    let handled = controller.handle(PageEvent::submit("edit_link")).await.unwrap();
    assert_eq!(
        handled,
        Handled::Submitted {
            url: "/done".to_string()
        }
    );
    assert_eq!(controller.page().location(), Some("/done"));
}

#[tokio::test]
async fn test_response_without_redirect_falls_back_to_action() {
    let page = filled_page();
    let http = FakeHttp::with_post_response("{}");
    let mut controller = InteractionController::mount(page, http).unwrap();

    let handled = controller.handle(PageEvent::submit("edit_link")).await.unwrap();
    assert_eq!(
        handled,
        Handled::SubmittedFellBack {
            url: "/l/abc123".to_string(),
            network_failed: false,
        }
    );
    assert_eq!(controller.page().location(), Some("/l/abc123"));
}

#[tokio::test]
async fn test_unparseable_response_falls_back_to_action() {
    let page = filled_page();
    let http = FakeHttp::with_post_response("<html>oops</html>");
    let mut controller = InteractionController::mount(page, http).unwrap();

    let handled = controller.handle(PageEvent::submit("edit_link")).await.unwrap();
    assert_eq!(
        handled,
        Handled::SubmittedFellBack {
            url: "/l/abc123".to_string(),
            network_failed: false,
        }
    );
    assert_eq!(controller.page().location(), Some("/l/abc123"));
}

#[tokio::test]
async fn test_network_failure_falls_back_to_action() {
    let page = filled_page();
    let http = FakeHttp::ok().fail_next(1);
    let mut controller = InteractionController::mount(page, http).unwrap();

    let handled = controller.handle(PageEvent::submit("edit_link")).await.unwrap();
    assert_eq!(
        handled,
        Handled::SubmittedFellBack {
            url: "/l/abc123".to_string(),
            network_failed: true,
        }
    );
    assert_eq!(controller.page().location(), Some("/l/abc123"));
}

#[tokio::test]
async fn test_tags_seeded_from_rendered_value_survive_submission() {
    let mut page = MemoryPage::new();
    page.append_to_root(fixtures::edit_form("/l/abc123", "old,tags")).unwrap();
    let http = FakeHttp::ok();
    let form = linkstash::EditForm::bind(&page).unwrap().unwrap();

    form.submit(&mut page, &http).await.unwrap();

    let Request::Post { body, .. } = &http.recorded()[0] else {
        panic!("expected a POST");
    };
    assert!(body.contains(r#""tags":["old","tags"]"#));
}

#[tokio::test]
async fn test_page_without_tag_input_ignores_submit() {
    // Tag input absent: the flow never binds, submission is untouched.
    let page = fixtures::listing_page(&["1"]);
    let mut controller = InteractionController::mount(page, FakeHttp::ok()).unwrap();
    let handled = controller.handle(PageEvent::submit("edit_link")).await.unwrap();
    assert_eq!(handled, Handled::Ignored);
    assert_eq!(controller.page().location(), None);
}
