//! Page fixtures mirroring the server-rendered templates.

use linkstash::{ElementSpec, MemoryPage};

/// One deletable link row: `link_<id>` wrapping the `delete_<id>` affordance.
pub fn link_row(id: &str) -> ElementSpec {
    ElementSpec::new("div")
        .id(format!("link_{id}"))
        .child(ElementSpec::new("span").text(format!("link {id}")))
        .child(
            ElementSpec::new("a")
                .id(format!("delete_{id}"))
                .class("deletelink")
                .attr("data-url", format!("/api/v1/link/{id}"))
                .attr("data-link-id", id),
        )
}

/// The edit-link form with its four named fields and the marked tag input.
pub fn edit_form(action: &str, tag_value: &str) -> ElementSpec {
    ElementSpec::new("form")
        .attr("name", "edit_link")
        .attr("action", action)
        .child(ElementSpec::new("input").attr("name", "url"))
        .child(ElementSpec::new("input").attr("name", "name"))
        .child(ElementSpec::new("input").attr("name", "description"))
        .child(
            ElementSpec::new("input")
                .attr("name", "private")
                .attr("type", "checkbox"),
        )
        .child(
            ElementSpec::new("input")
                .id("tag_input")
                .class("tagtest")
                .attr("name", "tags")
                .attr("value", tag_value),
        )
}

/// The scoped search field.
pub fn search_field(user: &str) -> ElementSpec {
    ElementSpec::new("input")
        .id("search_text")
        .attr("data-user", user)
}

/// A page carrying all three flows, like the link-list view for a logged-in
/// user.
pub fn full_page() -> MemoryPage {
    let mut page = MemoryPage::new();
    page.append_to_root(link_row("1")).unwrap();
    page.append_to_root(link_row("2")).unwrap();
    page.append_to_root(edit_form("/l/abc123", "")).unwrap();
    page.append_to_root(search_field("alice")).unwrap();
    page
}

/// A page with only link rows, like a read-only listing.
pub fn listing_page(ids: &[&str]) -> MemoryPage {
    let mut page = MemoryPage::new();
    for id in ids {
        page.append_to_root(link_row(id)).unwrap();
    }
    page
}
