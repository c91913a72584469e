use leptos::{html::AnyElement, *};

pub const CONTAINER_DISPLAY_NAME: &str = "Container";

pub const CONTAINER_BASE_CLASS: &str = "w-full max-w-7xl mx-auto px-4 sm:px-6 lg:px-8";

/// Wrapper elements a [`Container`] may render as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ContainerTag {
    #[default]
    Div,
    Section,
    Article,
    Main,
}

impl ContainerTag {
    pub const ALL: [ContainerTag; 4] = [
        ContainerTag::Div,
        ContainerTag::Section,
        ContainerTag::Article,
        ContainerTag::Main,
    ];

    pub fn tag_name(&self) -> &'static str {
        match self {
            ContainerTag::Div => "div",
            ContainerTag::Section => "section",
            ContainerTag::Article => "article",
            ContainerTag::Main => "main",
        }
    }

    fn element(&self) -> HtmlElement<AnyElement> {
        match self {
            ContainerTag::Div => html::div().into_any(),
            ContainerTag::Section => html::section().into_any(),
            ContainerTag::Article => html::article().into_any(),
            ContainerTag::Main => html::main().into_any(),
        }
    }
}

fn merge_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of a `class` attribute value; reactive values are read in place.
fn class_text(value: &Attribute) -> Option<String> {
    match value {
        Attribute::String(value) => Some(value.to_string()),
        Attribute::Option(value) => value.as_ref().map(|value| value.to_string()),
        Attribute::Fn(value) => class_text(&value()),
        _ => None,
    }
}

/// Shared page-width wrapper.
///
/// Renders exactly one element chosen by `tag`. The class list always starts
/// with [`CONTAINER_BASE_CLASS`]; `class` and any `attr:class` are appended,
/// and a reactive `attr:class` keeps the whole list reactive. Every other
/// `attr:*` is forwarded unchanged except `data-component`, which stays
/// [`CONTAINER_DISPLAY_NAME`]. `node_ref` is bound to the rendered element.
#[component]
pub fn Container(
    #[prop(optional)] tag: ContainerTag,
    #[prop(optional, into)] class: String,
    #[prop(optional)] node_ref: Option<NodeRef<AnyElement>>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let mut class_attrs = Vec::new();
    let mut passthrough = Vec::with_capacity(attributes.len());
    for (name, value) in attributes {
        match name {
            "class" => class_attrs.push(value),
            "data-component" => {
                log::warn!("{}: data-component is reserved, ignoring override", CONTAINER_DISPLAY_NAME)
            }
            _ => passthrough.push((name, value)),
        }
    }

    let is_reactive = class_attrs
        .iter()
        .any(|value| matches!(value, Attribute::Fn(_)));
    let base = merge_classes([CONTAINER_BASE_CLASS, class.as_str()]);
    let class_list = move || {
        let extra: Vec<String> = class_attrs.iter().filter_map(class_text).collect();
        merge_classes(std::iter::once(base.as_str()).chain(extra.iter().map(String::as_str)))
    };

    let element = if is_reactive {
        tag.element().attr("class", class_list)
    } else {
        tag.element().attr("class", class_list())
    };
    let mut element = element.attr("data-component", CONTAINER_DISPLAY_NAME);
    for (name, value) in passthrough {
        element = element.attr(name, value);
    }
    if let Some(node_ref) = node_ref {
        element = element.node_ref(node_ref);
    }
    if let Some(children) = children {
        element = element.child(children().into_view());
    }
    element
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn opening_tag(html: &str, tag: &str) -> String {
        let start = html
            .find(&format!("<{}", tag))
            .unwrap_or_else(|| panic!("no <{}> in {}", tag, html));
        let end = html[start..].find('>').unwrap() + start;
        html[start..=end].to_string()
    }

    #[test]
    fn renders_each_tag_with_base_and_caller_class() {
        for tag in ContainerTag::ALL {
            let html = render_to_string(move || {
                view! { <Container tag=tag class="py-6 custom">"body"</Container> }
            });
            let open = opening_tag(&html, tag.tag_name());
            assert!(open.contains(CONTAINER_BASE_CLASS), "{}", open);
            assert!(open.contains("py-6 custom"), "{}", open);
            assert!(html.contains("body"));
            assert!(html.contains(&format!("</{}>", tag.tag_name())));
        }
    }

    #[test]
    fn renders_a_single_element_without_wrappers() {
        let html = render_to_string(|| {
            view! { <Container tag=ContainerTag::Section>"x"</Container> }
        });
        assert_eq!(html.matches("<section").count(), 1);
        assert!(!html.contains("<div"));
    }

    #[test]
    fn forwards_passthrough_attributes_unchanged() {
        let html = render_to_string(|| {
            view! {
                <Container
                    tag=ContainerTag::Article
                    attr:id="issue-panel"
                    attr:data-testid="panel"
                    attr:aria-label="課題詳細"
                >
                    "content"
                </Container>
            }
        });
        let open = opening_tag(&html, "article");
        assert!(open.contains(r#"id="issue-panel""#), "{}", open);
        assert!(open.contains(r#"data-testid="panel""#), "{}", open);
        assert!(open.contains(r#"aria-label="課題詳細""#), "{}", open);
    }

    #[test]
    fn passthrough_class_is_merged_not_substituted() {
        let html = render_to_string(|| {
            view! { <Container class="caller" attr:class="extra">"x"</Container> }
        });
        let open = opening_tag(&html, "div");
        assert!(open.contains(CONTAINER_BASE_CLASS), "{}", open);
        assert!(open.contains("caller extra"), "{}", open);
        assert_eq!(open.matches("class=").count(), 1, "{}", open);
    }

    #[test]
    fn reactive_passthrough_class_is_merged() {
        let html = render_to_string(|| {
            let active = create_rw_signal(true);
            view! {
                <Container
                    class="caller"
                    attr:class=move || if active.get() { "is-active".to_string() } else { String::new() }
                >
                    "x"
                </Container>
            }
        });
        let open = opening_tag(&html, "div");
        assert!(open.contains(CONTAINER_BASE_CLASS), "{}", open);
        assert!(open.contains("caller is-active"), "{}", open);
        assert_eq!(open.matches("class=").count(), 1, "{}", open);
    }

    #[test]
    fn exposes_display_name_for_tooling() {
        let html = render_to_string(|| view! { <Container>"x"</Container> });
        assert!(html.contains(r#"data-component="Container""#));
    }

    #[test]
    fn display_name_cannot_be_overridden() {
        let html = render_to_string(|| {
            view! { <Container attr:data-component="Override">"x"</Container> }
        });
        let open = opening_tag(&html, "div");
        assert_eq!(open.matches("data-component=").count(), 1, "{}", open);
        assert!(open.contains(r#"data-component="Container""#), "{}", open);
    }

    #[test]
    fn renders_empty_element_without_children() {
        let html = render_to_string(|| view! { <Container tag=ContainerTag::Main/> });
        let open = opening_tag(&html, "main");
        assert!(open.contains(CONTAINER_BASE_CLASS));
        assert!(html.contains("</main>"));
    }
}
