use leptos::*;
use leptos_router::{RouterIntegrationContext, ServerIntegration};

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Runs `f` in a fresh runtime with resource fetchers disabled.
pub fn with_suppressed_resources<T>(f: impl FnOnce() -> T) -> T {
    leptos_reactive::suppress_resource_load(true);
    let result = with_runtime(f);
    leptos_reactive::suppress_resource_load(false);
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_suppressed_resources(|| view().into_view().render_to_string().to_string())
}

/// Renders `view` as if the browser were at `path`, so `<Router>` and
/// `use_params_map` resolve against it.
pub fn render_at_path<F, N>(path: &str, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let url = format!("http://localhost{}", path);
    render_to_string(move || {
        provide_context(RouterIntegrationContext::new(ServerIntegration { path: url }));
        view()
    })
}
