use std::panic::{self, PanicHookInfo};

use web_sys::Element;

/// Static copy of the fault boundary prompt. Once a wasm instance has
/// panicked no component can render again, so "Try again" reloads the app.
const RECOVERY_PROMPT: &str = r#"<div class="min-vh-100 d-flex align-items-center justify-content-center">
  <div class="card shadow p-5 text-center">
    <h1 class="h3 mb-3">Oops, something went wrong.</h1>
    <p class="text-body-secondary mb-4">We're sorry for the inconvenience. Please try refreshing the page.</p>
    <a class="btn btn-primary" href="/">Try again</a>
  </div>
</div>"#;

/// Intercepts panics raised while rendering: logs them, forwards them to the
/// browser console and replaces the page with the recovery prompt.
pub fn install() {
    panic::set_hook(Box::new(report));
}

fn report(info: &PanicHookInfo<'_>) {
    log::error!("Unhandled panic, details={info}");
    console_error_panic_hook::hook(info);

    #[cfg(target_arch = "wasm32")]
    if let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    {
        show_recovery_prompt(&body);
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn show_recovery_prompt(root: &Element) {
    root.set_inner_html(RECOVERY_PROMPT);
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;
    use crate::test_support::mount_point;

    #[wasm_bindgen_test]
    fn recovery_prompt_replaces_the_page() {
        let root = mount_point();
        root.set_inner_html("<p>stale view</p>");

        show_recovery_prompt(&root);

        let html = root.inner_html();
        assert!(html.contains("Oops, something went wrong."));
        assert!(!html.contains("stale view"));
        assert!(matches!(root.query_selector("a[href='/']"), Ok(Some(_))));
    }
}
