mod app;
mod components;
mod pages;
mod panic_hook;
mod router;
mod seed;
mod session;
#[cfg(all(test, target_arch = "wasm32"))]
mod test_support;

use app::App;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    panic_hook::install();
    yew::Renderer::<App>::new().render();
}
