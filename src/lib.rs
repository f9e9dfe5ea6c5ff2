mod app;
mod components;
mod config;

pub use app::App;
pub use components::ui::{
    compose_classes, input_class, merge_classes, spinner_class, ClassFragment, InputType,
    LoadingIndicator, SpinnerSize, StyledInput,
};
pub use config::{parse_spinner_size, ConfigError, ShowcaseConfig};

use leptos::logging::log;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    log!("mounting widget showcase");
    mount_to_body(App);
}
