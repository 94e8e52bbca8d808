/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

#[cfg(target_arch = "wasm32")]
fn main() {
    console_log::init_with_level(if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .expect("error initializing logger");
    console_error_panic_hook::set_once();

    if let Err(e) = flash_messages::start() {
        wasm_bindgen::throw_str(&e.to_string());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("flash-messages runs in the browser; build it for wasm32-unknown-unknown");
}
