//! Greeting for developers who open the console

use wasm_bindgen::prelude::*;

fn banner() -> String {
    format!(
        r#"
   ___     _
  | __|_ _| |_ _ _ ___ _ __ _  _
  | _|| ' \  _| '_/ _ \ '_ \ || |
  |___|_||_\__|_| \___/ .__/\_, |
                      |_|   |__/
  AI assisted trading on Starknet
  v{}
"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Print the banner and a pointer to the bot.
pub fn print_banner() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{}", banner())),
        &JsValue::from_str("color: #22c55e; font-family: monospace; font-size: 11px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%c(^_^) Trades happen in the Telegram bot, not in this page."),
        &JsValue::from_str("color: #a1a1aa;"),
    );
}
