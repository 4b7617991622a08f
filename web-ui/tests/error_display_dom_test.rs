// Browser tests for the retry control (wasm-pack test --headless --firefox web-ui)
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use educator_graph_web_ui::{ErrorDisplay, ErrorDisplayProps};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::Callback;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(error: &str, on_retry: Callback<()>) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    yew::Renderer::<ErrorDisplay>::with_root_and_props(
        root.clone(),
        ErrorDisplayProps {
            error: error.to_string().into(),
            on_retry,
        },
    )
    .render();

    root
}

#[wasm_bindgen_test]
async fn test_retry_called_once_per_click() {
    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    let root = mount("", Callback::from(move |_: ()| counter.set(counter.get() + 1)));
    TimeoutFuture::new(0).await;

    let button: web_sys::HtmlElement = root
        .query_selector("button.retry-btn")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();

    assert_eq!(clicks.get(), 0);
    button.click();
    assert_eq!(clicks.get(), 1);
    button.click();
    assert_eq!(clicks.get(), 2);
}

#[wasm_bindgen_test]
async fn test_fallback_text_in_dom() {
    let root = mount("", Callback::from(|_: ()| ()));
    TimeoutFuture::new(0).await;

    let text = root.text_content().unwrap();
    assert!(text.contains("Generation Failed"));
    assert!(text.contains("unexpected issue"));
}
