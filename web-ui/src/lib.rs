// Web UI library for the Educator graph editor
//
// This crate provides the Yew components used around graph generation:
// the generation error display and the saved-layout panel.

use educator_graph_api_client::ClientConfig;
use educator_graph_core::{GraphPositions, NodePosition};
use yew::prelude::*;

pub mod components;
pub mod messages;

// Re-export components
pub use components::*;

/// Graph shown by the standalone app
pub const SAMPLE_GRAPH_ID: &str = "learning-architecture-sample";

/// Node layout of the sample learning architecture
pub fn sample_positions() -> GraphPositions {
    [
        ("learning-goals", NodePosition::new(0.0, 0.0)),
        ("prerequisites", NodePosition::new(-220.0, 140.0)),
        ("core-content", NodePosition::new(0.0, 140.0)),
        ("practice", NodePosition::new(220.0, 140.0)),
        ("assessment", NodePosition::new(0.0, 280.0)),
    ]
    .into_iter()
    .map(|(id, position)| (id.to_string(), position))
    .collect()
}

/// Main application component
#[function_component(App)]
pub fn app() -> Html {
    let config = ClientConfig::default();

    html! {
        <div class="app-container">
            <div class="main-content">
                <LayoutPanel
                    graph_id={SAMPLE_GRAPH_ID}
                    base_url={config.base_url().to_string()}
                    positions={sample_positions()}
                    layout_algorithm={Some(AttrValue::from("manual"))}
                />
            </div>
        </div>
    }
}
