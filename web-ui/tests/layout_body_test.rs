// Server-side rendering tests for the saved layout panel body

use educator_graph_core::{GetPositionsResponse, GraphPositions, NodePosition};
use educator_graph_web_ui::{LayoutBody, LayoutBodyProps, PanelState, ERROR_TITLE};
use yew::{Callback, ServerRenderer};

async fn render(state: PanelState) -> String {
    ServerRenderer::<LayoutBody>::with_props(move || LayoutBodyProps {
        state,
        on_retry: Callback::from(|_: ()| ()),
    })
    .hydratable(false)
    .render()
    .await
}

#[tokio::test]
async fn test_absent_layout_is_not_an_error() {
    let html = render(PanelState::Absent).await;

    assert!(html.contains("No saved layout yet"));
    assert!(!html.contains(ERROR_TITLE));
}

#[tokio::test]
async fn test_loaded_layout_shows_node_count() {
    let mut positions = GraphPositions::new();
    positions.insert("goals".to_string(), NodePosition::new(0.0, 0.0));
    positions.insert("skills".to_string(), NodePosition::new(120.0, 40.0));

    let html = render(PanelState::Loaded(GetPositionsResponse {
        success: true,
        graph_id: "g1".to_string(),
        positions,
        metadata: None,
        saved_at: None,
    }))
    .await;

    assert!(html.contains("2 saved node positions"));
}

#[tokio::test]
async fn test_failed_load_renders_error_display() {
    let html = render(PanelState::Failed("Database unavailable".to_string())).await;

    assert!(html.contains(ERROR_TITLE));
    assert!(html.contains("Database unavailable"));
    assert!(html.contains("retry-btn"));
}

#[tokio::test]
async fn test_loading_state() {
    let html = render(PanelState::Loading).await;

    assert!(html.contains("Loading saved layout..."));
}
