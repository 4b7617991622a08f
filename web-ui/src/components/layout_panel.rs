// Saved layout panel: load, save and reset node positions for one graph

use std::rc::Rc;

use educator_graph_api_client::{ApiError, ClientConfig, PositionStoreClient};
use educator_graph_core::{
    GetPositionsResponse, GraphPositions, PositionsMetadata, SavePositionsRequest,
    SavePositionsResponse,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::ErrorDisplay;
use crate::messages::{describe_error, error_level, message_class, MessageLevel};

/// What the panel knows about the saved layout
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    Loading,
    Absent,
    Loaded(GetPositionsResponse),
    Failed(String),
}

/// Map a get result; a missing layout is a normal starting point, not a failure
pub fn load_outcome(result: Result<Option<GetPositionsResponse>, ApiError>) -> PanelState {
    match result {
        Ok(Some(saved)) => PanelState::Loaded(saved),
        Ok(None) => PanelState::Absent,
        Err(e) => PanelState::Failed(describe_error(&e)),
    }
}

/// Status line after save or reset, and whether the layout must be reloaded
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub level: MessageLevel,
    pub text: String,
    pub reload: bool,
}

impl ActionOutcome {
    fn failed(error: &ApiError) -> Self {
        Self {
            level: error_level(error),
            text: describe_error(error),
            reload: false,
        }
    }
}

pub fn save_outcome(result: &Result<SavePositionsResponse, ApiError>) -> ActionOutcome {
    match result {
        Ok(saved) => ActionOutcome {
            level: MessageLevel::Info,
            text: format!("Saved {} node positions", saved.node_count),
            reload: true,
        },
        Err(e) => ActionOutcome::failed(e),
    }
}

pub fn reset_outcome(result: &Result<(), ApiError>) -> ActionOutcome {
    match result {
        Ok(()) => ActionOutcome {
            level: MessageLevel::Info,
            text: "Saved layout removed".to_string(),
            reload: true,
        },
        Err(e) => ActionOutcome::failed(e),
    }
}

/// Load generation; every dispatch bumps it once, so concurrent requests never collapse
#[derive(Debug, Default, PartialEq)]
pub struct ReloadCounter(pub u32);

impl Reducible for ReloadCounter {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutBodyProps {
    pub state: PanelState,
    pub on_retry: Callback<()>,
}

/// Panel content for the current state
#[function_component(LayoutBody)]
pub fn layout_body(props: &LayoutBodyProps) -> Html {
    match &props.state {
        PanelState::Loading => html! { <div class="loading">{"Loading saved layout..."}</div> },
        PanelState::Absent => html! { <div class="placeholder">{"No saved layout yet"}</div> },
        PanelState::Loaded(saved) => html! {
            <div class="layout-summary">
                { format!("{} saved node positions", saved.node_count()) }
            </div>
        },
        PanelState::Failed(message) => html! {
            <ErrorDisplay error={message.clone()} on_retry={props.on_retry.clone()} />
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutPanelProps {
    pub graph_id: AttrValue,
    pub base_url: AttrValue,
    /// Current node positions in the editor, sent on save
    #[prop_or_default]
    pub positions: GraphPositions,
    #[prop_or_default]
    pub layout_algorithm: Option<AttrValue>,
}

fn client_for(base_url: &str) -> PositionStoreClient {
    PositionStoreClient::new(ClientConfig::new(base_url))
}

#[function_component(LayoutPanel)]
pub fn layout_panel(props: &LayoutPanelProps) -> Html {
    let state = use_state(|| PanelState::Loading);
    let reload = use_reducer(ReloadCounter::default);
    let status = use_state(|| None::<ActionOutcome>);

    {
        let state = state.clone();
        use_effect_with(
            (props.graph_id.clone(), props.base_url.clone(), reload.0),
            move |(graph_id, base_url, _): &(AttrValue, AttrValue, u32)| {
                let graph_id = graph_id.clone();
                let client = client_for(base_url);
                state.set(PanelState::Loading);

                spawn_local(async move {
                    state.set(load_outcome(client.get_graph_positions(&graph_id).await));
                });

                || ()
            },
        );
    }

    let on_retry = {
        let reload = reload.dispatcher();
        Callback::from(move |_: ()| reload.dispatch(()))
    };

    let on_save = {
        let reload = reload.dispatcher();
        let status = status.clone();
        let graph_id = props.graph_id.clone();
        let base_url = props.base_url.clone();
        let positions = props.positions.clone();
        let layout_algorithm = props.layout_algorithm.clone();

        Callback::from(move |_: MouseEvent| {
            let reload = reload.clone();
            let status = status.clone();
            let client = client_for(&base_url);

            let mut metadata = PositionsMetadata::now();
            if let Some(algorithm) = &layout_algorithm {
                metadata = metadata.with_layout_algorithm(algorithm.as_str());
            }
            let request =
                SavePositionsRequest::new(graph_id.as_str(), positions.clone()).with_metadata(metadata);

            spawn_local(async move {
                let outcome = save_outcome(&client.save_graph_positions(&request).await);
                if outcome.reload {
                    reload.dispatch(());
                }
                status.set(Some(outcome));
            });
        })
    };

    let on_reset = {
        let reload = reload.dispatcher();
        let status = status.clone();
        let graph_id = props.graph_id.clone();
        let base_url = props.base_url.clone();

        Callback::from(move |_: MouseEvent| {
            let reload = reload.clone();
            let status = status.clone();
            let graph_id = graph_id.clone();
            let client = client_for(&base_url);

            spawn_local(async move {
                let outcome = reset_outcome(&client.delete_graph_positions(&graph_id).await);
                if outcome.reload {
                    reload.dispatch(());
                }
                status.set(Some(outcome));
            });
        })
    };

    let busy = matches!(*state, PanelState::Loading);
    let has_saved = matches!(*state, PanelState::Loaded(_));

    html! {
        <div class="layout-panel">
            <div class="layout-panel-header">
                <span>{ format!("Layout: {}", props.graph_id) }</span>
                <div class="layout-actions">
                    <button class="save-btn" onclick={on_save} disabled={busy}>
                        {"Save layout"}
                    </button>
                    <button class="reset-btn" onclick={on_reset} disabled={busy || !has_saved}>
                        {"Reset layout"}
                    </button>
                </div>
            </div>
            {
                if let Some(outcome) = &*status {
                    html! { <div class={message_class(outcome.level)}>{ outcome.text.clone() }</div> }
                } else {
                    html! {}
                }
            }
            <LayoutBody state={(*state).clone()} on_retry={on_retry} />
        </div>
    }
}
