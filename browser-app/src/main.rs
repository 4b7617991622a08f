// Educator graph browser application
//
// Mounts into `#educator-graph-root` when the host page provides it,
// otherwise into <body>.

use educator_graph_web_ui::App;

const ROOT_ELEMENT_ID: &str = "educator-graph-root";

fn mount_point() -> Option<web_sys::Element> {
    web_sys::window()?
        .document()?
        .get_element_by_id(ROOT_ELEMENT_ID)
}

fn main() {
    match mount_point() {
        Some(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        None => {
            yew::Renderer::<App>::new().render();
        }
    }
}
