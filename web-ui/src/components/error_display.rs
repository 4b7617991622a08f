// Error display shown when graph generation fails

use yew::prelude::*;

pub const ERROR_TITLE: &str = "Generation Failed";

/// Shown when the failure carries no message
pub const FALLBACK_DESCRIPTION: &str =
    "We ran into an unexpected issue while generating your learning architecture. Please try again.";

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    /// Failure message, may be empty
    #[prop_or_default]
    pub error: AttrValue,
    pub on_retry: Callback<()>,
}

/// Text rendered under the title
pub fn error_description(error: &str) -> &str {
    if error.trim().is_empty() {
        FALLBACK_DESCRIPTION
    } else {
        error
    }
}

/// Adapt the retry callback to any event; each event emits `on_retry` once
pub fn retry_on<E: 'static>(on_retry: &Callback<()>) -> Callback<E> {
    on_retry.reform(|_: E| ())
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    let on_click = retry_on::<MouseEvent>(&props.on_retry);

    html! {
        <div class="generation-error" role="alert">
            <div class="generation-error-icon">{"⚠"}</div>
            <h3 class="generation-error-title">{ ERROR_TITLE }</h3>
            <p class="generation-error-description">
                { error_description(&props.error).to_string() }
            </p>
            <button class="retry-btn" onclick={on_click}>
                {"Try Again"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_error_uses_fallback() {
        assert_eq!(error_description(""), FALLBACK_DESCRIPTION);
        assert_eq!(error_description("  \n"), FALLBACK_DESCRIPTION);
        assert!(FALLBACK_DESCRIPTION.contains("unexpected issue"));
    }

    #[test]
    fn test_error_shown_verbatim() {
        assert_eq!(error_description("Graph is locked"), "Graph is locked");
    }

    #[test]
    fn test_retry_emits_once_per_event() {
        use std::cell::Cell;
        use std::rc::Rc;

        let count = Rc::new(Cell::new(0));
        let on_retry = {
            let count = count.clone();
            Callback::from(move |_: ()| count.set(count.get() + 1))
        };

        let on_click = retry_on::<u8>(&on_retry);
        on_click.emit(0);
        assert_eq!(count.get(), 1);

        on_click.emit(1);
        assert_eq!(count.get(), 2);
    }
}
