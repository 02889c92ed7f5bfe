use crate::api::models::{StatsUpdate, Writer};
use yew::prelude::*;

/// Parses a counter field as a base-10 unsigned integer. The Update button
/// stays disabled until both fields parse, so a non-numeric value can never
/// reach the wire.
fn parse_stat(input: &str) -> Option<u64> {
    input.trim().parse().ok()
}

#[derive(Properties, PartialEq)]
pub struct UpdateStatsDialogProps {
    /// The fields are seeded with this writer's current counters.
    pub writer: Writer,
    pub on_submit: Callback<StatsUpdate>,
    pub on_cancel: Callback<()>,
}

#[function_component(UpdateStatsDialog)]
pub fn update_stats_dialog(props: &UpdateStatsDialogProps) -> Html {
    let articles = use_state(|| props.writer.articles.to_string());
    let views = use_state(|| props.writer.views.to_string());

    let on_articles_input = {
        let articles = articles.clone();
        Callback::from(move |event: InputEvent| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            articles.set(input.value());
        })
    };
    let on_views_input = {
        let views = views.clone();
        Callback::from(move |event: InputEvent| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            views.set(input.value());
        })
    };

    let parsed = match (parse_stat(&articles), parse_stat(&views)) {
        (Some(articles), Some(views)) => Some(StatsUpdate { articles, views }),
        _ => None,
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| {
            if let Some(update) = parsed {
                on_submit.emit(update);
            }
        })
    };

    let oncancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <h3>{"Update Writer Stats"}</h3>
                <label for="articles">{"Articles"}</label>
                <input
                    type="number"
                    id="articles"
                    min="0"
                    value={(*articles).clone()}
                    oninput={on_articles_input}
                />
                <label for="views">{"Views"}</label>
                <input
                    type="number"
                    id="views"
                    min="0"
                    value={(*views).clone()}
                    oninput={on_views_input}
                />
                <div class="dialog-actions">
                    <button class="button-secondary" onclick={oncancel}>{"Cancel"}</button>
                    <button
                        class="button-primary"
                        onclick={onsubmit}
                        disabled={parsed.is_none()}
                    >
                        {"Update"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_stat;

    #[test]
    fn accepts_base10_integers() {
        assert_eq!(parse_stat("10"), Some(10));
        assert_eq!(parse_stat(" 5000 "), Some(5000));
        assert_eq!(parse_stat("0"), Some(0));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(parse_stat(""), None);
        assert_eq!(parse_stat("abc"), None);
        assert_eq!(parse_stat("-3"), None);
        assert_eq!(parse_stat("1.5"), None);
    }
}
