use crate::api::models::ExportRequest;
use chrono::NaiveDate;
use gloo::dialogs::alert;
use yew::prelude::*;

/// Native date inputs emit either `""` or `YYYY-MM-DD`.
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[derive(Properties, PartialEq)]
pub struct ExportPanelProps {
    /// Emitted only when both dates are set; an incomplete range never
    /// produces a request.
    pub on_export: Callback<ExportRequest>,
}

#[function_component(ExportPanel)]
pub fn export_panel(props: &ExportPanelProps) -> Html {
    let start_date = use_state(|| Option::<NaiveDate>::None);
    let end_date = use_state(|| Option::<NaiveDate>::None);

    let on_start_input = {
        let start_date = start_date.clone();
        Callback::from(move |event: InputEvent| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            start_date.set(parse_date(&input.value()));
        })
    };
    let on_end_input = {
        let end_date = end_date.clone();
        Callback::from(move |event: InputEvent| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            end_date.set(parse_date(&input.value()));
        })
    };

    let range = match (*start_date, *end_date) {
        (Some(start_date), Some(end_date)) => Some(ExportRequest {
            start_date,
            end_date,
        }),
        _ => None,
    };

    let onclick = {
        let on_export = props.on_export.clone();
        Callback::from(move |_| match range {
            Some(request) => on_export.emit(request),
            // The button is disabled too; this guards programmatic clicks.
            None => alert("Please select both start and end dates"),
        })
    };

    html! {
        <div class="export-panel">
            <div class="date-field">
                <label for="start-date">{"Start Date"}</label>
                <input type="date" id="start-date" oninput={on_start_input} />
            </div>
            <div class="date-field">
                <label for="end-date">{"End Date"}</label>
                <input type="date" id="end-date" oninput={on_end_input} />
            </div>
            <button
                class="button-export"
                {onclick}
                disabled={range.is_none()}
            >
                {"Export Report"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_date;
    use chrono::NaiveDate;

    #[test]
    fn parses_native_date_input_values() {
        assert_eq!(
            parse_date("2024-06-01"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("06/01/2024"), None);
    }
}
