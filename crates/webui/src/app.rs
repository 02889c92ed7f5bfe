use crate::components::{
    dashboard_page::DashboardPage, not_found::NotFound, notification::ToastProvider,
};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn render(route: Route) -> Html {
        match route {
            Route::Home => html! { <DashboardPage /> },
            Route::NotFound => html! { <NotFound /> },
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Switch<Route> render={Route::render} />
            </ToastProvider>
        </BrowserRouter>
    }
}
