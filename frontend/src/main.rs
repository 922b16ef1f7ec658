mod components;
mod data;
mod hooks;
mod services;

use components::booking::BookingPage;
use components::dashboard::DashboardPage;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Page {
    Dashboard,
    Booking,
}

#[function_component(App)]
fn app() -> Html {
    let page = use_state(|| Page::Dashboard);

    let nav_button = |target: Page, label: &str| -> Html {
        let page = page.clone();
        let class = if *page == target {
            "nav-link active"
        } else {
            "nav-link"
        };
        let onclick = Callback::from(move |_: MouseEvent| page.set(target));
        html! { <button class={class} {onclick}>{label}</button> }
    };

    html! {
        <div class="app-shell">
            <nav class="side-nav">
                <div class="side-nav-brand">{"Venue Manager"}</div>
                {nav_button(Page::Dashboard, "Dashboard")}
                {nav_button(Page::Booking, "Booking")}
            </nav>
            <div class="app-content">
                {match *page {
                    Page::Dashboard => html! { <DashboardPage /> },
                    Page::Booking => html! { <BookingPage /> },
                }}
            </div>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
