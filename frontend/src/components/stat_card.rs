use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: String,
    pub value: String,
    pub caption: String,
    pub icon: String,
}

/// One headline-number card in the stats row at the top of a page
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat-card">
            <div class="stat-card-header">
                <h2 class="stat-card-title">{&props.title}</h2>
                <span class="stat-card-icon">{&props.icon}</span>
            </div>
            <p class="stat-card-value">{&props.value}</p>
            <p class="stat-card-caption">{&props.caption}</p>
        </div>
    }
}
