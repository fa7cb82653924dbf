use gamewise::render::{TabView, ToolkitView};
use gamewise::state::Msg;
use leptos::prelude::*;

use crate::ui_model::tab_class;

#[component]
pub(super) fn Header(
    title: &'static str,
    subtitle: &'static str,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <header class="gw-header">
            <h1 class="gw-title">
                <span class="gw-title-icon" aria-hidden="true">{icon}</span>
                {title}
            </h1>
            <p class="gw-subtitle">{subtitle}</p>
        </header>
    }
}

#[component]
pub(super) fn Tabs(tabs: Signal<Vec<TabView>>, dispatch: Callback<Msg>) -> impl IntoView {
    view! {
        <nav class="gw-tabs" role="tablist">
            {move || {
                tabs.get()
                    .into_iter()
                    .map(|tab| {
                        let section = tab.section;
                        let selected = if tab.active { "true" } else { "false" };
                        view! {
                            <button
                                class=tab_class(tab.active)
                                role="tab"
                                aria-selected=selected
                                on:click=move |_| dispatch.run(Msg::SelectSection(section))
                            >
                                {tab.label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[component]
pub(super) fn Toolkit(toolkit: ToolkitView) -> impl IntoView {
    view! {
        <section class="gw-panel gw-toolkit">
            <h2>{toolkit.title}</h2>
            <div class="gw-grid three">
                {toolkit
                    .tips
                    .iter()
                    .map(|tip| {
                        view! {
                            <div class="gw-tip">
                                <h3>{tip.title}</h3>
                                <p>{tip.body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
