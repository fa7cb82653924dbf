use gamewise::render::{render, SectionView};
use gamewise::state::{Msg, ViewState};
use leptos::prelude::*;

mod console;
mod sections;
mod shell;

use sections::{PrincipleGrid, ScenarioExplorer};
use shell::{Header, Tabs, Toolkit};

pub fn start() {
    console::info("gamewise: mounting");
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let state = RwSignal::new(ViewState::new());
    let page = Memo::new(move |_| render(&state.get()));

    let dispatch = Callback::new(move |msg: Msg| {
        console::debug(&format!("gamewise: {msg:?}"));
        state.update(|s| s.dispatch(msg));
    });

    // Header and footer do not depend on state.
    let initial = page.get_untracked();

    view! {
        <main class="gw-page">
            <section class="gw-panel">
                <Header title=initial.title subtitle=initial.subtitle icon=initial.icon />
                <Tabs tabs=Signal::derive(move || page.get().tabs) dispatch=dispatch />
                {move || match page.get().body {
                    SectionView::Principles(principles) => {
                        view! { <PrincipleGrid principles=principles /> }.into_any()
                    }
                    SectionView::Scenarios(scenarios) => {
                        view! { <ScenarioExplorer scenarios=scenarios dispatch=dispatch /> }
                            .into_any()
                    }
                }}
            </section>
            <Toolkit toolkit=initial.toolkit />
        </main>
    }
}
