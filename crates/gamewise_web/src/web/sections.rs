use gamewise::render::{CardView, DetailPanel, PrinciplesView, ScenariosView};
use gamewise::state::Msg;
use leptos::prelude::*;

use crate::ui_model::{card_class, PanelBlock};

#[component]
pub(super) fn PrincipleGrid(principles: PrinciplesView) -> impl IntoView {
    view! {
        <div class="gw-principles">
            <div class="gw-intro">
                <h2>{principles.intro_title}</h2>
                <p>{principles.intro_body}</p>
            </div>
            <div class="gw-grid two">
                {principles
                    .principles
                    .iter()
                    .map(|p| {
                        view! {
                            <div class="gw-principle">
                                <h3>{p.title}</h3>
                                <p>{p.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub(super) fn ScenarioExplorer(scenarios: ScenariosView, dispatch: Callback<Msg>) -> impl IntoView {
    let ScenariosView { cards, detail } = scenarios;

    view! {
        <div class="gw-scenarios">
            <div class="gw-grid three">
                {cards
                    .into_iter()
                    .map(|card| view! { <ScenarioCard card=card dispatch=dispatch /> })
                    .collect_view()}
            </div>
            {detail.map(|panel| view! { <ScenarioDetail panel=panel /> })}
        </div>
    }
}

#[component]
fn ScenarioCard(card: CardView, dispatch: Callback<Msg>) -> impl IntoView {
    let id = card.id;
    let pressed = if card.selected { "true" } else { "false" };

    view! {
        <button
            class=card_class(card.selected)
            aria-pressed=pressed
            on:click=move |_| dispatch.run(Msg::SelectScenario(id))
        >
            <div class="gw-card-head">
                <span class="gw-icon" title=id.icon_name()>{card.icon}</span>
                <h3>{card.title}</h3>
            </div>
            <span class="gw-chevron" aria-hidden="true">"›"</span>
        </button>
    }
}

#[component]
fn ScenarioDetail(panel: DetailPanel) -> impl IntoView {
    let blocks = PanelBlock::all()
        .iter()
        .map(|&block| {
            let body = match block {
                PanelBlock::Situation => view! { <p>{panel.situation}</p> }.into_any(),
                PanelBlock::Insight => view! { <p>{panel.insight}</p> }.into_any(),
                PanelBlock::Strategy => view! {
                    <ol class="gw-strategy">
                        {panel.strategy.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
                    </ol>
                }
                .into_any(),
                PanelBlock::RealWorld => view! { <p>{panel.real_world}</p> }.into_any(),
            };
            view! {
                <div class=block.class()>
                    <h4>{block.heading()}</h4>
                    {body}
                </div>
            }
        })
        .collect_view();

    view! {
        <article class="gw-detail" data-scenario=panel.id.key()>
            <div class="gw-card-head">
                <span class="gw-icon" title=panel.id.icon_name()>{panel.icon}</span>
                <h3>{panel.title}</h3>
            </div>
            {blocks}
        </article>
    }
}
