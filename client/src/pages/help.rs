//! Help center: categorized FAQ with search and single-open accordion.

use leptos::prelude::*;

use crate::state::help::{HelpCategory, HelpState, demo_articles};

#[component]
pub fn HelpPage() -> impl IntoView {
    let articles = StoredValue::new(demo_articles());
    let help = RwSignal::new(HelpState::default());

    let visible = Memo::new(move |_| help.with(|h| articles.with_value(|a| h.visible_articles(a))));

    let chip = move |label: &'static str, category: Option<HelpCategory>| {
        view! {
            <button
                class="chip"
                class:chip--active=move || help.with(|h| h.category == category)
                on:click=move |_| help.update(|h| h.category = category)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="help-page">
            <header class="page-header">
                <h1>"Help Center"</h1>
            </header>
            <input
                class="search-input"
                type="search"
                placeholder="Search help articles…"
                prop:value=move || help.with(|h| h.query.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    help.update(|h| h.query = value);
                }
            />
            <div class="chips">
                {chip("All", None)}
                {HelpCategory::ALL.into_iter().map(|c| chip(c.label(), Some(c))).collect::<Vec<_>>()}
            </div>
            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| view! { <p class="help-page__empty">"No articles match your search."</p> }
            >
                <div class="help-page__articles">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|article| {
                                let id = article.id;
                                let answer = article.answer;
                                view! {
                                    <article
                                        class="help-article"
                                        class:help-article--open=move || help.with(|h| h.is_expanded(id))
                                    >
                                        <button class="help-article__question" on:click=move |_| help.update(|h| h.toggle(id))>
                                            <span class="help-article__category">{article.category.label()}</span>
                                            {article.question}
                                        </button>
                                        <Show when=move || help.with(|h| h.is_expanded(id))>
                                            <p class="help-article__answer">{answer}</p>
                                        </Show>
                                    </article>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
