//! Education timeline. Entries share one reveal and stagger their transitions.

use leptos::html::Section;
use leptos::prelude::*;

use crate::components::reveal::{reveal_style, use_reveal};
use crate::content::{EDUCATION, EDUCATION_STAGGER_MS, stagger_ms};
use crate::state::reveal::{RevealOptions, SECTION_THRESHOLD};

#[component]
pub fn Education() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let options = RevealOptions::new(SECTION_THRESHOLD);
    let revealed = use_reveal(section_ref, options);

    view! {
        <section node_ref=section_ref id="education" class="section">
            <div class="section__inner">
                <header class="section__header reveal reveal--from-below" class:is-visible=revealed>
                    <p class="section__eyebrow">"<Education />"</p>
                    <h2 class="section__title">"Academic " <span class="text-gradient">"Journey"</span></h2>
                </header>

                <ol class="timeline">
                    {EDUCATION
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            let side = if index % 2 == 0 { "timeline__item--left" } else { "timeline__item--right" };
                            view! {
                                <li
                                    class=format!("timeline__item {side} reveal reveal--from-below")
                                    class:is-visible=revealed
                                    style=reveal_style(options.with_delay_ms(stagger_ms(index, EDUCATION_STAGGER_MS)))
                                >
                                    <span class="timeline__dot" aria-hidden="true"></span>
                                    <article class="card timeline__card">
                                        <header class="timeline__header">
                                            <div>
                                                <h3 class="timeline__degree">{entry.degree}</h3>
                                                <p class="timeline__institution">{entry.institution}</p>
                                            </div>
                                            <span class="timeline__period">{entry.period}</span>
                                        </header>
                                        <p class="timeline__description">{entry.description}</p>

                                        <p class="timeline__label">"Key Courses"</p>
                                        <ul class="chips">
                                            {entry
                                                .courses
                                                .iter()
                                                .map(|course| view! { <li class="chip">{*course}</li> })
                                                .collect_view()}
                                        </ul>

                                        {(!entry.achievements.is_empty())
                                            .then(|| {
                                                view! {
                                                    <p class="timeline__label">"Achievements"</p>
                                                    <ul class="chips">
                                                        {entry
                                                            .achievements
                                                            .iter()
                                                            .map(|item| view! { <li class="chip chip--accent">{*item}</li> })
                                                            .collect_view()}
                                                    </ul>
                                                }
                                            })}
                                    </article>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
