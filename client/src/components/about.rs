//! About section: bio, quick stats, and personal facts.

use leptos::html::Section;
use leptos::prelude::*;

use crate::components::reveal::{reveal_style, use_reveal};
use crate::content::{ABOUT_FACTS, ABOUT_PARAGRAPHS, ABOUT_STATS, MOTTO};
use crate::state::reveal::{RevealOptions, SECTION_THRESHOLD};

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let options = RevealOptions::new(SECTION_THRESHOLD);
    let revealed = use_reveal(section_ref, options);

    view! {
        <section node_ref=section_ref id="about" class="section">
            <div class="section__inner">
                <header class="section__header reveal reveal--from-below" class:is-visible=revealed>
                    <p class="section__eyebrow">"<About Me />"</p>
                    <h2 class="section__title">"Who I " <span class="text-gradient">"Am"</span></h2>
                </header>

                <div class="about__grid">
                    <div
                        class="about__bio card reveal reveal--from-left"
                        class:is-visible=revealed
                        style=reveal_style(options.with_delay_ms(200))
                    >
                        {ABOUT_PARAGRAPHS.iter().map(|text| view! { <p>{*text}</p> }).collect_view()}
                        <div class="about__stats">
                            {ABOUT_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="about__stat">
                                            <div class="about__stat-value">{stat.value}</div>
                                            <div class="about__stat-label">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div
                        class="about__facts reveal reveal--from-right"
                        class:is-visible=revealed
                        style=reveal_style(options.with_delay_ms(400))
                    >
                        {ABOUT_FACTS
                            .iter()
                            .map(|fact| {
                                view! {
                                    <div class="card about__fact">
                                        <p class="about__fact-label">{fact.label}</p>
                                        <p class="about__fact-value">{fact.value}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <blockquote class="card about__motto">{MOTTO}</blockquote>
                    </div>
                </div>
            </div>
        </section>
    }
}
