//! Project cards.

use leptos::html::Section;
use leptos::prelude::*;

use crate::components::reveal::{reveal_style, use_reveal};
use crate::content::{PROJECT_STAGGER_MS, PROJECTS, stagger_ms};
use crate::state::reveal::{RevealOptions, SECTION_THRESHOLD};

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let options = RevealOptions::new(SECTION_THRESHOLD);
    let revealed = use_reveal(section_ref, options);

    view! {
        <section node_ref=section_ref id="projects" class="section">
            <div class="section__inner">
                <header class="section__header reveal reveal--from-below" class:is-visible=revealed>
                    <p class="section__eyebrow">"<Projects />"</p>
                    <h2 class="section__title">"Things I've " <span class="text-gradient">"Built"</span></h2>
                </header>

                <div class="projects__grid">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <article
                                    class="card project reveal reveal--from-below"
                                    class:is-visible=revealed
                                    style=reveal_style(options.with_delay_ms(stagger_ms(index, PROJECT_STAGGER_MS)))
                                >
                                    <h3 class="project__title">{project.title}</h3>
                                    <p class="project__description">{project.description}</p>
                                    <ul class="chips">
                                        {project.tags.iter().map(|tag| view! { <li class="chip">{*tag}</li> }).collect_view()}
                                    </ul>
                                    <div class="project__links">
                                        <a href=project.source_url target="_blank" rel="noopener noreferrer">
                                            "Source"
                                        </a>
                                        {project
                                            .demo_url
                                            .map(|url| {
                                                view! {
                                                    <a href=url target="_blank" rel="noopener noreferrer">
                                                        "Live Demo"
                                                    </a>
                                                }
                                            })}
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
