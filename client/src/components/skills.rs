//! Skill groups with proficiency bars that fill once the section reveals.

use leptos::html::Section;
use leptos::prelude::*;

use crate::components::reveal::{reveal_style, use_reveal};
use crate::content::{SKILL_GROUPS, SKILL_STAGGER_MS, Skill, stagger_ms};
use crate::state::reveal::{RevealOptions, SECTION_THRESHOLD};

/// Inline width for a proficiency bar. Collapsed until revealed.
fn bar_style(skill: Skill, revealed: bool) -> String {
    let width = if revealed { skill.level.min(100) } else { 0 };
    format!("width: {width}%")
}

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let options = RevealOptions::new(SECTION_THRESHOLD);
    let revealed = use_reveal(section_ref, options);

    view! {
        <section node_ref=section_ref id="skills" class="section section--alt">
            <div class="section__inner">
                <header class="section__header reveal reveal--from-below" class:is-visible=revealed>
                    <p class="section__eyebrow">"<Skills />"</p>
                    <h2 class="section__title">"What I " <span class="text-gradient">"Work With"</span></h2>
                </header>

                <div class="skills__grid">
                    {SKILL_GROUPS
                        .iter()
                        .enumerate()
                        .map(|(index, group)| {
                            view! {
                                <div
                                    class="card skills__group reveal reveal--from-below"
                                    class:is-visible=revealed
                                    style=reveal_style(options.with_delay_ms(stagger_ms(index, SKILL_STAGGER_MS)))
                                >
                                    <h3 class="skills__title">{group.title}</h3>
                                    {group
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            let skill = *skill;
                                            view! {
                                                <div class="skill">
                                                    <div class="skill__header">
                                                        <span>{skill.name}</span>
                                                        <span class="skill__level">{format!("{}%", skill.level)}</span>
                                                    </div>
                                                    <div class="skill__track">
                                                        <div
                                                            class="skill__bar"
                                                            style=move || bar_style(skill, revealed.get())
                                                        ></div>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
