use yew::prelude::*;

use super::scroll_to_section;
use crate::content::{
    ProjectFilter, SocialLink, ABOUT_HEADLINE, ABOUT_PARAGRAPHS, ABOUT_STATS, ABOUT_TECH,
    EXPERIENCE, HERO, HERO_SOCIALS, PROJECTS, SKILL_CATEGORIES,
};
use crate::section::SectionId;

pub(crate) fn social_links(links: &[SocialLink]) -> Html {
    html! {
        <div class="social-links">
            { for links.iter().map(|social| html! {
                <a class="social-link" href={social.href} title={social.name} aria-label={social.name}>
                    {social.icon}
                </a>
            }) }
        </div>
    }
}

fn section_heading(lead: &'static str, accent: &'static str, subtitle: &'static str) -> Html {
    html! {
        <header class="section-heading">
            <h2>{lead}{" "}<span class="gradient-text">{accent}</span></h2>
            <p class="muted">{subtitle}</p>
        </header>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let to_contact = Callback::from(|_: MouseEvent| scroll_to_section(SectionId::Contact));
    let to_projects = Callback::from(|_: MouseEvent| scroll_to_section(SectionId::Projects));

    html! {
        <div class="section-container hero">
            <span class="pill">{HERO.greeting}</span>
            <h1 class="hero-name">{"Hi, I'm "}<span class="gradient-text">{HERO.name}</span></h1>
            <h2 class="hero-title">{HERO.title}</h2>
            <p class="hero-tagline muted">{HERO.tagline}</p>

            <div class="hero-actions">
                <button class="btn-primary" type="button" onclick={to_contact}>{"Get In Touch"}</button>
                <button class="btn-secondary" type="button" onclick={to_projects}>{"View My Work"}</button>
            </div>

            {social_links(&HERO_SOCIALS)}

            <div class="scroll-indicator" aria-hidden="true">{"↓"}</div>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="section-container">
            {section_heading("About", "Me", "Passionate developer crafting exceptional digital experiences")}

            <div class="about-grid">
                <div class="avatar glass-card" aria-hidden="true">{"👨‍💻"}</div>
                <div class="about-copy">
                    <h3>{ABOUT_HEADLINE}</h3>
                    { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    <ul class="chip-list">
                        { for ABOUT_TECH.iter().map(|tech| html! { <li class="chip">{*tech}</li> }) }
                    </ul>
                </div>
            </div>

            <dl class="stats">
                { for ABOUT_STATS.iter().map(|stat| html! {
                    <div class="stat glass-card">
                        <dt class="stat-value gradient-text">{stat.value}</dt>
                        <dd class="muted">{stat.label}</dd>
                    </div>
                }) }
            </dl>
        </div>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <div class="section-container">
            {section_heading("My", "Skills", "Technologies and tools I work with to bring ideas to life")}

            <div class="card-grid">
                { for SKILL_CATEGORIES.iter().map(|category| html! {
                    <article class="glass-card skill-card">
                        <h3><span aria-hidden="true">{category.icon}</span>{" "}{category.title}</h3>
                        <ul class="skill-list">
                            { for category.skills.iter().map(|skill| html! {
                                <li class="skill">
                                    <div class="skill-row">
                                        <span>{skill.name}</span>
                                        <span class="muted">{format!("{}%", skill.level)}</span>
                                    </div>
                                    <div
                                        class="skill-bar"
                                        role="progressbar"
                                        aria-valuemin="0"
                                        aria-valuemax="100"
                                        aria-valuenow={skill.level.to_string()}
                                    >
                                        <div class="skill-bar-fill" style={format!("width: {}%;", skill.level)}></div>
                                    </div>
                                </li>
                            }) }
                        </ul>
                    </article>
                }) }
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let filter = use_state(ProjectFilter::default);
    let visible = filter.apply(&PROJECTS);

    html! {
        <div class="section-container">
            {section_heading("Featured", "Projects", "A showcase of my recent work and side projects")}

            <div class="filter-bar" role="group" aria-label="Filter projects">
                { for ProjectFilter::ALL.into_iter().map(|option| {
                    let onclick = {
                        let filter = filter.clone();
                        Callback::from(move |_: MouseEvent| filter.set(option))
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!("filter", (*filter == option).then_some("is-active"))}
                            aria-pressed={(*filter == option).to_string()}
                            onclick={onclick}
                        >
                            {option.label()}
                        </button>
                    }
                }) }
            </div>

            if visible.is_empty() {
                <p class="empty-state muted">{"No projects found in this category."}</p>
            } else {
                <div class="card-grid">
                    { for visible.into_iter().map(|project| html! {
                        <article key={project.id} class="glass-card project-card">
                            <div class="project-media">
                                <span class="project-icon" aria-hidden="true">{project.icon}</span>
                                <div class="project-links">
                                    <a href={project.demo}>{"Demo"}</a>
                                    <a href={project.github}>{"Code"}</a>
                                </div>
                            </div>
                            <div class="project-body">
                                <h3>{project.title}</h3>
                                <p class="muted">{project.description}</p>
                                <ul class="chip-list">
                                    { for project.tags.iter().map(|tag| html! { <li class="chip">{*tag}</li> }) }
                                </ul>
                            </div>
                        </article>
                    }) }
                </div>
            }
        </div>
    }
}

#[function_component(Experience)]
pub fn experience() -> Html {
    html! {
        <div class="section-container">
            {section_heading("Work", "Experience", "My professional journey and contributions")}

            <ol class="timeline">
                { for EXPERIENCE.iter().map(|position| html! {
                    <li class="timeline-item glass-card">
                        <div class="timeline-icon" aria-hidden="true">{position.icon}</div>
                        <h3>{position.role}</h3>
                        <p class="timeline-company gradient-text">{position.company}</p>
                        <p class="muted">{format!("{} · {}", position.duration, position.location)}</p>
                        <ul class="timeline-highlights">
                            { for position.highlights.iter().map(|line| html! { <li>{*line}</li> }) }
                        </ul>
                        <ul class="chip-list">
                            { for position.technologies.iter().map(|tech| html! { <li class="chip">{*tech}</li> }) }
                        </ul>
                    </li>
                }) }
            </ol>
        </div>
    }
}
