//! Page bodies rendered by the router.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsValue;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::router::NavLink;
use crate::config::{self, routes};
use crate::models::RoutePath;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

struct Project {
    title: &'static str,
    category: &'static str,
    description: &'static str,
    github: &'static str,
    technologies: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        title: "CityX Subway Display System",
        category: "Real-Time Information Display",
        description: "Java subway information display with real-time train tracking, \
                      weather, news feeds and rotating advertisements on an MVC, \
                      multithreaded core.",
        github: "https://github.com/muhammadzain03/CityX-Subway-Display-System",
        technologies: &["Java", "MySQL", "Swing", "MVC", "Multithreading"],
    },
    Project {
        title: "Flight Operations Manager",
        category: "Airline Management Application",
        description: "C++/Qt airline management tool for scheduling, passenger \
                      management and interactive seat maps.",
        github: "https://github.com/muhammadzain03/Flight-Operations-Manager",
        technologies: &["C++", "Qt", "JSON", "SQLite"],
    },
    Project {
        title: "TechVista Inc E-commerce Platform",
        category: "Full-Stack E-commerce Solution",
        description: "React and Flask storefront with guest browsing, authentication \
                      and a responsive animated UI.",
        github: "https://github.com/muhammadzain03/TechVista-Inc",
        technologies: &["React.js", "Flask", "SQLite", "REST APIs"],
    },
    Project {
        title: "Purrfect Innovations",
        category: "Frontend E-commerce Website",
        description: "Static, accessible product catalog built with plain HTML and CSS.",
        github: "https://github.com/muhammadzain03/Purrfect-Innovations",
        technologies: &["HTML", "CSS", "Responsive Design"],
    },
    Project {
        title: "Art Museum Database Management System",
        category: "Role-Based Database Solution",
        description: "Python and MySQL application for museum collections, staff and \
                      visitors, with trigger-enforced business rules and role-based access.",
        github: "https://github.com/muhammadzain03/Art-Museum-Database-Management-System-SQL",
        technologies: &["Python", "MySQL", "SQL", "Role-Based Access"],
    },
];

fn route(path: &str) -> RoutePath {
    RoutePath::parse(path).unwrap_or_else(|_| RoutePath::root())
}

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class=css::hero>
            <p class=css::eyebrow>{config::APP_TAGLINE}</p>
            <h1 class=css::title>{config::APP_NAME}</h1>
            <p class=css::lead>
                "Software Engineering student at the University of Calgary, working across \
                 full-stack development and machine learning."
            </p>
            <p class=css::lead>"This site is a glimpse into what I create when curiosity meets code."</p>
            <div class=css::ctaRow>
                <NavLink path=route("/projects") class=css::cta>"View projects"</NavLink>
                <NavLink path=route("/resume") class=css::ctaSecondary>"Resume"</NavLink>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class=css::page>
            <h1 class=css::title>"About"</h1>
            <p class=css::lead>
                "From Karachi to Calgary: a Software Engineering student who enjoys building \
                 dependable software, from database systems to web applications."
            </p>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section class=css::page>
            <h1 class=css::title>"Projects"</h1>
            <ul class=css::grid>
                {PROJECTS
                    .iter()
                    .map(|p| view! {
                        <li class=css::card>
                            <p class=css::eyebrow>{p.category}</p>
                            <h2 class=css::cardTitle>{p.title}</h2>
                            <p>{p.description}</p>
                            <ul class=css::tags>
                                {p.technologies.iter().map(|t| view! { <li>{*t}</li> }).collect_view()}
                            </ul>
                            <a class=css::cardLink href=p.github target="_blank" rel="noopener noreferrer">
                                <Icon icon=ic::GITHUB />
                                "Source"
                            </a>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
pub fn Resume() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <section class=css::page>
            <h1 class=css::title>"Resume"</h1>
            <a
                class=css::cta
                href=routes::RESUME_PDF
                target="_blank"
                rel="noopener noreferrer"
                on:mouseenter=move |_| ctx.preload(&JsValue::from_str(routes::RESUME_PDF))
            >
                <Icon icon=ic::RESUME />
                "Open PDF"
            </a>
            <object class=css::document data=routes::RESUME_PDF type="application/pdf">
                <p>"Your browser cannot display PDFs inline."</p>
            </object>
        </section>
    }
}

#[component]
pub fn LeetCode() -> impl IntoView {
    view! {
        <section class=css::page>
            <h1 class=css::title>"LeetCode Journey"</h1>
            <p class=css::lead>
                "Documenting my competitive programming journey, algorithmic thinking, and \
                 problem-solving on LeetCode and beyond."
            </p>
        </section>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class=css::page>
            <h1 class=css::title>"Page not found"</h1>
            <NavLink path=RoutePath::root() class=css::cta>"Back home"</NavLink>
        </section>
    }
}
