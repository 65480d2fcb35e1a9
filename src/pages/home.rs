//! Landing page: rotating hero, stats, and community links.

use leptos::prelude::*;

use crate::components::layout::SiteLayout;

struct Slide {
    heading: &'static str,
    desc: &'static str,
    photo: &'static str,
}

static SLIDES: [Slide; 3] = [
    Slide {
        heading: "We build together.",
        desc: "Team BlackCat is a student-driven tech crew passionate about embedded systems, competitive programming, PCB design, and real-world projects.",
        photo: "https://raw.githubusercontent.com/dr12029/img/6f2b48b8496abe9d89061ee15a8e11017fa4674f/emdebbed.jpg",
    },
    Slide {
        heading: "We learn together.",
        desc: "Join our workshops and peer-led sessions to master new tech skills, solve problems, and grow as a community.",
        photo: "https://raw.githubusercontent.com/dr12029/img/main/slider2.jpg",
    },
    Slide {
        heading: "We ship together.",
        desc: "From idea to execution, we launch real projects and help you build a portfolio that stands out.",
        photo: "https://raw.githubusercontent.com/dr12029/img/main/slider3.jpg",
    },
];

static STATS: [(&str, &str); 4] = [
    ("450+", "Active Members"),
    ("3", "Flagship Projects"),
    ("12+", "Workshops Hosted Annually"),
    ("5", "National Competitions Organized"),
];

static COMMUNITY_LINKS: [(&str, &str, &str); 4] = [
    (
        "Discord Community",
        "Join our active discussions and collaborate on projects",
        "https://discord.gg/your-invite",
    ),
    (
        "Open Source",
        "Contribute to our open-source robotics and tech projects",
        "https://github.com/dr12029/img",
    ),
    (
        "YouTube Channel",
        "Watch tutorials, project demos, and competition highlights",
        "https://youtube.com/@your-channel",
    ),
    (
        "Facebook Page",
        "Stay updated with latest news and events",
        "https://facebook.com/your-page",
    ),
];

const SLIDE_INTERVAL_SECS: u64 = 5;

/// Home page with an auto-advancing hero slider.
#[component]
pub fn HomePage() -> impl IntoView {
    let current = RwSignal::new(0_usize);

    #[cfg(target_arch = "wasm32")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(SLIDE_INTERVAL_SECS))
                    .await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                current.update(|index| *index = (*index + 1) % SLIDES.len());
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let slide = move || &SLIDES[current.get() % SLIDES.len()];

    view! {
        <SiteLayout>
            <section class="hero">
                <img class="hero__photo" src=move || slide().photo alt="" />
                <div class="hero__overlay">
                    <h1 class="hero__heading">{move || slide().heading}</h1>
                    <p class="hero__desc">{move || slide().desc}</p>
                    <div class="hero__actions">
                        <a href="/events" class="btn btn--primary">"Explore Events"</a>
                        <a href="/who-we-are" class="btn btn--outline">"Who are we"</a>
                    </div>
                </div>
                <div class="hero__dots">
                    {(0..SLIDES.len())
                        .map(|index| {
                            view! {
                                <button
                                    class=move || {
                                        if current.get() == index {
                                            "hero__dot hero__dot--active"
                                        } else {
                                            "hero__dot"
                                        }
                                    }
                                    on:click=move |_| current.set(index)
                                    aria-label=format!("Go to slide {}", index + 1)
                                ></button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="stats">
                <h2 class="stats__title">"At a Glance"</h2>
                <div class="stats__grid">
                    {STATS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="stats__card">
                                    <div class="stats__value">{*value}</div>
                                    <div class="stats__label">{*label}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="community">
                <span class="community__badge">"Connect & Collaborate"</span>
                <h2 class="community__title">
                    "Join Our " <span class="community__title-accent">"Community"</span>
                </h2>
                <p class="community__desc">
                    "Connect with fellow tech enthusiasts, share your projects, learn from others, and be part of our growing community across multiple platforms."
                </p>
                <div class="community__grid">
                    {COMMUNITY_LINKS
                        .iter()
                        .map(|(title, desc, href)| {
                            view! {
                                <a href=*href target="_blank" rel="noopener noreferrer" class="community__card">
                                    <div class="community__card-title">{*title}</div>
                                    <div class="community__card-desc">{*desc}</div>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </SiteLayout>
    }
}
