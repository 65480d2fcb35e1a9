//! Achievements page: project and competition highlights.

use leptos::prelude::*;

use crate::components::layout::SiteLayout;

struct Achievement {
    title: &'static str,
    summary: &'static str,
    photo: &'static str,
    badge: &'static str,
}

static ACHIEVEMENTS: [Achievement; 6] = [
    Achievement {
        title: "Low-Cost Firefighting Robot",
        summary: "Developed in collaboration with Bangladesh Fire Service, this autonomous robot can detect and extinguish small fires in hazardous environments, helping to save lives and property.",
        photo: "https://raw.githubusercontent.com/dr12029/img/main/firefighting.webp",
        badge: "Collab: Bangladesh Fire Service",
    },
    Achievement {
        title: "AI-Powered Search Drone",
        summary: "A custom drone equipped with AI vision for search and rescue in forests and coastal areas. Built in partnership with SkyVision Robotics.",
        photo: "https://raw.githubusercontent.com/dr12029/img/main/drone.webp",
        badge: "Collab: SkyVision Robotics",
    },
    Achievement {
        title: "ICPC Programming Success",
        summary: "Our members have participated in multiple ICPC regional contests, winning prizes and representing their universities at the national level.",
        photo: "https://raw.githubusercontent.com/dr12029/img/main/cp.webp",
        badge: "Competitive Programming",
    },
    Achievement {
        title: "RoboWar 2024",
        summary: "Our team\u{2019}s robot outperformed all competitors in the national RoboWar, securing the Champion title.",
        photo: "https://raw.githubusercontent.com/dr12029/img/main/robowar.webp",
        badge: "Champion",
    },
    Achievement {
        title: "Bangladesh Innovation Challenge 2023",
        summary: "Our innovative smart city solution earned us the 1st Runners Up award in this prestigious national competition.",
        photo: "https://raw.githubusercontent.com/dr12029/img/main/innovation.webp",
        badge: "1st Runners Up",
    },
    Achievement {
        title: "Smart City Hackathon 2023",
        summary: "Our hardware project was recognized as the Best Hardware Project among 50+ teams.",
        photo: "https://raw.githubusercontent.com/dr12029/img/main/hackathon.webp",
        badge: "Best Hardware Project",
    },
];

#[component]
pub fn AchievementsPage() -> impl IntoView {
    view! {
        <SiteLayout>
            <section class="achievements">
                <h2 class="achievements__title">
                    "Our " <span class="achievements__title-accent">"Achievements"</span>
                </h2>
                <p class="achievements__lede">
                    "Team BlackCat members have built innovative projects, excelled in competitions, and collaborated with industry and academia to push the boundaries of student engineering in Bangladesh."
                </p>
                <div class="achievements__grid">
                    {ACHIEVEMENTS
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="achievements__card">
                                    <img class="achievements__photo" src=entry.photo alt=entry.title />
                                    <div>
                                        <h3 class="achievements__card-title">{entry.title}</h3>
                                        <p class="achievements__card-summary">{entry.summary}</p>
                                    </div>
                                    <div class="achievements__card-footer">
                                        <span class="achievements__badge">{entry.badge}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </SiteLayout>
    }
}
