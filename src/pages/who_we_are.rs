//! "Who are we" page: club history, mission, and the chief's message.

use leptos::prelude::*;

use crate::components::layout::SiteLayout;

#[component]
pub fn WhoWeArePage() -> impl IntoView {
    view! {
        <SiteLayout>
            <section class="about">
                <h2 class="about__title">
                    "Who Are " <span class="about__title-accent">"We?"</span>
                </h2>
                <p class="about__lede">
                    "Team BlackCat was originally founded in 2014 by a small group of passionate students from BUET and RUET. What started as an informal gathering of friends with a shared dream has now evolved into a thriving community of learners, innovators, and creators from across all public and private universities in Bangladesh. Even college students are now actively connected to the team through various training and mentorship programs."
                </p>
                <div class="about__card">
                    <p>
                        "From the very beginning, our motto has been simple yet powerful: to innovate and to upgrade the skills of students so that they can confidently shape the future. Over the years, we have hosted numerous workshops, hackathons, and free training sessions that have empowered young learners to explore areas such as competitive programming, PCB design, microprocessors, and embedded systems."
                    </p>
                    <p>
                        "Our mission extends beyond just technical training. We believe that by nurturing problem-solving skills, creativity, and leadership qualities, students can become valuable assets not only for themselves but also for the country. Many of our alumni are now excelling in top companies, leading research groups, or contributing to startups that strengthen Bangladesh\u{2019}s technological backbone."
                    </p>
                    <p>
                        "To ensure consistent growth, Team BlackCat is supervised by experienced teachers and industry experts from both Bangladesh and abroad. This blend of local knowledge and global expertise allows us to guide students in a way that is practical, forward-thinking, and future-ready."
                    </p>
                    <p>
                        "Currently, under the leadership of Prof. Dr. David Millar, an internationally recognized academic and mentor, our team is pushing forward with new initiatives. These include:"
                    </p>
                    <ul class="about__list">
                        <li>"Offering hands-on technical training in cutting-edge fields like AI, IoT, and VLSI design."</li>
                        <li>"Establishing a student-led innovation hub, where creative projects are supported and showcased."</li>
                        <li>"Providing career development workshops to help students bridge the gap between education and professional life."</li>
                        <li>"Creating opportunities for international collaboration with students and faculty from other countries."</li>
                    </ul>
                    <p>
                        "With passion at our core and guidance from visionary mentors, Team BlackCat is not just a team, it\u{2019}s a movement, one that continues to inspire the youth of Bangladesh to dream bigger and achieve greater."
                    </p>
                </div>

                <div class="about__letter">
                    <span class="about__letter-badge">"Message from the Chief"</span>
                    <blockquote class="about__quote">
                        <p>
                            "Dear Students," <br /> <br />
                            "It gives me immense pleasure to witness the remarkable journey of Team BlackCat. Since its formation in 2014, the team has grown into a strong platform that empowers students from diverse educational backgrounds to learn, innovate, and contribute to society." <br /> <br />
                            "In today\u{2019}s rapidly changing world, knowledge and skills are the most powerful tools. Team BlackCat has consistently demonstrated how young minds, when nurtured and guided, can create a lasting impact. Through training programs, mentorship, and collaborative projects, this community has become a symbol of hope and progress for the nation\u{2019}s youth." <br /> <br />
                            "I am particularly proud of how the team is opening doors not just for university students, but also for college learners who are eager to explore technology at an early age. By doing so, we are building a pipeline of talent that will serve Bangladesh and beyond." <br /> <br />
                            "My vision is simple: to see every student who joins Team BlackCat leave with greater confidence, stronger skills, and a renewed sense of purpose. With the dedication of our mentors and the enthusiasm of our members, I am confident that this vision will become a reality." <br /> <br />
                            "Let us continue to innovate, to learn, and to serve, together."
                        </p>
                    </blockquote>
                    <div class="about__signature">
                        <img
                            class="about__signature-photo"
                            src="https://randomuser.me/api/portraits/men/32.jpg"
                            alt="Prof. Dr. David Millar"
                        />
                        <div>
                            <div class="about__signature-name">"Prof. Dr. David Millar"</div>
                            <div class="about__signature-role">"Chief, Team BlackCat"</div>
                        </div>
                    </div>
                </div>
            </section>
        </SiteLayout>
    }
}
