//! Static event and mentor data for the events catalog.
//!
//! Data, not logic: the catalog is fixed at build time and rendered
//! declaratively by the events pages.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

/// A training mentor shown on event cards and detail pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mentor {
    pub name: &'static str,
    pub photo: &'static str,
}

/// One row of an event syllabus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyllabusEntry {
    pub when: &'static str,
    pub topic: &'static str,
}

/// Extended detail shown on an event's own page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventDetails {
    pub participants: &'static str,
    pub objective: &'static str,
    pub taught: &'static [&'static str],
    pub syllabus: &'static [SyllabusEntry],
    pub features: &'static [&'static str],
    pub mentor: &'static Mentor,
}

/// An event or training in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClubEvent {
    /// Stable id used in `/events/:id` routes.
    pub id: &'static str,
    pub title: &'static str,
    pub brief: &'static str,
    pub duration: &'static str,
    pub photo: &'static str,
    pub details: EventDetails,
}

const MENTOR_CP: Mentor = Mentor {
    name: "Shafin Rahman",
    photo: "https://i.pravatar.cc/100?img=15",
};
const MENTOR_PCB: Mentor = Mentor {
    name: "Arpa Sultana",
    photo: "https://i.pravatar.cc/100?img=32",
};
const MENTOR_MPU: Mentor = Mentor {
    name: "Fahim Ahmed",
    photo: "https://i.pravatar.cc/100?img=47",
};
const MENTOR_EMBEDDED: Mentor = Mentor {
    name: "Nusrat Noor",
    photo: "https://i.pravatar.cc/100?img=12",
};

/// The next scheduled training, shown prominently on the events page.
pub static UPCOMING_EVENT: ClubEvent = ClubEvent {
    id: "embedded",
    title: "Training: Embedded Systems (Beginner to Practical)",
    brief: "Hands-on microcontrollers, peripherals, and real projects.",
    duration: "October 12\u{2013}19, 2025 (Tentative)",
    photo: "https://raw.githubusercontent.com/dr12029/img/main/embedded2.webp",
    details: EventDetails {
        participants: "TBA",
        objective: "Enable learners to build and debug embedded applications end-to-end.",
        taught: &[
            "C basics on MCU",
            "GPIO, timers, PWM",
            "Sensors & drivers",
            "Debugging & deployments",
        ],
        syllabus: &[
            SyllabusEntry { when: "Day 1", topic: "Intro to Embedded & C Basics" },
            SyllabusEntry { when: "Day 2", topic: "GPIO, Timers, and PWM" },
            SyllabusEntry { when: "Day 3", topic: "Sensors & Drivers" },
            SyllabusEntry { when: "Day 4", topic: "Debugging & Deployments" },
        ],
        features: &[
            "Live hardware demos",
            "Project-based assignments",
            "Mentor feedback",
            "Certificate of completion",
        ],
        mentor: &MENTOR_EMBEDDED,
    },
};

/// Completed trainings listed below the upcoming event.
pub static PREVIOUS_EVENTS: &[ClubEvent] = &[
    ClubEvent {
        id: "cp",
        title: "Free Online Training: Competitive Programming",
        brief: "Kickstart your problem-solving with time complexity, STL, and patterns.",
        duration: "June 10\u{2013}15, 2025",
        photo: "https://raw.githubusercontent.com/dr12029/img/main/cp.webp",
        details: EventDetails {
            participants: "120",
            objective: "Introduce algorithmic thinking and CP workflows.",
            taught: &[
                "Time complexity basics",
                "Arrays/Strings patterns",
                "Intro to STL & templates",
                "Problem-solving drills",
            ],
            syllabus: &[
                SyllabusEntry { when: "Day 1", topic: "Complexity & Input/Output" },
                SyllabusEntry { when: "Day 2", topic: "Arrays, Strings, and Patterns" },
                SyllabusEntry { when: "Day 3", topic: "STL & Templates" },
                SyllabusEntry { when: "Day 4", topic: "Problem Solving Marathon" },
            ],
            features: &[
                "Live coding sessions",
                "Practice contests",
                "Peer discussion forum",
                "Certificate for top performers",
            ],
            mentor: &MENTOR_CP,
        },
    },
    ClubEvent {
        id: "pcb",
        title: "Free Online Training: PCB Design",
        brief: "From schematic to board: rules, footprints, and manufacturing prep.",
        duration: "July 05\u{2013}09, 2025",
        photo: "https://raw.githubusercontent.com/dr12029/img/main/pcb.webp",
        details: EventDetails {
            participants: "95",
            objective: "Demystify PCB tools and best practices for beginners.",
            taught: &[
                "Schematic capture",
                "Footprint libraries",
                "Design rules",
                "Gerbers & fab",
            ],
            syllabus: &[
                SyllabusEntry { when: "Day 1", topic: "Intro to PCB & Schematic Capture" },
                SyllabusEntry { when: "Day 2", topic: "Footprints & Libraries" },
                SyllabusEntry { when: "Day 3", topic: "Design Rules & Layout" },
                SyllabusEntry { when: "Day 4", topic: "Gerber Generation & Manufacturing" },
            ],
            features: &[
                "Hands-on with PCB software",
                "Project-based learning",
                "Q&A with industry mentors",
                "Design review session",
            ],
            mentor: &MENTOR_PCB,
        },
    },
    ClubEvent {
        id: "uP",
        title: "Free Online: Get Familiar with a Popular Microprocessor",
        brief: "Architecture overview, I/O, interrupts, and basic toolchain.",
        duration: "August 20\u{2013}22, 2025",
        photo: "https://raw.githubusercontent.com/dr12029/img/main/mpu.webp",
        details: EventDetails {
            participants: "110",
            objective: "Build foundational understanding of a common microprocessor.",
            taught: &[
                "Architecture blocks",
                "GPIO & peripherals",
                "Interrupt model",
                "Toolchain quickstart",
            ],
            syllabus: &[
                SyllabusEntry { when: "Day 1", topic: "Microprocessor Architecture" },
                SyllabusEntry { when: "Day 2", topic: "GPIO, Peripherals & Interrupts" },
                SyllabusEntry { when: "Day 3", topic: "Toolchain & Debugging" },
            ],
            features: &[
                "Virtual lab demos",
                "Sample code walkthroughs",
                "Mentor office hours",
                "Project showcase",
            ],
            mentor: &MENTOR_MPU,
        },
    },
];

/// Look up an event by route id across previous and upcoming events.
#[must_use]
pub fn find_event(id: &str) -> Option<&'static ClubEvent> {
    PREVIOUS_EVENTS
        .iter()
        .chain(std::iter::once(&UPCOMING_EVENT))
        .find(|event| event.id == id)
}
