use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Pulseboard" }
            p { "Seeded market-insight records, filtered and charted four ways." }

            ul { class: "page-home__features",
                li { "Analytics — sector intensity at a glance" }
                li { "Academy — sector share plus likelihood vs impact" }
                li { "CRM — source and region drill-down" }
                li { "Logistics — topic spread over end years" }
            }
            p { class: "page-home__cta", "Pick a report from the sidebar to get started." }
        }
    }
}
