use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "page about-page",
            h1 { "About us" }
            p { "La Cocina is a neighbourhood restaurant serving home-style dishes made from fresh, local ingredients." }
            p { "Our waiters take orders at the table, our clients can order from home, and the kitchen sees every order the moment it is placed." }
            h2 { "Opening hours" }
            ul {
                li { "Monday to Friday: 12:00 – 23:00" }
                li { "Saturday and Sunday: 13:00 – 00:00" }
            }
        }
    }
}
