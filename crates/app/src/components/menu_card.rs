use dioxus::prelude::*;
use shared_types::MenuItem;
use shared_ui::Card;

/// A dish on the menu. `children` become the card actions, e.g. an
/// add-to-cart button.
#[component]
pub fn MenuCard(item: MenuItem, children: Element) -> Element {
    let price = item.price.display();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./cards.css") }

        Card {
            class: "menu-card",
            title: item.display_name().to_string(),
            subtitle: item.display_description().to_string(),
            image: item.image_src(),
            actions: children,
            span { class: "menu-card-price", "{price}" }
        }
    }
}
