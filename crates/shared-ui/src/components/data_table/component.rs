use dioxus::prelude::*;

/// Table with a fixed header row. When `row_count` is zero the body shows
/// `empty_message` across all columns instead of `children`.
#[component]
pub fn DataTable(
    columns: Vec<&'static str>,
    row_count: usize,
    #[props(default = "Nothing to show.".to_string())] empty_message: String,
    children: Element,
) -> Element {
    let span = columns.len().max(1);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for (index, column) in columns.iter().enumerate() {
                            th { key: "{index}", scope: "col", "{column}" }
                        }
                    }
                }
                tbody {
                    if row_count == 0 {
                        tr { class: "data-table-empty",
                            td { colspan: "{span}", "{empty_message}" }
                        }
                    } else {
                        {children}
                    }
                }
            }
        }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

/// Body cell; `numeric` right-aligns amounts.
#[component]
pub fn DataTableCell(#[props(default)] numeric: bool, children: Element) -> Element {
    rsx! {
        td { class: if numeric { "data-table-cell numeric" } else { "data-table-cell" },
            {children}
        }
    }
}
