use client::dashboards::{AdminDesk, AdminTab};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPencil, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::{ClientRecord, Order, Worker, WorkerRole};
use shared_ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, DataTable, DataTableCell, DataTableRow,
    Form, FormSelect, Input, PageHeader, TabBar, Tone,
};

use crate::auth::use_services;
use crate::format_helpers::{order_line, short_id, status_tone};
use crate::notify::use_notifier;

/// Admin dashboard with tabs for staff, clients and the full order history.
#[component]
pub fn AdminDashboard() -> Element {
    let services = use_services();
    let notifier = use_notifier();
    let mut desk = use_signal(AdminDesk::default);
    let mut loading = use_signal(|| false);
    let mut saving = use_signal(|| false);

    let activate_api = services.api.clone();
    let activate = use_callback(move |tab: AdminTab| {
        let api = activate_api.clone();
        desk.with_mut(|d| d.tab = tab);
        spawn(async move {
            loading.set(true);
            let result = AdminDesk::fetch_tab(&api, tab).await;
            loading.set(false);
            match result {
                Ok(data) => desk.with_mut(|d| d.apply_tab(data)),
                Err(notice) => notifier.show(notice),
            }
        });
    });

    use_effect(move || activate.call(AdminTab::Workers));

    let reload_api = services.api.clone();
    let reload_workers = use_callback(move |_: ()| {
        let api = reload_api.clone();
        spawn(async move {
            match AdminDesk::fetch_workers(&api).await {
                Ok(workers) => desk.with_mut(|d| d.workers = workers),
                Err(stale) => tracing::warn!(message = %stale.message, "Worker list is stale"),
            }
        });
    });

    let submit_api = services.api.clone();
    let submit = use_callback(move |_: ()| {
        let api = submit_api.clone();
        let change = match desk.peek().prepare_worker() {
            Ok(change) => change,
            Err(notice) => return notifier.show(notice),
        };
        spawn(async move {
            saving.set(true);
            let outcome = change.send(&api).await;
            let saved = outcome.is_ok();
            let notice = desk.with_mut(|d| d.settle_worker(&change, outcome));
            saving.set(false);
            notifier.show(notice);
            if saved {
                reload_workers.call(());
            }
        });
    });

    let delete_api = services.api.clone();
    let delete = use_callback(move |worker_id: String| {
        let api = delete_api.clone();
        spawn(async move {
            saving.set(true);
            let outcome = api.delete_worker(&worker_id).await;
            let deleted = outcome.is_ok();
            let notice = desk.with_mut(|d| d.settle_delete(&worker_id, outcome));
            saving.set(false);
            notifier.show(notice);
            if deleted {
                reload_workers.call(());
            }
        });
    });

    let tab = desk.read().tab;
    let active = AdminTab::ALL.iter().position(|t| *t == tab).unwrap_or(0);
    let labels: Vec<String> = AdminTab::ALL.iter().map(|t| t.label().to_string()).collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            PageHeader { title: "Administration", subtitle: "Staff, clients and every order" }

            TabBar {
                labels,
                active,
                onselect: move |index: usize| {
                    if let Some(tab) = AdminTab::ALL.get(index) {
                        activate.call(*tab);
                    }
                },
            }

            if loading() {
                p { class: "dashboard-loading", "Loading..." }
            }

            match tab {
                AdminTab::Workers => rsx! {
                    WorkersTab { desk, saving: saving(), onsubmit: submit, ondelete: delete }
                },
                AdminTab::Clients => rsx! {
                    ClientsTab { clients: desk.read().clients.clone() }
                },
                AdminTab::Orders => rsx! {
                    HistoryTab { orders: desk.read().history.clone() }
                },
            }
        }
    }
}

#[component]
fn WorkersTab(
    mut desk: Signal<AdminDesk>,
    saving: bool,
    onsubmit: Callback<()>,
    ondelete: Callback<String>,
) -> Element {
    let form = desk.read().form.clone();
    let editing = desk.read().editing.is_some();
    let workers: Vec<Worker> = desk.read().workers.clone();
    let password_label = if editing {
        "Password (leave blank to keep)"
    } else {
        "Password"
    };
    let form_title = if editing { "Edit worker" } else { "New worker" };
    let role_options: Vec<(String, String)> = WorkerRole::ALL
        .iter()
        .map(|role| (role.as_str().to_string(), role.label().to_string()))
        .collect();

    rsx! {
        div { class: "admin-workers",
            Card {
                class: "admin-worker-form",
                title: "{form_title}",
                Form { busy: saving, onsubmit: move |_| onsubmit.call(()),
                    Input {
                        label: "Email",
                        name: "email",
                        input_type: "email",
                        required: true,
                        value: form.email.clone(),
                        on_input: move |value: String| desk.with_mut(|d| d.form.email = value),
                    }
                    Input {
                        label: "{password_label}",
                        name: "password",
                        input_type: "password",
                        value: form.password.clone(),
                        on_input: move |value: String| desk.with_mut(|d| d.form.password = value),
                    }
                    FormSelect {
                        label: "Role",
                        value: form.role.as_str().to_string(),
                        options: role_options,
                        onchange: move |value: String| {
                            if let Some(role) = WorkerRole::parse(&value) {
                                desk.with_mut(|d| d.form.role = role);
                            }
                        },
                    }
                    div { class: "admin-form-actions",
                        Button { submit: true, busy: saving,
                            if editing { "Save changes" } else { "Create worker" }
                        }
                        if editing {
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| desk.with_mut(|d| d.cancel_edit()),
                                "Cancel"
                            }
                        }
                    }
                }
            }

            DataTable {
                columns: vec!["Email", "Role", ""],
                row_count: workers.len(),
                empty_message: "No workers yet.",
                for worker in workers {
                    DataTableRow { key: "{worker.id}",
                        DataTableCell { "{worker.email}" }
                        DataTableCell {
                            Badge { label: worker.role.label().to_string(), tone: Tone::Neutral }
                        }
                        DataTableCell {
                            div { class: "admin-row-actions",
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    size: ButtonSize::Compact,
                                    label: "Edit {worker.email}",
                                    onclick: {
                                        let worker = worker.clone();
                                        move |_| desk.with_mut(|d| d.edit(&worker))
                                    },
                                    Icon::<LdPencil> { icon: LdPencil, width: 14, height: 14 }
                                }
                                Button {
                                    variant: ButtonVariant::Danger,
                                    size: ButtonSize::Compact,
                                    label: "Delete {worker.email}",
                                    disabled: saving,
                                    onclick: {
                                        let id = worker.id.clone();
                                        move |_| ondelete.call(id.clone())
                                    },
                                    Icon::<LdTrash2> { icon: LdTrash2, width: 14, height: 14 }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ClientsTab(clients: Vec<ClientRecord>) -> Element {
    rsx! {
        DataTable {
            columns: vec!["Name", "Email", "Phone", "Address"],
            row_count: clients.len(),
            empty_message: "No registered clients.",
            for client in clients {
                DataTableRow { key: "{client.id}",
                    DataTableCell { "{client.full_name}" }
                    DataTableCell { "{client.email}" }
                    DataTableCell { "{client.phone}" }
                    DataTableCell { "{client.address}" }
                }
            }
        }
    }
}

#[component]
fn HistoryTab(orders: Vec<Order>) -> Element {
    rsx! {
        DataTable {
            columns: vec!["Order", "Client", "Items", "Total", "Status", "Created"],
            row_count: orders.len(),
            empty_message: "No orders yet.",
            for order in orders {
                HistoryRow { key: "{order.id}", order }
            }
        }
    }
}

#[component]
fn HistoryRow(order: Order) -> Element {
    let number = short_id(&order.id).to_string();
    let client = order.client_name.clone().unwrap_or_else(|| "Unknown".to_string());
    let email = order.client_email.clone().unwrap_or_default();
    let lines: Vec<String> = order.items.iter().map(order_line).collect();
    let total = order.total_display();
    let created = order.created_display();
    let status = order.status.label().to_string();

    rsx! {
        DataTableRow {
            DataTableCell { "#{number}" }
            DataTableCell {
                div { "{client}" }
                if !email.is_empty() {
                    div { class: "admin-muted", "{email}" }
                }
            }
            DataTableCell {
                ul { class: "admin-order-items",
                    for (index, line) in lines.into_iter().enumerate() {
                        li { key: "{index}", "{line}" }
                    }
                }
            }
            DataTableCell { numeric: true, "{total}" }
            DataTableCell {
                Badge { label: status, tone: status_tone(order.status) }
            }
            DataTableCell { "{created}" }
        }
    }
}
