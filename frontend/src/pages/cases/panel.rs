use crate::{
    api::MedicalCase,
    components::{
        common::{Badge, Button, ButtonVariant},
        data_grid::{Column, DataGrid},
        layout::{AdminLayout, LoadingSpinner, WarningMessage},
    },
    pages::cases::{
        detail::CaseDetailDialog,
        utils::{
            case_revenue, doctor_label, history_or, patient_label, status_label, status_tone,
            total_case_revenue,
        },
        view_model::use_cases_view_model,
    },
    utils::{
        format::{format_amount, format_currency},
        time::format_timestamp,
    },
};
use leptos::*;

fn case_columns(selected: RwSignal<Option<MedicalCase>>) -> Vec<Column<MedicalCase>> {
    vec![
        Column::new("Case ID", |case: &MedicalCase| {
            view! { <span class="font-semibold">{format!("#{}", case.id)}</span> }
        }),
        Column::text("Patient ID", |case: &MedicalCase| patient_label(case.patient_id)),
        Column::text("Doctor ID", |case: &MedicalCase| doctor_label(case.doctor_id)),
        Column::new("Status", |case: &MedicalCase| {
            view! { <Badge tone=status_tone(&case.status) label=status_label(&case.status) /> }
        }),
        Column::text("Submitted", |case: &MedicalCase| format_timestamp(&case.created_at)),
        Column::text("Last Updated", |case: &MedicalCase| format_timestamp(&case.updated_at)),
        Column::new("Medical History", |case: &MedicalCase| {
            view! {
                <span class="block max-w-xs truncate">{history_or(case, "No history provided")}</span>
            }
        }),
        Column::new("Revenue", |case: &MedicalCase| {
            view! {
                <span class="font-semibold text-status-success-text">
                    {format!("${}", format_amount(case_revenue(case)))}
                </span>
            }
        }),
        Column::new("Actions", move |case: &MedicalCase| {
            let target = case.clone();
            view! {
                <Button
                    variant=ButtonVariant::Secondary
                    on:click=move |_| selected.set(Some(target.clone()))
                >
                    "View"
                </Button>
            }
        }),
    ]
}

#[component]
pub fn CasesPage() -> impl IntoView {
    let vm = use_cases_view_model();
    let loading = vm.cases_resource.loading();
    let cases = create_memo(move |_| vm.cases());

    view! {
        <AdminLayout
            title="Cases Audit"
            back_href="/dashboard"
            on_refresh=Callback::new(move |_| vm.refresh())
            refreshing=loading
        >
            {move || vm.warning().map(|message| view! { <WarningMessage message=message /> })}
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-bold text-fg">"All Platform Cases"</h2>
                    <div class="text-right">
                        <p class="text-sm text-fg-muted">
                            {move || format!("Total Cases: {}", cases.with(Vec::len))}
                        </p>
                        <p class="text-lg font-bold text-status-success-text">
                            {move || format!(
                                "Total Revenue: {}",
                                cases.with(|cases| format_currency(total_case_revenue(cases)))
                            )}
                        </p>
                    </div>
                </div>
                <Show
                    when=move || !(loading.get() && cases.with(Vec::is_empty))
                    fallback=|| view! { <LoadingSpinner label="Loading cases..." /> }
                >
                    <DataGrid
                        rows=cases
                        columns=case_columns(vm.selected)
                        empty_title="No cases found"
                    />
                </Show>
            </section>
            <CaseDetailDialog selected=vm.selected />
        </AdminLayout>
    }
}
