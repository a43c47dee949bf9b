use crate::{
    api::Transaction,
    components::{
        cards::MetricCard,
        common::{Badge, Tone},
        data_grid::{Column, DataGrid},
        layout::{AdminLayout, LoadingSpinner, WarningMessage},
    },
    pages::transactions::{
        utils::{
            amount_tone, case_label, doctor_label, method_label, patient_label,
            platform_share_label, signed_amount, status_tone, transaction_label, type_tone,
            TransactionSummary,
        },
        view_model::use_transactions_view_model,
    },
    utils::{format::format_currency, time::format_timestamp},
};
use leptos::*;

fn transaction_columns() -> Vec<Column<Transaction>> {
    vec![
        Column::new("Transaction ID", |txn: &Transaction| {
            view! { <span class="font-semibold">{transaction_label(txn.id)}</span> }
        }),
        Column::new("Type", |txn: &Transaction| {
            view! { <Badge tone=type_tone(&txn.kind) label=txn.kind.to_uppercase() /> }
        }),
        Column::text("Case ID", |txn: &Transaction| case_label(txn.case_id)),
        Column::text("Patient", |txn: &Transaction| patient_label(txn.patient_id)),
        Column::text("Doctor", |txn: &Transaction| doctor_label(txn.doctor_id)),
        Column::new("Amount", |txn: &Transaction| {
            view! {
                <span class="font-semibold" data-tone=amount_tone(txn).as_str()>
                    {signed_amount(txn)}
                </span>
            }
        }),
        Column::text("Platform Share", |txn: &Transaction| {
            platform_share_label(txn.platform_share)
        }),
        Column::new("Status", |txn: &Transaction| {
            view! { <Badge tone=status_tone(&txn.status) label=txn.status.to_uppercase() /> }
        }),
        Column::text("Date", |txn: &Transaction| format_timestamp(&txn.created_at)),
        Column::text("Method", |txn: &Transaction| {
            method_label(txn.payment_method.as_deref())
        }),
    ]
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let vm = use_transactions_view_model();
    let loading = vm.transactions_resource.loading();
    let summary = vm.summary;
    let amount = move |pick: fn(&TransactionSummary) -> f64| {
        Signal::derive(move || format_currency(summary.with(pick)))
    };

    view! {
        <AdminLayout
            title="Financial Transactions"
            back_href="/dashboard"
            on_refresh=Callback::new(move |_| vm.refresh())
            refreshing=loading
        >
            {move || vm.warning().map(|message| view! { <WarningMessage message=message /> })}
            <dl class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-4">
                <MetricCard
                    title="Total Revenue"
                    value=amount(|s| s.total_revenue)
                    detail=Signal::derive(|| "All patient payments".to_string())
                    tone=Tone::Success
                    icon="fa-receipt"
                />
                <MetricCard
                    title="Platform Share"
                    value=amount(|s| s.platform_share)
                    detail=Signal::derive(|| "60% of total revenue".to_string())
                    tone=Tone::Info
                    icon="fa-chart-line"
                />
                <MetricCard
                    title="Doctor Payouts"
                    value=amount(|s| s.doctor_payouts)
                    detail=Signal::derive(|| "40% paid to doctors".to_string())
                    tone=Tone::Warning
                    icon="fa-university"
                />
                <MetricCard
                    title="Pending Payouts"
                    value=amount(|s| s.pending_payouts)
                    detail=Signal::derive(|| "Awaiting processing".to_string())
                    tone=Tone::Error
                    icon="fa-dollar-sign"
                />
            </dl>
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-bold text-fg">"All Transactions"</h2>
                    <p class="text-sm text-fg-muted">
                        {move || format!("Total: {} transactions", vm.transactions.with(Vec::len))}
                    </p>
                </div>
                <Show
                    when=move || !(loading.get() && vm.transactions.with(Vec::is_empty))
                    fallback=|| view! { <LoadingSpinner label="Loading transactions..." /> }
                >
                    <DataGrid
                        rows=vm.transactions
                        columns=transaction_columns()
                        empty_title="No transactions found"
                    />
                </Show>
            </section>
        </AdminLayout>
    }
}
