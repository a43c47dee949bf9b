use crate::{
    api::MedicalCase,
    components::dialog::InfoDialog,
    pages::cases::utils::{case_revenue, doctor_label, history_or, patient_label, status_label},
    utils::{format::format_amount, time::format_timestamp},
};
use leptos::*;

#[component]
fn DetailRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="flex justify-between gap-4 py-1 border-b border-border last:border-0">
            <dt class="font-medium text-fg-muted">{label}</dt>
            <dd class="text-fg">{value}</dd>
        </div>
    }
}

/// Shown while `selected` holds a case; closing clears the selection.
#[component]
pub fn CaseDetailDialog(selected: RwSignal<Option<MedicalCase>>) -> impl IntoView {
    let on_close = Callback::new(move |_| selected.set(None));

    move || {
        selected.get().map(|case| {
            view! {
                <InfoDialog title=format!("Case #{} Details", case.id) on_close=on_close>
                    <section class="space-y-2 text-sm">
                        <h3 class="font-semibold text-fg">"Case Information"</h3>
                        <dl>
                            <DetailRow label="Patient ID" value=patient_label(case.patient_id) />
                            <DetailRow label="Doctor ID" value=doctor_label(case.doctor_id) />
                            <DetailRow label="Status" value=status_label(&case.status) />
                            <DetailRow label="Created" value=format_timestamp(&case.created_at) />
                            <DetailRow label="Last Updated" value=format_timestamp(&case.updated_at) />
                            <DetailRow
                                label="Revenue"
                                value=format!("${}", format_amount(case_revenue(&case)))
                            />
                        </dl>
                    </section>
                    <section class="space-y-2 text-sm">
                        <h3 class="font-semibold text-fg">"Medical History"</h3>
                        <p class="rounded bg-surface-muted p-3 text-fg whitespace-pre-wrap">
                            {history_or(&case, "No medical history provided")}
                        </p>
                    </section>
                </InfoDialog>
            }
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::cases::repository::demo_cases;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_selected_case_details() {
        let html = render_to_string(|| {
            let mut case = demo_cases()[1].clone();
            case.medical_history = None;
            case.revenue = None;
            let selected = create_rw_signal(Some(case));
            view! { <CaseDetailDialog selected=selected /> }
        });
        assert!(html.contains("Case #2 Details"));
        assert!(html.contains("P-3"));
        assert!(html.contains("Unassigned"));
        assert!(html.contains("SUBMITTED"));
        assert!(html.contains("$200"));
        assert!(html.contains("No medical history provided"));
    }

    #[test]
    fn hidden_without_selection() {
        let html = render_to_string(|| {
            let selected = create_rw_signal(None::<MedicalCase>);
            view! { <CaseDetailDialog selected=selected /> }
        });
        assert!(!html.contains("role=\"dialog\""));
    }
}
