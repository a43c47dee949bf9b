use std::rc::Rc;

use crate::components::empty_state::EmptyState;
use leptos::*;

pub struct Column<T> {
    pub header: &'static str,
    pub cell: Rc<dyn Fn(&T) -> View>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header,
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T> Column<T> {
    pub fn new<V: IntoView>(header: &'static str, cell: impl Fn(&T) -> V + 'static) -> Self {
        Self {
            header,
            cell: Rc::new(move |row: &T| cell(row).into_view()),
        }
    }

    pub fn text(header: &'static str, cell: impl Fn(&T) -> String + 'static) -> Self {
        Self::new(header, cell)
    }
}

#[component]
pub fn DataGrid<T: Clone + 'static>(
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    #[prop(into)] empty_title: String,
) -> impl IntoView {
    let columns = Rc::new(columns);
    let header_columns = Rc::clone(&columns);

    view! {
        <Show
            when=move || rows.with(|rows| !rows.is_empty())
            fallback=move || view! { <EmptyState title=empty_title.clone() /> }
        >
            {
                let headers = header_columns
                    .iter()
                    .map(|column| view! {
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                            {column.header}
                        </th>
                    })
                    .collect_view();
                let columns = Rc::clone(&columns);
                view! {
                    <div class="overflow-x-auto">
                        <table class="min-w-full divide-y divide-border">
                            <thead class="bg-surface-muted">
                                <tr>{headers}</tr>
                            </thead>
                            <tbody class="bg-surface-elevated divide-y divide-border">
                                {move || {
                                    rows.get()
                                        .iter()
                                        .map(|row| {
                                            let cells = columns
                                                .iter()
                                                .map(|column| {
                                                    let cell = (column.cell)(row);
                                                    view! {
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{cell}</td>
                                                    }
                                                })
                                                .collect_view();
                                            view! { <tr class="hover:bg-surface-muted">{cells}</tr> }
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                    </div>
                }
            }
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[derive(Clone)]
    struct Row {
        id: i64,
        name: &'static str,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::text("ID", |row: &Row| format!("#{}", row.id)),
            Column::new("Name", |row: &Row| view! { <strong>{row.name}</strong> }),
        ]
    }

    #[test]
    fn renders_headers_and_cells() {
        let html = render_to_string(|| {
            let rows = vec![Row { id: 1, name: "alpha" }, Row { id: 2, name: "beta" }];
            view! { <DataGrid rows=Signal::derive(move || rows.clone()) columns=columns() empty_title="Nothing" /> }
        });
        assert!(html.contains("ID"));
        assert!(html.contains("#2"));
        assert!(html.contains("<strong"));
        assert!(html.contains("beta"));
        assert!(!html.contains("Nothing"));
    }

    #[test]
    fn renders_empty_state_without_rows() {
        let html = render_to_string(|| {
            view! { <DataGrid rows=Signal::derive(Vec::<Row>::new) columns=columns() empty_title="No users found" /> }
        });
        assert!(html.contains("No users found"));
        assert!(html.contains("fa-inbox"));
        assert!(!html.contains("<table"));
    }
}
