//! Data Export Page
//!
//! Pick a dataset and optional date range, then open the CSV in a new tab.

use leptos::*;

use crate::api;
use crate::state::export::{download_disabled, export_url, Dataset};
use crate::state::global::GlobalState;

/// Data export page component
#[component]
pub fn DataExport() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (dataset, set_dataset) = create_signal(Dataset::default());
    let (start, set_start) = create_signal(String::new());
    let (end, set_end) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);

    let dates_disabled = move || !dataset.get().accepts_date_range();
    let disabled = move || download_disabled(loading.get(), &start.get(), &end.get());

    let download = move |_| {
        set_loading.set(true);

        let url = export_url(&api::get_api_base(), dataset.get(), &start.get(), &end.get());
        let opened = web_sys::window()
            .map(|window| window.open_with_url_and_target(&url, "_blank").is_ok())
            .unwrap_or(false);

        if !opened {
            web_sys::console::error_1(&format!("Download failed: {}", url).into());
            state.show_error("Something went wrong while downloading the file.");
        }

        set_loading.set(false);
    };

    let input_class = move || {
        if dates_disabled() {
            "w-full bg-gray-800 rounded-lg px-4 py-2 border border-gray-700 opacity-50 cursor-not-allowed"
        } else {
            "w-full bg-gray-800 rounded-lg px-4 py-2 border border-gray-700 focus:border-emerald-500 focus:outline-none"
        }
    };

    view! {
        <section class="bg-[#1b1b1b] border border-gray-800 rounded-xl p-6 space-y-4">
            <h1 class="text-lg font-semibold text-white">"Data Export"</h1>

            <div class="grid gap-4 md:grid-cols-3">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Dataset"</label>
                    <select
                        on:change=move |ev| {
                            if let Some(d) = Dataset::from_value(&event_target_value(&ev)) {
                                set_dataset.set(d);
                            }
                        }
                        class="w-full bg-gray-800 rounded-lg px-4 py-2 border border-gray-700"
                    >
                        {Dataset::ALL.into_iter().map(|d| view! {
                            <option value=d.as_str() selected=move || dataset.get() == d>
                                {d.label()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Start Date"</label>
                    <input
                        type="date"
                        prop:value=move || start.get()
                        on:input=move |ev| set_start.set(event_target_value(&ev))
                        disabled=dates_disabled
                        class=input_class
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"End Date"</label>
                    <input
                        type="date"
                        prop:value=move || end.get()
                        on:input=move |ev| set_end.set(event_target_value(&ev))
                        disabled=dates_disabled
                        class=input_class
                    />
                </div>
            </div>

            <button
                on:click=download
                disabled=disabled
                class="mt-4 px-4 py-2 bg-emerald-700 hover:bg-emerald-600 disabled:bg-gray-700
                       rounded-lg font-medium transition-colors"
            >
                {move || if loading.get() { "Preparing..." } else { "⬇ Download CSV" }}
            </button>
        </section>
    }
}
