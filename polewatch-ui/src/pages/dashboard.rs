//! Dashboard Page
//!
//! Fleet KPI overview. Requires a session token; stats load on mount and
//! every 15 seconds until the page is left.

use gloo_timers::callback::Interval;
use leptos::*;
use leptos_router::*;

use crate::api::{self, Stats, UserInfo};
use crate::components::kpi_card::kpi_value;
use crate::components::KpiCard;
use crate::state::session;

/// Stats refresh period
pub const REFRESH_MS: u32 = 15_000;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let Some(token) = session::token() else {
        return view! { <Redirect path="/signin" /> }.into_view();
    };

    let stats = create_rw_signal(Stats::default());
    let user = create_rw_signal(None::<UserInfo>);
    let loading = create_rw_signal(true);
    let menu_open = create_rw_signal(false);

    // Every tick issues a request, whether or not earlier ones have settled.
    // Signals may be disposed by the time a response lands, hence try_*.
    let load_stats = move || {
        spawn_local(async move {
            match api::fetch_stats().await {
                Ok(data) => {
                    stats.try_set(data);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error loading stats: {}", e).into());
                }
            }
            loading.try_set(false);
        });
    };

    spawn_local(async move {
        match api::fetch_user_info(&token).await {
            Ok(info) => {
                user.try_set(Some(info));
            }
            Err(Some(status)) => {
                web_sys::console::warn_1(&format!("Failed to fetch user info: {}", status).into());
            }
            Err(None) => {
                web_sys::console::error_1(&"Error loading user".into());
            }
        }
    });

    load_stats();
    let interval = Interval::new(REFRESH_MS, load_stats);
    on_cleanup(move || drop(interval));

    let logout = move |_| {
        session::clear_token();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/signin");
        }
    };

    view! {
        <div class="space-y-6 text-gray-100 relative">
            <div class="flex justify-between items-start">
                <div>
                    <h1 class="text-3xl font-bold text-white">"Dashboard Overview"</h1>
                    <p class="text-gray-400 mt-1">"Monitor your smart devices in real-time"</p>
                </div>

                // User menu
                <div class="relative">
                    <button
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                        class="h-10 w-10 rounded-full bg-emerald-700 flex items-center justify-center
                               hover:ring-2 hover:ring-emerald-400 transition"
                    >
                        "👤"
                    </button>

                    {move || {
                        if !menu_open.get() {
                            return None;
                        }
                        user.get().map(|info| view! {
                            <div class="absolute right-0 mt-2 w-48 bg-[#1e1e1e] border border-gray-700 rounded-lg shadow-lg p-3 z-50">
                                <p class="text-sm font-semibold text-white">{info.name}</p>
                                <p class="text-xs text-gray-400 capitalize">{info.role}</p>
                                <hr class="my-2 border-gray-700" />
                                <button
                                    on:click=logout
                                    class="w-full text-left text-sm text-red-400 hover:text-red-300 transition"
                                >
                                    "Log Out"
                                </button>
                            </div>
                        })
                    }}
                </div>
            </div>

            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-4">
                <KpiCard
                    title="Total Poles"
                    description="All registered poles"
                    accent="bg-blue-900/30 text-blue-400"
                    icon="📶"
                    value=Signal::derive(move || kpi_value(loading.get(), stats.get().total))
                />
                <KpiCard
                    title="Active Poles"
                    description="Currently operational"
                    accent="bg-green-900/30 text-green-400"
                    icon="⚡"
                    value=Signal::derive(move || kpi_value(loading.get(), stats.get().active))
                />
                <KpiCard
                    title="Inactive Poles"
                    description="Not operational"
                    accent="bg-gray-800/40 text-gray-400"
                    icon="⏻"
                    value=Signal::derive(move || kpi_value(loading.get(), stats.get().inactive))
                />
                <KpiCard
                    title="Active Alerts"
                    description="Requires attention"
                    accent="bg-yellow-900/30 text-yellow-400"
                    icon="⚠"
                    value=Signal::derive(move || kpi_value(loading.get(), stats.get().alerts))
                />
            </div>

            <SystemStatus />
        </div>
    }
    .into_view()
}

/// Static status panel
#[component]
fn SystemStatus() -> impl IntoView {
    let rows = [
        ("System Online", "All services operational"),
        ("Database Connected", "Latency: 10–15ms"),
        ("Data Sync Active", "Last sync: Just now"),
    ];

    view! {
        <section class="border border-gray-800 bg-[#1b1b1b] rounded-xl p-6">
            <h2 class="text-lg font-semibold text-white mb-4">"System Status"</h2>
            <div class="space-y-4">
                {rows.into_iter().map(|(label, detail)| view! {
                    <div class="flex items-center justify-between">
                        <div class="flex items-center gap-2">
                            <div class="h-3 w-3 rounded-full bg-green-500" />
                            <span class="text-sm font-medium text-gray-200">{label}</span>
                        </div>
                        <span class="text-xs text-gray-400">{detail}</span>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
