//! KPI Card Component
//!
//! One fleet counter with its title and caption.

use leptos::*;

/// Shown instead of the value until the first stats load settles
pub const LOADING_PLACEHOLDER: &str = "…";

/// Value text for a tile
pub fn kpi_value(loading: bool, value: u64) -> String {
    if loading {
        LOADING_PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

/// KPI card component
#[component]
pub fn KpiCard(
    title: &'static str,
    description: &'static str,
    /// Tailwind classes for the icon badge
    accent: &'static str,
    icon: &'static str,
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-[#1e1e1e] border border-gray-800 rounded-xl p-5 hover:shadow-lg transition-shadow">
            <div class="flex items-center justify-between pb-2">
                <span class="text-sm font-medium text-gray-400">{title}</span>
                <span class=format!("p-2 rounded-lg {}", accent)>{icon}</span>
            </div>
            <div class="text-3xl font-bold text-white">{move || value.get()}</div>
            <p class="text-xs text-gray-400 mt-1">{description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpi_value_placeholder_while_loading() {
        assert_eq!(kpi_value(true, 42), LOADING_PLACEHOLDER);
        assert_eq!(kpi_value(false, 42), "42");
        assert_eq!(kpi_value(false, 0), "0");
    }
}
