//! Modal Dialog

use leptos::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the
/// close button calls `on_close`.
#[component]
pub fn Modal(
    #[prop(into)]
    title: String,
    #[prop(into)]
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div class="absolute inset-0 bg-black/50" on:click=move |_| on_close.call(()) />
            <div class="relative bg-white rounded-lg shadow-xl w-full max-w-lg max-h-[90vh] overflow-y-auto">
                <div class="flex items-center justify-between px-6 py-4 border-b border-gray-200">
                    <h3 class="text-lg font-semibold text-gray-900">{title}</h3>
                    <button class="text-gray-400 hover:text-gray-600" on:click=move |_| on_close.call(())>
                        "✕"
                    </button>
                </div>
                <div class="px-6 py-4">
                    {children()}
                </div>
            </div>
        </div>
    }
}
