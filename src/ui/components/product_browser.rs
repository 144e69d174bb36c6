use dioxus::prelude::*;

use crate::ui::browse_context::BrowseContext;

/// Placeholder rendered when a product has no brand on record.
const MISSING_BRAND: &str = "Unknown";

/// The single-page product browser: filter inputs, the filtered product
/// list, and pagination controls. On fetch failure the whole surface is
/// replaced by a static error message until the next page change.
#[component]
pub fn ProductBrowser() -> Element {
    let ctx = use_context::<BrowseContext>();

    // Refetch whenever the page cursor changes, including the initial
    // mount. Filter changes do not refetch; they only re-derive the view.
    use_effect({
        let mut ctx = ctx.clone();
        move || ctx.load_page()
    });

    if *ctx.fetch_failed.read() {
        return rsx! {
            div { class: "container mx-auto p-6",
                div { class: "bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded",
                    "Error fetching products. Please try again later."
                }
            }
        };
    }

    let filtered = ctx.filtered_products();
    let at_first_page = ctx.pager.read().at_first_page();
    let ctx_clone = ctx.clone();

    rsx! {
        div { class: "container mx-auto p-6",
            h1 { class: "text-3xl font-bold mb-6", "Product List" }

            FilterBar {}

            if *ctx.is_loading.read() {
                div { class: "text-center py-4",
                    p { class: "text-gray-600", "Loading products..." }
                }
            }

            ul { class: "divide-y divide-gray-200",
                for product in filtered {
                    li { class: "py-3",
                        div { class: "text-sm font-medium text-gray-900", "Product ID: {product.id}" }
                        div { class: "text-sm", "Name: {product.product}" }
                        div { class: "text-sm", "Price: {product.price}" }
                        div { class: "text-sm text-gray-500",
                            if let Some(brand) = &product.brand {
                                "Brand: {brand}"
                            } else {
                                "Brand: {MISSING_BRAND}"
                            }
                        }
                    }
                }
            }

            div { class: "mt-6 flex gap-2",
                button {
                    class: "px-4 py-2 bg-gray-600 text-white rounded-lg disabled:opacity-50",
                    disabled: at_first_page,
                    onclick: {
                        let mut ctx = ctx_clone.clone();
                        move |_| ctx.prev_page()
                    },
                    "Previous page"
                }
                button {
                    class: "px-4 py-2 bg-blue-600 text-white rounded-lg",
                    onclick: {
                        let mut ctx = ctx_clone.clone();
                        move |_| ctx.next_page()
                    },
                    "Next page"
                }
            }
        }
    }
}

/// The three independent free-text filter inputs.
#[component]
fn FilterBar() -> Element {
    let ctx = use_context::<BrowseContext>();
    let ctx_clone = ctx.clone();

    rsx! {
        div { class: "mb-6 flex gap-2",
            input {
                class: "flex-1 p-3 border border-gray-300 rounded-lg",
                placeholder: "Filter by name",
                value: "{ctx.name_filter}",
                oninput: {
                    let mut ctx = ctx_clone.clone();
                    move |event: FormEvent| ctx.set_name_filter(event.value())
                },
            }
            input {
                class: "flex-1 p-3 border border-gray-300 rounded-lg",
                placeholder: "Filter by price",
                value: "{ctx.price_filter}",
                oninput: {
                    let mut ctx = ctx_clone.clone();
                    move |event: FormEvent| ctx.set_price_filter(event.value())
                },
            }
            input {
                class: "flex-1 p-3 border border-gray-300 rounded-lg",
                placeholder: "Filter by brand",
                value: "{ctx.brand_filter}",
                oninput: {
                    let mut ctx = ctx_clone.clone();
                    move |event: FormEvent| ctx.set_brand_filter(event.value())
                },
            }
        }
    }
}
