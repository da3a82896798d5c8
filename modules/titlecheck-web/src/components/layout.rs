use dioxus::prelude::*;

/// Page shell: head, font/icon stylesheets, centered content column.
#[allow(non_snake_case)]
#[component]
pub fn Layout(title: String, children: Element) -> Element {
    let full_title = format!("{title} | Title Check");
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{full_title}" }
            script { src: "https://cdn.tailwindcss.com" }
            link {
                rel: "stylesheet",
                href: "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
            }
        }
        body { class: "min-h-screen bg-gray-50 font-sans text-gray-900",
            div { class: "max-w-3xl mx-auto p-6",
                h1 { class: "text-2xl font-semibold mb-1", "Title Check" }
                p { class: "text-sm text-gray-500 mb-6",
                    "Check a proposed publication title for similarity and compliance."
                }
                {children}
            }
        }
    }
}
