use leptos::prelude::*;

/// One breadcrumb step; `href: None` marks the current page
#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

impl Crumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

#[component]
pub fn Breadcrumbs(trail: Vec<Crumb>) -> impl IntoView {
    let last = trail.len().saturating_sub(1);
    view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            <ol>
                {trail
                    .into_iter()
                    .enumerate()
                    .map(|(i, crumb)| {
                        let step = match crumb.href {
                            Some(href) => view! { <a href=href>{crumb.label}</a> }.into_any(),
                            None => {
                                view! { <span aria-current="page">{crumb.label}</span> }.into_any()
                            }
                        };
                        view! {
                            <li>
                                {step}
                                {(i < last).then(|| view! { <span class="breadcrumbs__sep">"/"</span> })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </nav>
    }
}
