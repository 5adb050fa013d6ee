use crate::loader::dataset_name;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    /// URL being fetched
    pub source: String,
}

/// Placeholder shown until the dataset fetch settles.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    let name = dataset_name(&props.source).to_string();

    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            title: "{props.source}",
            "Fetching daily temperatures from {name}..."
        }
    }
}
