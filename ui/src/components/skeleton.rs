use dioxus::prelude::*;
use dioxus::dioxus_core::AttributeValue;

use crate::config::SKELETON_CLASSES;
use crate::core::classes::class_names;

/// Pulsing block shown while content loads.
///
/// Every global attribute is forwarded to the rendered `div`; a caller `class`
/// is appended to the fixed placeholder classes.
///
/// ```ignore
/// rsx! { Skeleton { class: "h-4 w-24", aria_hidden: "true" } }
/// ```
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let attributes = with_base_class(SKELETON_CLASSES, attributes);

    rsx! {
        div { ..attributes }
    }
}

/// Fold every plain `class` attribute into a single one led by `base`.
pub(crate) fn with_base_class(base: &str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let mut extra = Vec::new();
    let mut forwarded = Vec::with_capacity(attributes.len() + 1);

    for attribute in attributes {
        let is_class = attribute.name == "class" && attribute.namespace.is_none();
        match &attribute.value {
            AttributeValue::Text(value) if is_class => extra.push(value.clone()),
            _ => forwarded.push(attribute),
        }
    }

    let class = class_names(std::iter::once(base).chain(extra.iter().map(String::as_str)));
    forwarded.insert(0, Attribute::new("class", class, None, false));
    forwarded
}
