use contracts::domain::org_unit::ValidationStatus;
use leptos::prelude::*;

fn variant_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

/// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
#[component]
pub fn Badge(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        format!(
            "badge {}",
            variant_class(variant.get().as_deref().unwrap_or("neutral"))
        )
    };

    view! { <span class=class>{children()}</span> }
}

/// Org unit validation status as a coloured badge.
#[component]
pub fn ValidationBadge(status: ValidationStatus) -> impl IntoView {
    view! {
        <span class=format!("badge badge--status {}", variant_class(status.badge_variant()))>
            {status.as_str()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_class() {
        assert_eq!(variant_class(ValidationStatus::Valid.badge_variant()), "badge--success");
        assert_eq!(variant_class("unknown"), "badge--neutral");
    }
}
