//! Page footer shown below every page.

use leptos::prelude::*;

use crate::config;

stylance::import_crate_style!(css, "src/components/footer/footer.module.css");

fn copyright(year: u32) -> String {
    format!("© {} {}. All rights reserved.", year, config::APP_NAME)
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class=css::footer>
            <p>{copyright(year)}</p>
            <p class=css::credit>"Built with Rust & Leptos"</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright(2026),
            "© 2026 Muhammad Zain. All rights reserved."
        );
    }
}
