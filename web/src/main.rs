use dioxus::prelude::*;

use ui::core::config::DashboardConfig;
use ui::i18n;
use ui::views::Dashboard;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    use_context_provider(DashboardConfig::from_env);

    // AppHeader writes it on selection; widgets read it through `i18n::use_language`.
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Title { "Friday Meter" }
        document::Style { "{ui::THEME_CSS}" }

        Dashboard {}
    }
}
